//! Author-name consistency check for one tracked author.
//!
//! Catches abbreviated or misspelled renderings of a specific person in a large,
//! hand-curated bibliography: if the surname shows up, the full name must too.

use crate::error::RenderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameValidator {
    full_name: String,
    surname: String,
}

impl NameValidator {
    /// Returns `None` for a blank reference name, which disables the check.
    pub fn new(full_name: &str) -> Option<Self> {
        let full_name = full_name.trim();
        let surname = full_name.split_whitespace().last()?;
        Some(Self {
            surname: surname.to_string(),
            full_name: full_name.to_string(),
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Check an author line, naming `title` in the error
    pub fn check(&self, authors: &str, title: &str) -> Result<(), RenderError> {
        if authors.contains(&self.surname) && !authors.contains(&self.full_name) {
            return Err(RenderError::NameInconsistency {
                surname: self.surname.clone(),
                title: title.to_string(),
            });
        }
        Ok(())
    }
}
