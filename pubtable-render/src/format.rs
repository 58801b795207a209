//! Format trait definition
//!
//! This module defines the Format trait implemented by every input and output
//! format. The trait provides a uniform interface for reading source text into a
//! [`Bibliography`] and writing a [`Bibliography`] back out.

use crate::bibliography::Bibliography;
use crate::error::FormatError;

/// Trait for bibliography formats
///
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, bib: &Bibliography) -> Result<String, FormatError> {
///         Ok(format!("{} entries", bib.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "bibtex", "html-table")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Bibliography)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Bibliography → output)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Bibliography
    fn parse(&self, _source: &str) -> Result<Bibliography, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a Bibliography into text
    fn serialize(&self, _bib: &Bibliography) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
