//! Error types for parsing, rendering and serialization

use thiserror::Error;

/// Data-integrity failures detected while turning records into table rows.
///
/// Every variant is fatal for the record it names. Whether it is also fatal for
/// the whole run is decided by the caller through [`ErrorPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The record has neither an `author` nor an `editor` field
    #[error("Entry '{pubid}' has neither author nor editor")]
    MissingAuthorship { pubid: String },
    /// A surname shows up in the author line without the full reference name
    #[error("Name {surname} faulty in entry {title}")]
    NameInconsistency { surname: String, title: String },
    /// A field every record must carry (`title`, `year`) is absent
    #[error("Entry '{pubid}' is missing required field '{field}'")]
    MissingRequiredField { pubid: String, field: &'static str },
    /// Two records share the same identifier
    #[error("Entry identifier '{pubid}' is used more than once")]
    DuplicatePubid { pubid: String },
}

impl RenderError {
    /// Identifier of the offending record, when the error carries one
    pub fn pubid(&self) -> Option<&str> {
        match self {
            RenderError::MissingAuthorship { pubid }
            | RenderError::MissingRequiredField { pubid, .. }
            | RenderError::DuplicatePubid { pubid } => Some(pubid),
            RenderError::NameInconsistency { .. } => None,
        }
    }
}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// A record could not be rendered
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// What to do with a record that fails to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole run on the first bad record
    #[default]
    Abort,
    /// Leave the record out, log it and keep going
    Skip,
}
