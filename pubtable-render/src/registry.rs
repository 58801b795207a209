//! Format registry for format discovery and selection
//!
//! Formats can be registered and retrieved by name, or picked by file extension.

use crate::bibliography::Bibliography;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{BibtexFormat, HtmlTableFormat};
use std::collections::HashMap;

/// Registry of bibliography formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let bib = registry.parse(source, "bibtex")?;
/// let table = registry.serialize(&bib, "html-table")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format, replacing any format with the same name
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_lowercase();

        let mut matches: Vec<_> = self
            .formats
            .values()
            .filter(|format| format.file_extensions().contains(&extension.as_str()))
            .map(|format| format.name().to_string())
            .collect();
        matches.sort();
        matches.into_iter().next()
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Bibliography, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source)
    }

    /// Serialize a bibliography using the specified format
    pub fn serialize(&self, bib: &Bibliography, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize(bib)
    }
}

impl Default for FormatRegistry {
    /// Registry holding every built-in format with default options
    fn default() -> Self {
        let mut registry = FormatRegistry::new();
        registry.register(BibtexFormat::default());
        registry.register(HtmlTableFormat::default());
        registry
    }
}
