//! BibTeX format implementation
//!
//! The reader turns `.bib` source into a [`Bibliography`]; the writer regenerates
//! canonical BibTeX text, which the HTML table embeds as each entry's raw citation.
//! Regenerated text is not the original source: fields come out sorted and braced,
//! and decoded LaTeX stays decoded.

mod latex;
mod parser;
mod serializer;

use crate::bibliography::Bibliography;
use crate::error::FormatError;
use crate::format::Format;

pub use latex::decode_latex;
pub use parser::{parse_bibliography, ParseOptions};
pub use serializer::{write_bibliography, write_entry};

/// Format implementation for BibTeX
#[derive(Debug, Clone, Default)]
pub struct BibtexFormat {
    options: ParseOptions,
}

impl BibtexFormat {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }
}

impl Format for BibtexFormat {
    fn name(&self) -> &str {
        "bibtex"
    }

    fn description(&self) -> &str {
        "BibTeX bibliography database"
    }

    fn file_extensions(&self) -> &[&str] {
        &["bib"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Bibliography, FormatError> {
        parse_bibliography(source, self.options)
    }

    fn serialize(&self, bib: &Bibliography) -> Result<String, FormatError> {
        Ok(write_bibliography(bib))
    }
}
