//! Format implementations
//!
//! BibTeX is the input side (and the raw-citation writer); the HTML table is
//! output only.

pub mod bibtex;
pub mod html;

pub use bibtex::{BibtexFormat, ParseOptions};
pub use html::{HtmlTableFormat, HtmlTableOptions, RenderedTable, SkippedRecord, UrlPolicy};
