//! Publication tables from BibTeX bibliographies
//!
//!     This crate turns a bibliography into one browsable HTML table: entries grouped by
//!     year (newest first) and by month inside each year, each with a badge for its
//!     submission type, a normalized citation line, optional PDF/URL links and a
//!     collapsible raw BibTeX block. The table is meant to be pasted into, or included
//!     by, a static publication page.
//!
//!     This is a pure lib: it never touches the filesystem, environment or stdout. The
//!     pubtable-cli crate owns files, configuration and logging setup.
//!
//! Architecture
//!
//!     .
//!     ├── bibliography.rs         # Loose entries as read (type, key, ordered fields)
//!     ├── record.rs               # Typed, borrowed view of one entry
//!     ├── normalize.rs            # Dashes and non-breaking spaces
//!     ├── validate.rs             # Tracked-author name check
//!     ├── resolve.rs              # Author/venue fallbacks, badge, citation line
//!     ├── grouping.rs             # Year/month ordering
//!     ├── format.rs               # Format trait
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     └── formats
//!         ├── bibtex              # nom reader, LaTeX decoding, canonical writer
//!         └── html                # Entry rows and table assembly
//!
//!     Rendering is a single synchronous pass: records are typed, grouped, rendered in
//!     output order and appended to one in-memory string. Nothing is written until the
//!     whole table is done, so a failing run leaves no partial output behind.
//!
//! Errors
//!
//!     Bad records produce a typed [`RenderError`]. Whether that aborts the run or just
//!     drops the record is decided by [`ErrorPolicy`] in the HTML options.
//!
//! Testing
//!     tests
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs
//!     includes them as modules.

pub mod bibliography;
pub mod error;
pub mod format;
pub mod formats;
pub mod grouping;
pub mod normalize;
pub mod record;
pub mod registry;
pub mod resolve;
pub mod validate;

pub use bibliography::{BibEntry, BibField, Bibliography};
pub use error::{ErrorPolicy, FormatError, RenderError};
pub use format::Format;
pub use formats::{
    BibtexFormat, HtmlTableFormat, HtmlTableOptions, ParseOptions, RenderedTable, SkippedRecord,
    UrlPolicy,
};
pub use record::{EntryType, Record};
pub use registry::FormatRegistry;

/// Parse BibTeX source and render it as a publication table in one step.
pub fn render_bibtex(
    source: &str,
    parse_options: ParseOptions,
    table_options: HtmlTableOptions,
) -> Result<RenderedTable, FormatError> {
    let bib = formats::bibtex::parse_bibliography(source, parse_options)?;
    HtmlTableFormat::new(table_options).render(&bib)
}
