//! HTML publication table
//!
//! Renders a [`Bibliography`] as one `<table>` meant to be embedded in a static
//! web page. Output only; there is no HTML import.
//!
//! # Library Choice
//!
//! Rows are built as `markup5ever_rcdom` trees and written with `html5ever`'s
//! serializer, so every field value is escaped correctly in text and attribute
//! position without hand-written escaping.
//!
//! # Table Layout
//!
//! | Piece            | HTML                                                           |
//! |------------------|----------------------------------------------------------------|
//! | Table            | `<table id="{table_id}" border="1"><tbody>` … `</tbody></table>` |
//! | Year marker      | `<tr class="year"><td></td><td><a name="2023"></a>2023</td></tr>` |
//! | Visible entry    | `<tr id="{pubid}" class="entry">`                              |
//! |   Badge          | `<td><div class="{badge_class_prefix}{badge}"></div></td>`     |
//! |   Citation       | `<i>authors</i>,<br> <b>title</b>,<br>venue, …, year.`          |
//! |   Info links     | `<p class="infolinks">` toggle, PDF, URL, highlighted annotation |
//! | Raw citation     | `<tr id="bib_{pubid}" class="bibtex noshow">` with a `<pre>`    |
//!
//! # Hosting Page Contract
//!
//! The toggle anchor calls `{toggle_function}('{pubid}','bibtex')`, a function the
//! hosting page must define to show or hide the `bib_{pubid}` row. The `noshow`
//! class is expected to hide raw-citation rows initially. Badge icons and PDFs
//! are resolved against the configured base URLs.
//!
//! # Ordering
//!
//! Year groups run from the highest year down; inside a year, entries without a
//! month come first, then December to January (see [`crate::grouping`]).

mod entry;
mod serializer;

use crate::bibliography::Bibliography;
use crate::error::{ErrorPolicy, FormatError, RenderError};
use crate::format::Format;
use crate::resolve::BadgeClass;

pub use serializer::serialize_table;

/// When to show the URL link next to a PDF link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlPolicy {
    /// Show the URL link whenever the entry has a `url`
    #[default]
    Always,
    /// Hide the URL link when a PDF link is shown, except for journal articles
    PreferPdf,
}

impl UrlPolicy {
    pub fn shows_url(self, has_pdf: bool, badge: BadgeClass) -> bool {
        match self {
            UrlPolicy::Always => true,
            UrlPolicy::PreferPdf => !has_pdf || badge == BadgeClass::Article,
        }
    }
}

/// Options for HTML table rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTableOptions {
    /// `id` attribute of the `<table>` element
    pub table_id: String,
    /// Base URL of the BibTeX and PDF icon images
    pub asset_base_url: String,
    /// Base URL prepended to each entry's `pdf` field
    pub pdf_base_url: String,
    /// Prefix of the badge CSS class; the badge name is appended
    pub badge_class_prefix: String,
    /// Name of the hosting page's show/hide function
    pub toggle_function: String,
    /// Inline CSS of the annotation span; empty leaves it to the page's stylesheet
    pub annote_style: String,
    pub url_policy: UrlPolicy,
    pub on_error: ErrorPolicy,
    /// Full name of the tracked author checked by the name validator
    pub reference_name: Option<String>,
}

impl Default for HtmlTableOptions {
    fn default() -> Self {
        Self {
            table_id: "qs_table".to_string(),
            asset_base_url: "https://isas.iar.kit.edu/img".to_string(),
            pdf_base_url: "https://isas.iar.kit.edu/pdf".to_string(),
            badge_class_prefix: "balken-".to_string(),
            toggle_function: "toggleInfo".to_string(),
            annote_style: "color: red".to_string(),
            url_policy: UrlPolicy::default(),
            on_error: ErrorPolicy::default(),
            reference_name: None,
        }
    }
}

impl HtmlTableOptions {
    pub fn with_reference_name(mut self, name: impl Into<String>) -> Self {
        self.reference_name = Some(name.into());
        self
    }

    pub fn with_url_policy(mut self, policy: UrlPolicy) -> Self {
        self.url_policy = policy;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    pub(crate) fn asset_url(&self, file: &str) -> String {
        join_url(&self.asset_base_url, file)
    }

    pub(crate) fn pdf_url(&self, file: &str) -> String {
        join_url(&self.pdf_base_url, file)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// A record left out of the table under [`ErrorPolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub pubid: String,
    pub error: RenderError,
}

/// Result of a rendering run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    /// The complete `<table>` fragment
    pub html: String,
    /// Number of entries written
    pub rendered: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// Format implementation for the HTML publication table
#[derive(Debug, Clone, Default)]
pub struct HtmlTableFormat {
    options: HtmlTableOptions,
}

impl HtmlTableFormat {
    pub fn new(options: HtmlTableOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlTableOptions {
        &self.options
    }

    /// Render the table and report skipped records
    pub fn render(&self, bib: &Bibliography) -> Result<RenderedTable, FormatError> {
        serialize_table(bib, &self.options)
    }
}

impl Format for HtmlTableFormat {
    fn name(&self) -> &str {
        "html-table"
    }

    fn description(&self) -> &str {
        "HTML publication table grouped by year and month"
    }

    fn file_extensions(&self) -> &[&str] {
        &["table", "html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, bib: &Bibliography) -> Result<String, FormatError> {
        self.render(bib).map(|table| table.html)
    }
}
