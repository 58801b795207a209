//! Field resolution: fallbacks and derived values for one record.

use crate::error::RenderError;
use crate::normalize::{normalize_pages, normalize_text};
use crate::record::{EntryType, Record};

/// The author line as stored: `author`, or `editor` marked with " (Eds.)".
pub fn author_line(record: &Record<'_>) -> Result<String, RenderError> {
    match (record.author, record.editor) {
        (Some(author), _) => Ok(author.to_string()),
        (None, Some(editor)) => Ok(format!("{editor} (Eds.)")),
        (None, None) => Err(RenderError::MissingAuthorship {
            pubid: record.pubid.to_string(),
        }),
    }
}

/// Author line as displayed: BibTeX's " and " separators become commas.
pub fn display_authors(authors: &str) -> String {
    authors.replace(" and ", ", ")
}

/// The publication container: `booktitle`, else `journal`, else none.
pub fn venue<'a>(record: &Record<'a>) -> Option<&'a str> {
    record.booktitle.or(record.journal)
}

/// Visual classification bucket used to color-code an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeClass {
    Preprint,
    Article,
    InProceedings,
    InBook,
    InCollection,
    Book,
    Proceedings,
    PhdThesis,
    Other,
}

impl BadgeClass {
    /// Classify by entry type; whitelisted types with an arXiv venue count as preprints.
    pub fn resolve(entry_type: &EntryType, venue: Option<&str>) -> Self {
        let class = match entry_type {
            EntryType::Preprint => Self::Preprint,
            EntryType::Article => Self::Article,
            EntryType::InProceedings => Self::InProceedings,
            EntryType::InBook => Self::InBook,
            EntryType::InCollection => Self::InCollection,
            EntryType::Book => Self::Book,
            EntryType::Proceedings => Self::Proceedings,
            EntryType::PhdThesis => Self::PhdThesis,
            EntryType::Other(_) => return Self::Other,
        };
        if venue.is_some_and(|v| v.contains("arXiv")) {
            Self::Preprint
        } else {
            class
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preprint => "preprint",
            Self::Article => "article",
            Self::InProceedings => "inproceedings",
            Self::InBook => "inbook",
            Self::InCollection => "incollection",
            Self::Book => "book",
            Self::Proceedings => "proceedings",
            Self::PhdThesis => "phdthesis",
            Self::Other => "other",
        }
    }
}

/// `volume(number):pages`, `volume:pages` or `pp. pages`; nothing without pages.
pub fn citation_detail(record: &Record<'_>) -> Option<String> {
    let pages = normalize_pages(record.pages?);
    let detail = match (record.volume, record.number) {
        (Some(volume), Some(number)) => format!("{volume}({number}):{pages}"),
        (Some(volume), None) => format!("{volume}:{pages}"),
        (None, _) => format!("pp. {pages}"),
    };
    Some(detail)
}

/// The resolved, normalized pieces of a citation line.
///
/// `details` holds everything after the title in output order and always ends
/// with the year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationLine {
    pub authors: String,
    pub title: String,
    pub details: Vec<String>,
}

impl CitationLine {
    /// Assemble the line from a record and its already-resolved author line
    pub fn new(record: &Record<'_>, authors: &str) -> Self {
        let mut details = Vec::new();
        if let Some(venue) = venue(record) {
            details.push(normalize_text(venue));
        }
        details.extend(citation_detail(record));
        details.extend(
            [record.publisher, record.address, record.series, record.month]
                .into_iter()
                .flatten()
                .map(str::to_string),
        );
        details.push(record.year.to_string());

        CitationLine {
            authors: display_authors(authors),
            title: normalize_text(record.title),
            details,
        }
    }

    /// Everything after the title, period-terminated
    pub fn details_text(&self) -> String {
        format!("{}.", self.details.join(", "))
    }

    /// The citation as plain text, e.g. `John Doe, A Study, Proc X, 2020.`
    pub fn to_plain_text(&self) -> String {
        format!("{}, {}, {}", self.authors, self.title, self.details_text())
    }
}

/// Resolve the full citation line for a record
pub fn citation_line(record: &Record<'_>) -> Result<CitationLine, RenderError> {
    let authors = author_line(record)?;
    Ok(CitationLine::new(record, &authors))
}
