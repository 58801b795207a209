//! Typed view over a [`BibEntry`].
//!
//! Required fields are held directly, everything else is an explicit `Option`.
//! Building a [`Record`] is the point where a missing `title` or `year` surfaces.

use crate::bibliography::BibEntry;
use crate::error::RenderError;

/// Bibliographic category of an entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryType {
    Article,
    InProceedings,
    InBook,
    InCollection,
    Book,
    Proceedings,
    PhdThesis,
    Preprint,
    /// Any other tag (`misc`, `techreport`, ...), kept lower-cased
    Other(String),
}

impl EntryType {
    /// Parse an entry type tag (case-insensitive)
    pub fn parse(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "article" => Self::Article,
            "inproceedings" => Self::InProceedings,
            "inbook" => Self::InBook,
            "incollection" => Self::InCollection,
            "book" => Self::Book,
            "proceedings" => Self::Proceedings,
            "phdthesis" => Self::PhdThesis,
            "preprint" => Self::Preprint,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Article => "article",
            Self::InProceedings => "inproceedings",
            Self::InBook => "inbook",
            Self::InCollection => "incollection",
            Self::Book => "book",
            Self::Proceedings => "proceedings",
            Self::PhdThesis => "phdthesis",
            Self::Preprint => "preprint",
            Self::Other(tag) => tag,
        }
    }
}

/// A bibliographic record ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub pubid: &'a str,
    pub entry_type: EntryType,
    pub title: &'a str,
    pub year: &'a str,
    pub author: Option<&'a str>,
    pub editor: Option<&'a str>,
    pub booktitle: Option<&'a str>,
    pub journal: Option<&'a str>,
    pub volume: Option<&'a str>,
    pub number: Option<&'a str>,
    pub pages: Option<&'a str>,
    pub publisher: Option<&'a str>,
    pub address: Option<&'a str>,
    pub series: Option<&'a str>,
    pub month: Option<&'a str>,
    pub pdf: Option<&'a str>,
    pub url: Option<&'a str>,
    pub annote: Option<&'a str>,
    entry: &'a BibEntry,
}

impl<'a> Record<'a> {
    /// Build the typed view, failing when `title` or `year` is absent
    pub fn from_entry(entry: &'a BibEntry) -> Result<Self, RenderError> {
        let required = |field: &'static str| {
            entry
                .get(field)
                .ok_or_else(|| RenderError::MissingRequiredField {
                    pubid: entry.key.clone(),
                    field,
                })
        };

        Ok(Record {
            pubid: &entry.key,
            entry_type: EntryType::parse(&entry.entry_type),
            title: required("title")?,
            year: required("year")?,
            author: entry.get("author"),
            editor: entry.get("editor"),
            booktitle: entry.get("booktitle"),
            journal: entry.get("journal"),
            volume: entry.get("volume"),
            number: entry.get("number"),
            pages: entry.get("pages"),
            publisher: entry.get("publisher"),
            address: entry.get("address"),
            series: entry.get("series"),
            month: entry.get("month"),
            pdf: entry.get("pdf"),
            url: entry.get("url"),
            annote: entry.get("annote"),
            entry,
        })
    }

    /// The entry this record was built from, used to regenerate its BibTeX text
    pub fn entry(&self) -> &'a BibEntry {
        self.entry
    }
}
