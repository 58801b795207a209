//! Per-record rendering: the visible citation row and the hidden raw-citation row.

use super::serializer::{append, create_element, create_text, element_with_text};
use super::HtmlTableOptions;
use crate::error::RenderError;
use crate::formats::bibtex::write_entry;
use crate::record::Record;
use crate::resolve::{author_line, venue, BadgeClass, CitationLine};
use crate::validate::NameValidator;
use markup5ever_rcdom::Handle;

/// The two rows produced for one record
pub(crate) struct RenderedEntry<'a> {
    pub pubid: &'a str,
    pub visible: Handle,
    pub hidden: Handle,
}

/// Resolve, validate and build both rows for a record.
pub(crate) fn render_entry<'a>(
    record: &Record<'a>,
    options: &HtmlTableOptions,
    validator: Option<&NameValidator>,
) -> Result<RenderedEntry<'a>, RenderError> {
    let authors = author_line(record)?;
    if let Some(validator) = validator {
        validator.check(&authors, record.title)?;
    }

    let line = CitationLine::new(record, &authors);
    let badge = BadgeClass::resolve(&record.entry_type, venue(record));

    Ok(RenderedEntry {
        pubid: record.pubid,
        visible: visible_row(record, &line, badge, options),
        hidden: hidden_row(record),
    })
}

fn visible_row(
    record: &Record<'_>,
    line: &CitationLine,
    badge: BadgeClass,
    options: &HtmlTableOptions,
) -> Handle {
    let row = create_element("tr", vec![("id", record.pubid), ("class", "entry")]);

    let badge_class = format!("{}{}", options.badge_class_prefix, badge.as_str());
    let badge_cell = create_element("td", vec![]);
    append(&badge_cell, create_element("div", vec![("class", &badge_class)]));
    append(&row, badge_cell);

    let citation = create_element("td", vec![]);
    append(&citation, element_with_text("i", vec![], &line.authors));
    append(&citation, create_text(","));
    append(&citation, create_element("br", vec![]));
    append(&citation, create_text(" "));
    append(&citation, element_with_text("b", vec![], &line.title));
    append(&citation, create_text(","));
    append(&citation, create_element("br", vec![]));
    append(&citation, create_text(&line.details_text()));
    append(&citation, info_links(record, badge, options));
    append(&row, citation);

    row
}

/// Toggle control, PDF and URL links and the annotation
fn info_links(record: &Record<'_>, badge: BadgeClass, options: &HtmlTableOptions) -> Handle {
    let links = create_element("p", vec![("class", "infolinks")]);

    let toggle = format!(
        "javascript:{}('{}','bibtex')",
        options.toggle_function,
        escape_js_string(record.pubid)
    );
    let toggle_anchor = create_element("a", vec![("href", &toggle)]);
    let bibtex_icon = options.asset_url("BibTeX.png");
    append(
        &toggle_anchor,
        create_element("img", vec![("src", &bibtex_icon), ("alt", "BibTeX")]),
    );
    append(&links, create_text(" "));
    append(&links, toggle_anchor);

    if let Some(pdf) = record.pdf {
        let href = options.pdf_url(pdf);
        let pdf_anchor = create_element("a", vec![("href", &href), ("target", "_blank")]);
        let pdf_icon = options.asset_url("PDF.png");
        append(
            &pdf_anchor,
            create_element("img", vec![("src", &pdf_icon), ("alt", "PDF")]),
        );
        append(&links, create_text(" "));
        append(&links, pdf_anchor);
    }

    if let Some(url) = record.url {
        if options.url_policy.shows_url(record.pdf.is_some(), badge) {
            append(&links, create_text(" "));
            append(
                &links,
                element_with_text("a", vec![("href", url), ("target", "_blank")], "URL"),
            );
        }
    }

    if let Some(annote) = record.annote {
        append(&links, create_text(" "));
        let mut attrs = vec![("class", "annote")];
        if !options.annote_style.is_empty() {
            attrs.push(("style", options.annote_style.as_str()));
        }
        append(&links, element_with_text("span", attrs, annote));
    }

    links
}

/// Escape text for a single-quoted JavaScript string literal
fn escape_js_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn hidden_row(record: &Record<'_>) -> Handle {
    let row_id = format!("bib_{}", record.pubid);
    let row = create_element("tr", vec![("id", &row_id), ("class", "bibtex noshow")]);
    append(&row, create_element("td", vec![]));

    let cell = create_element("td", vec![]);
    append(&cell, element_with_text("b", vec![], "BibTeX"));
    append(&cell, create_text(":"));
    append(
        &cell,
        element_with_text("pre", vec![], &write_entry(record.entry())),
    );
    append(&row, cell);

    row
}
