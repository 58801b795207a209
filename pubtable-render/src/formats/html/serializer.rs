//! HTML table assembly (Bibliography → `<table>` fragment)
//!
//! Pipeline: entries → typed records → year/month groups → per-entry DOM rows →
//! HTML string. Each row is serialized as soon as it is built; the finished
//! table is returned as one string so callers can write it out atomically.

use super::entry::render_entry;
use super::{HtmlTableOptions, RenderedTable, SkippedRecord};
use crate::bibliography::Bibliography;
use crate::error::{ErrorPolicy, FormatError, RenderError};
use crate::grouping::group_records;
use crate::record::Record;
use crate::validate::NameValidator;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

/// Render a bibliography into the publication table.
///
/// Records are checked for required fields and unique identifiers first, then
/// grouped and rendered in output order. Under [`ErrorPolicy::Abort`] the first
/// failing record aborts the run; under [`ErrorPolicy::Skip`] it is reported in
/// [`RenderedTable::skipped`] and left out.
pub fn serialize_table(
    bib: &Bibliography,
    options: &HtmlTableOptions,
) -> Result<RenderedTable, FormatError> {
    let validator = options
        .reference_name
        .as_deref()
        .and_then(NameValidator::new);
    let mut skipped = Vec::new();

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(bib.len());
    for entry in &bib.entries {
        let record = if seen.insert(entry.key.as_str()) {
            Record::from_entry(entry)
        } else {
            Err(RenderError::DuplicatePubid {
                pubid: entry.key.clone(),
            })
        };
        match record {
            Ok(record) => records.push(record),
            Err(err) => handle_failure(&entry.key, err, options.on_error, &mut skipped)?,
        }
    }

    let mut output = format!(
        "<table id=\"{}\" border=\"1\"><tbody>\n",
        html_escape(&options.table_id)
    )
    .into_bytes();
    let mut rendered = 0;

    for group in group_records(records) {
        let mut rows = Vec::new();
        let mut group_rendered = 0;
        for record in &group.records {
            match render_entry(record, options, validator.as_ref()) {
                Ok(entry) => {
                    serialize_node(&mut rows, &entry.visible)?;
                    serialize_node(&mut rows, &entry.hidden)?;
                    group_rendered += 1;
                    tracing::debug!(pubid = entry.pubid, "rendered entry");
                }
                Err(err) => handle_failure(record.pubid, err, options.on_error, &mut skipped)?,
            }
        }

        if group_rendered > 0 {
            tracing::debug!(year = group.year, entries = group_rendered, "year group");
            serialize_node(&mut output, &year_row(group.year))?;
            output.extend_from_slice(&rows);
            rendered += group_rendered;
        }
    }

    output.extend_from_slice(b"</tbody></table>\n");
    let html = String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))?;

    tracing::info!(rendered, skipped = skipped.len(), "publication table rendered");
    Ok(RenderedTable {
        html,
        rendered,
        skipped,
    })
}

fn handle_failure(
    pubid: &str,
    error: RenderError,
    policy: ErrorPolicy,
    skipped: &mut Vec<SkippedRecord>,
) -> Result<(), FormatError> {
    match policy {
        ErrorPolicy::Abort => Err(error.into()),
        ErrorPolicy::Skip => {
            tracing::warn!(pubid, %error, "skipping entry");
            skipped.push(SkippedRecord {
                pubid: pubid.to_string(),
                error,
            });
            Ok(())
        }
    }
}

/// Navigable marker row opening a year group
fn year_row(year: &str) -> Handle {
    let row = create_element("tr", vec![("class", "year")]);
    append(&row, create_element("td", vec![]));
    let cell = create_element("td", vec![]);
    append(&cell, create_element("a", vec![("name", year)]));
    append(&cell, create_text(year));
    append(&row, cell);
    row
}

/// Create an HTML element with attributes
pub(super) fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
pub(super) fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Create an element holding a single text node
pub(super) fn element_with_text(tag: &str, attrs: Vec<(&str, &str)>, text: &str) -> Handle {
    let element = create_element(tag, attrs);
    append(&element, create_text(text));
    element
}

pub(super) fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Serialize a node including itself, followed by a newline
fn serialize_node(output: &mut Vec<u8>, node: &Handle) -> Result<(), FormatError> {
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut *output, &serializable, opts).map_err(|e| {
        FormatError::SerializationError(format!("HTML serialization failed: {e}"))
    })?;
    output.push(b'\n');
    Ok(())
}

/// Escape HTML special characters in attribute text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
