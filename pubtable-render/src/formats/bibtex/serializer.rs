//! BibTeX writer: regenerates canonical text for entries.
//!
//! Fields are written in alphabetical order with braced values, so the output
//! depends only on the entry's content and not on how it was originally typed.

use crate::bibliography::{BibEntry, Bibliography};

const INDENT: &str = " ";

/// Canonical text of one entry, terminated by a newline
pub fn write_entry(entry: &BibEntry) -> String {
    let mut fields: Vec<_> = entry.fields.iter().collect();
    fields.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = format!("@{}{{{}", entry.entry_type, entry.key);
    for field in fields {
        out.push_str(",\n");
        out.push_str(INDENT);
        out.push_str(&field.name);
        out.push_str(" = {");
        out.push_str(&field.value);
        out.push('}');
    }
    out.push_str("\n}\n");
    out
}

/// Canonical text of a whole bibliography, entries separated by a blank line
pub fn write_bibliography(bib: &Bibliography) -> String {
    bib.entries
        .iter()
        .map(write_entry)
        .collect::<Vec<_>>()
        .join("\n")
}
