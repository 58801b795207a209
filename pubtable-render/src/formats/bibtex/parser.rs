//! BibTeX reader built on nom
//!
//! Handles:
//! - Regular entries delimited by braces or parentheses
//! - `@string` macros, `#` concatenation and the predefined month macros
//! - `@preamble` and `@comment` blocks (skipped)
//! - Braced values with nested braces, quoted values and bare numbers
//!
//! Text outside `@` blocks is ignored, as BibTeX itself does, and an `@` inside
//! a `%` line comment does not start a block. A block that cannot be parsed
//! aborts the whole read with the line it starts on.

use super::latex::decode_latex;
use crate::bibliography::{BibEntry, Bibliography};
use crate::error::FormatError;
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0, one_of},
    error::{Error, ErrorKind},
    IResult,
};
use std::collections::HashMap;

/// Predefined month macros, expanded to full English names
const MONTH_MACROS: [(&str, &str); 12] = [
    ("jan", "January"),
    ("feb", "February"),
    ("mar", "March"),
    ("apr", "April"),
    ("may", "May"),
    ("jun", "June"),
    ("jul", "July"),
    ("aug", "August"),
    ("sep", "September"),
    ("oct", "October"),
    ("nov", "November"),
    ("dec", "December"),
];

/// Reader options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Decode LaTeX accents and drop protective braces in field values
    pub decode_latex: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { decode_latex: true }
    }
}

enum Block {
    Entry(BibEntry),
    Macro(String, String),
    Skipped,
}

/// Parse BibTeX source into a [`Bibliography`]
pub fn parse_bibliography(input: &str, options: ParseOptions) -> Result<Bibliography, FormatError> {
    let mut macros: HashMap<String, String> = MONTH_MACROS
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    let mut entries = Vec::new();
    let mut remaining = input;
    let mut line = 1;

    while let Some(pos) = next_block_start(remaining) {
        line += count_lines(&remaining[..pos]);
        remaining = &remaining[pos..];

        let (rest, block) = parse_block(remaining, &macros)
            .map_err(|_| FormatError::ParseError(format!("line {line}: malformed entry")))?;
        line += count_lines(&remaining[..remaining.len() - rest.len()]);
        match block {
            Block::Entry(raw) => entries.push(finish_entry(raw, options)),
            Block::Macro(name, value) => {
                macros.insert(name.to_lowercase(), value);
            }
            Block::Skipped => {}
        }
        remaining = rest;
    }

    Ok(Bibliography::new(entries))
}

/// Offset of the next `@` that is not inside a `%` line comment
fn next_block_start(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'@' => return Some(pos),
            b'%' => {
                while pos < bytes.len() && bytes[pos] != b'\n' {
                    pos += 1;
                }
            }
            _ => pos += 1,
        }
    }
    None
}

fn count_lines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// Post-process raw field values: optional LaTeX decoding, whitespace collapsing
fn finish_entry(mut entry: BibEntry, options: ParseOptions) -> BibEntry {
    for field in &mut entry.fields {
        let decoded = if options.decode_latex {
            decode_latex(&field.value)
        } else {
            std::mem::take(&mut field.value)
        };
        field.value = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    }
    entry
}

fn fail(input: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(input, ErrorKind::Char))
}

fn parse_block<'a>(input: &'a str, macros: &HashMap<String, String>) -> IResult<&'a str, Block> {
    let (rest, _) = char('@')(input)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, tag) = take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(rest)?;
    let (rest, _) = multispace0(rest)?;

    match tag.to_lowercase().as_str() {
        "comment" => {
            if rest.starts_with('{') {
                let (rest, _) = braced_content(rest)?;
                Ok((rest, Block::Skipped))
            } else {
                let end = rest.find('\n').unwrap_or(rest.len());
                Ok((&rest[end..], Block::Skipped))
            }
        }
        "preamble" => {
            let (rest, close) = open_delimiter(rest)?;
            let (rest, _) = field_value(rest, macros)?;
            let (rest, _) = close_delimiter(rest, close)?;
            Ok((rest, Block::Skipped))
        }
        "string" => {
            let (rest, close) = open_delimiter(rest)?;
            let (rest, (name, value)) = field(rest, macros)?;
            let (rest, _) = close_delimiter(rest, close)?;
            Ok((rest, Block::Macro(name.to_string(), value)))
        }
        _ => {
            let (rest, entry) = entry_body(rest, tag, macros)?;
            Ok((rest, Block::Entry(entry)))
        }
    }
}

fn open_delimiter(input: &str) -> IResult<&str, char> {
    let (rest, open) = one_of("{(")(input)?;
    let close = if open == '{' { '}' } else { ')' };
    let (rest, _) = multispace0(rest)?;
    Ok((rest, close))
}

fn close_delimiter(input: &str, close: char) -> IResult<&str, char> {
    let (rest, _) = multispace0(input)?;
    char(close)(rest)
}

fn entry_body<'a>(
    input: &'a str,
    entry_type: &str,
    macros: &HashMap<String, String>,
) -> IResult<&'a str, BibEntry> {
    let (rest, close) = open_delimiter(input)?;
    let (rest, key) =
        take_while1(|c: char| !c.is_whitespace() && !",{}()=\"#%".contains(c))(rest)?;
    let mut entry = BibEntry::new(entry_type, key);

    let (mut rest, _) = multispace0(rest)?;
    while let Some(after_comma) = rest.strip_prefix(',') {
        let (after, _) = multispace0(after_comma)?;
        if after.starts_with(close) {
            rest = after;
            break;
        }
        let (after, (name, value)) = field(after, macros)?;
        entry.add_field(name, value);
        let (after, _) = multispace0(after)?;
        rest = after;
    }

    let (rest, _) = close_delimiter(rest, close)?;
    Ok((rest, entry))
}

/// `name = value`
fn field<'a>(
    input: &'a str,
    macros: &HashMap<String, String>,
) -> IResult<&'a str, (&'a str, String)> {
    let (rest, _) = multispace0(input)?;
    let (rest, name) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || "_-:.+".contains(c))(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('=')(rest)?;
    let (rest, value) = field_value(rest, macros)?;
    Ok((rest, (name, value)))
}

/// One or more value pieces joined with `#`
fn field_value<'a>(input: &'a str, macros: &HashMap<String, String>) -> IResult<&'a str, String> {
    let mut value = String::new();
    let mut remaining = input;

    loop {
        let (rest, _) = multispace0(remaining)?;
        let (rest, piece) = value_piece(rest, macros)?;
        value.push_str(&piece);

        let (rest, _) = multispace0(rest)?;
        match rest.strip_prefix('#') {
            Some(after) => remaining = after,
            None => return Ok((rest, value)),
        }
    }
}

fn value_piece<'a>(input: &'a str, macros: &HashMap<String, String>) -> IResult<&'a str, String> {
    if input.starts_with('{') {
        let (rest, content) = braced_content(input)?;
        return Ok((rest, content[1..content.len() - 1].to_string()));
    }
    if input.starts_with('"') {
        let (rest, content) = quoted_content(input)?;
        return Ok((rest, content.to_string()));
    }
    let (rest, word) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || "_-:.+".contains(c))(input)?;
    if word.chars().all(|c| c.is_ascii_digit()) {
        return Ok((rest, word.to_string()));
    }
    let expanded = macros
        .get(&word.to_lowercase())
        .cloned()
        .unwrap_or_else(|| word.to_string());
    Ok((rest, expanded))
}

/// `{...}` including nested braces; returns the whole braced span
fn braced_content(input: &str) -> IResult<&str, &str> {
    if !input.starts_with('{') {
        return Err(fail(input));
    }

    let bytes = input.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[pos + 1..], &input[..pos + 1]));
                }
            }
            b'\\' => pos += 1,
            _ => {}
        }
        pos += 1;
    }

    Err(fail(input))
}

/// `"..."`; quotes inside braces do not terminate. Returns the inner text.
fn quoted_content(input: &str) -> IResult<&str, &str> {
    if !input.starts_with('"') {
        return Err(fail(input));
    }

    let bytes = input.as_bytes();
    let mut depth = 0usize;
    let mut pos = 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'"' if depth == 0 => return Ok((&input[pos + 1..], &input[1..pos])),
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b'\\' => pos += 1,
            _ => {}
        }
        pos += 1;
    }

    Err(fail(input))
}
