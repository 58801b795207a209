//! Typographic normalization of titles, venues and page ranges.

const EM_DASH: &str = "\u{2014}";
const EN_DASH: &str = "\u{2013}";

/// Normalize a title or venue: `---` to an em dash, `--` to an en dash, `~` to a space.
///
/// The triple hyphen has to go first, otherwise the double-hyphen rule eats part of it.
pub fn normalize_text(text: &str) -> String {
    text.replace("---", EM_DASH)
        .replace("--", EN_DASH)
        .replace('~', " ")
}

/// Normalize a page range: a single or double hyphen becomes one en dash.
///
/// Both `12-34` and `12--34` yield `12–34`.
pub fn normalize_pages(pages: &str) -> String {
    pages.replace("--", EN_DASH).replace('-', EN_DASH)
}
