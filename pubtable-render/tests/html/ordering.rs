use pubtable_render::formats::bibtex::ParseOptions;
use pubtable_render::formats::html::{HtmlTableFormat, HtmlTableOptions};
use pubtable_render::{render_bibtex, BibEntry, Bibliography};

const FIXTURE: &str = include_str!("fixtures/publications.bib");

/// Row ids in document order: years as `#2023`, entries by pubid
fn row_sequence(html: &str) -> Vec<String> {
    html.lines()
        .filter_map(|line| {
            if let Some(rest) = line.strip_prefix("<tr class=\"year\"><td></td><td><a name=\"") {
                let year = rest.split('"').next()?;
                Some(format!("#{year}"))
            } else if let Some(rest) = line.strip_prefix("<tr id=\"") {
                let id = rest.split('"').next()?;
                (!id.starts_with("bib_")).then(|| id.to_string())
            } else {
                None
            }
        })
        .collect()
}

fn entry(key: &str, year: &str, month: Option<&str>) -> BibEntry {
    let entry = BibEntry::new("article", key)
        .with_field("author", "A")
        .with_field("title", key)
        .with_field("year", year);
    match month {
        Some(month) => entry.with_field("month", month),
        None => entry,
    }
}

fn render(entries: Vec<BibEntry>) -> Vec<String> {
    let table = HtmlTableFormat::default()
        .render(&Bibliography::new(entries))
        .expect("Failed to render table");
    row_sequence(&table.html)
}

#[test]
fn test_fixture_order() {
    let table = render_bibtex(FIXTURE, ParseOptions::default(), HtmlTableOptions::default())
        .unwrap();
    assert_eq!(
        row_sequence(&table.html),
        vec![
            "#2023",
            "Preprint23_Doe",
            "JAIF23_Roe",
            "#2022",
            "Book22_Editors",
            "Thesis22_Doe",
            "Fusion22_Doe",
        ]
    );
}

#[test]
fn test_newer_year_renders_first() {
    let rows = render(vec![entry("old", "2022", None), entry("new", "2023", None)]);
    assert_eq!(rows, vec!["#2023", "new", "#2022", "old"]);
}

#[test]
fn test_hidden_row_follows_its_entry() {
    let table = HtmlTableFormat::default()
        .render(&Bibliography::new(vec![entry("a", "2020", None), entry("b", "2020", None)]))
        .unwrap();
    let ids: Vec<&str> = table
        .html
        .lines()
        .filter_map(|line| line.strip_prefix("<tr id=\"")?.split('"').next())
        .collect();
    assert_eq!(ids, vec!["a", "bib_a", "b", "bib_b"]);
}

#[test]
fn test_months_descend_after_entries_without_month() {
    let rows = render(vec![
        entry("jan", "2021", Some("January")),
        entry("dec", "2021", Some("dec")),
        entry("none", "2021", None),
        entry("jun", "2021", Some("Jun.")),
    ]);
    assert_eq!(rows, vec!["#2021", "none", "dec", "jun", "jan"]);
}

#[test]
fn test_input_order_kept_within_a_month() {
    let rows = render(vec![
        entry("first", "2021", Some("May")),
        entry("second", "2021", Some("May")),
        entry("third", "2021", Some("May")),
    ]);
    assert_eq!(rows, vec!["#2021", "first", "second", "third"]);
}

#[test]
fn test_unrecognized_month_trails_its_year() {
    let rows = render(vec![
        entry("odd", "2021", Some("Spring")),
        entry("jan", "2021", Some("January")),
        entry("older", "2020", None),
    ]);
    assert_eq!(rows, vec!["#2021", "jan", "odd", "#2020", "older"]);
}
