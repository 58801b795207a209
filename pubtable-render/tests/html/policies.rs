use pubtable_render::formats::html::{HtmlTableFormat, HtmlTableOptions, SkippedRecord, UrlPolicy};
use pubtable_render::{BibEntry, Bibliography, ErrorPolicy, FormatError, RenderError};

fn linked(entry_type: &str, key: &str) -> BibEntry {
    BibEntry::new(entry_type, key)
        .with_field("author", "Uwe D. Hanebeck")
        .with_field("title", key)
        .with_field("year", "2021")
        .with_field("pdf", format!("{key}.pdf"))
        .with_field("url", format!("https://example.org/{key}"))
}

fn valid(key: &str) -> BibEntry {
    BibEntry::new("article", key)
        .with_field("author", "A")
        .with_field("title", key)
        .with_field("year", "2021")
}

#[test]
fn test_url_policy_always() {
    let bib = Bibliography::new(vec![linked("inproceedings", "conf"), linked("article", "jour")]);
    let html = HtmlTableFormat::default().render(&bib).unwrap().html;
    assert!(html.contains("href=\"https://example.org/conf\""));
    assert!(html.contains("href=\"https://example.org/jour\""));
}

#[test]
fn test_url_policy_prefer_pdf() {
    let bib = Bibliography::new(vec![
        linked("inproceedings", "conf"),
        linked("article", "jour"),
        valid("nopdf").with_field("url", "https://example.org/nopdf"),
    ]);
    let options = HtmlTableOptions::default().with_url_policy(UrlPolicy::PreferPdf);
    let html = HtmlTableFormat::new(options).render(&bib).unwrap().html;

    assert!(!html.contains("href=\"https://example.org/conf\""));
    assert!(html.contains("href=\"https://isas.iar.kit.edu/pdf/conf.pdf\""));
    assert!(html.contains("href=\"https://example.org/jour\""));
    assert!(html.contains("href=\"https://example.org/nopdf\""));
}

#[test]
fn test_missing_authorship_aborts() {
    let bib = Bibliography::new(vec![
        valid("ok"),
        BibEntry::new("book", "anon")
            .with_field("title", "Anonymous")
            .with_field("year", "2021"),
    ]);
    let err = HtmlTableFormat::default().render(&bib).unwrap_err();
    assert_eq!(
        err,
        FormatError::Render(RenderError::MissingAuthorship {
            pubid: "anon".to_string()
        })
    );
}

#[test]
fn test_missing_year_aborts() {
    let bib = Bibliography::new(vec![BibEntry::new("misc", "noyear")
        .with_field("author", "A")
        .with_field("title", "T")]);
    let err = HtmlTableFormat::default().render(&bib).unwrap_err();
    assert_eq!(
        err,
        FormatError::Render(RenderError::MissingRequiredField {
            pubid: "noyear".to_string(),
            field: "year",
        })
    );
}

#[test]
fn test_skip_policy_reports_and_continues() {
    let bib = Bibliography::new(vec![
        valid("ok"),
        BibEntry::new("misc", "notitle")
            .with_field("author", "A")
            .with_field("year", "2021"),
        valid("ok"),
        valid("also_ok"),
    ]);
    let options = HtmlTableOptions::default().with_error_policy(ErrorPolicy::Skip);
    let table = HtmlTableFormat::new(options).render(&bib).unwrap();

    assert_eq!(table.rendered, 2);
    assert_eq!(
        table.skipped,
        vec![
            SkippedRecord {
                pubid: "notitle".to_string(),
                error: RenderError::MissingRequiredField {
                    pubid: "notitle".to_string(),
                    field: "title",
                },
            },
            SkippedRecord {
                pubid: "ok".to_string(),
                error: RenderError::DuplicatePubid {
                    pubid: "ok".to_string()
                },
            },
        ]
    );
    assert_eq!(table.html.matches("<tr id=\"ok\"").count(), 1);
    assert!(table.html.contains("<tr id=\"also_ok\""));
}

#[test]
fn test_name_validation_accepts_full_name() {
    let options = HtmlTableOptions::default().with_reference_name("Uwe D. Hanebeck");
    let bib = Bibliography::new(vec![BibEntry::new("article", "good")
        .with_field("author", "Uwe D. Hanebeck and X. Y")
        .with_field("title", "Good")
        .with_field("year", "2021")]);
    assert!(HtmlTableFormat::new(options).render(&bib).is_ok());
}

#[test]
fn test_name_validation_rejects_abbreviation() {
    let options = HtmlTableOptions::default().with_reference_name("Uwe D. Hanebeck");
    let bib = Bibliography::new(vec![BibEntry::new("article", "bad")
        .with_field("author", "J. Hanebeck")
        .with_field("title", "Abbreviated")
        .with_field("year", "2021")]);
    let err = HtmlTableFormat::new(options).render(&bib).unwrap_err();
    assert_eq!(err.to_string(), "Name Hanebeck faulty in entry Abbreviated");
}

#[test]
fn test_name_validation_checks_editor_fallback() {
    let options = HtmlTableOptions::default().with_reference_name("Uwe D. Hanebeck");
    let bib = Bibliography::new(vec![BibEntry::new("proceedings", "eds")
        .with_field("editor", "U. Hanebeck")
        .with_field("title", "Edited Volume")
        .with_field("year", "2021")]);
    assert!(matches!(
        HtmlTableFormat::new(options).render(&bib),
        Err(FormatError::Render(RenderError::NameInconsistency { .. }))
    ));
}

#[test]
fn test_blank_reference_name_disables_validation() {
    let options = HtmlTableOptions::default().with_reference_name("   ");
    let bib = Bibliography::new(vec![BibEntry::new("article", "any")
        .with_field("author", "J. Hanebeck")
        .with_field("title", "T")
        .with_field("year", "2021")]);
    assert!(HtmlTableFormat::new(options).render(&bib).is_ok());
}
