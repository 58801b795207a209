use pubtable_render::format::Format;
use pubtable_render::formats::bibtex::{parse_bibliography, write_entry, BibtexFormat, ParseOptions};
use pubtable_render::{FormatError, FormatRegistry};

const FIXTURE: &str = include_str!("../html/fixtures/publications.bib");

#[test]
fn test_fixture_parses() {
    let bib = BibtexFormat::default()
        .parse(FIXTURE)
        .expect("Failed to parse fixture");

    let keys: Vec<&str> = bib.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "Fusion22_Doe",
            "JAIF23_Roe",
            "Book22_Editors",
            "Preprint23_Doe",
            "Thesis22_Doe"
        ]
    );

    let fusion = &bib.entries[0];
    assert_eq!(fusion.entry_type, "inproceedings");
    assert_eq!(fusion.get("address"), Some("Link\u{f6}ping, Sweden"));
    assert_eq!(fusion.get("month"), Some("July"));
    assert_eq!(
        fusion.get("booktitle"),
        Some("Proceedings of the International Conference on Information Fusion (Fusion 2022)")
    );
}

#[test]
fn test_written_entry_is_canonical() {
    let bib = parse_bibliography(FIXTURE, ParseOptions::default()).unwrap();
    let book = &bib.entries[2];

    insta::assert_snapshot!(write_entry(book).trim_end(), @r"
    @book{Book22_Editors,
     editor = {Ann Editor and Bob Editor},
     publisher = {Springer},
     series = {Lecture Notes},
     title = {Collected Works},
     year = {2022}
    }
    ");
}

#[test]
fn test_written_bibliography_is_stable() {
    let format = BibtexFormat::default();
    let bib = format.parse(FIXTURE).unwrap();
    let written = format.serialize(&bib).unwrap();
    let reparsed = format.parse(&written).unwrap();
    assert_eq!(reparsed.len(), bib.len());
    assert_eq!(format.serialize(&reparsed).unwrap(), written);
}

#[test]
fn test_registry_detects_bib_files() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.detect_format_from_filename("papers/Publications.BIB"),
        Some("bibtex".to_string())
    );
    assert_eq!(
        registry.detect_format_from_filename("publist.table"),
        Some("html-table".to_string())
    );
    assert_eq!(registry.detect_format_from_filename("notes.txt"), None);
}

#[test]
fn test_html_table_cannot_be_parsed() {
    let registry = FormatRegistry::default();
    let err = registry.parse("<table></table>", "html-table").unwrap_err();
    assert!(matches!(err, FormatError::NotSupported(_)));
}
