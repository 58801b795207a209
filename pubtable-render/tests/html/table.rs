use pubtable_render::format::Format;
use pubtable_render::formats::bibtex::{parse_bibliography, ParseOptions};
use pubtable_render::formats::html::{HtmlTableFormat, HtmlTableOptions};
use pubtable_render::{render_bibtex, BibEntry, Bibliography};

const FIXTURE: &str = include_str!("fixtures/publications.bib");

fn paper() -> BibEntry {
    BibEntry::new("article", "p1")
        .with_field("author", "John Doe and Jane Roe")
        .with_field("title", "A--B Study")
        .with_field("journal", "Proc X")
        .with_field("volume", "3")
        .with_field("number", "2")
        .with_field("pages", "10--20")
        .with_field("year", "2020")
}

#[test]
fn test_single_entry_table() {
    let bib = Bibliography::new(vec![paper()]);
    let html = HtmlTableFormat::default()
        .serialize(&bib)
        .expect("Failed to render table");

    let expected = concat!(
        "<table id=\"qs_table\" border=\"1\"><tbody>\n",
        "<tr class=\"year\"><td></td><td><a name=\"2020\"></a>2020</td></tr>\n",
        "<tr id=\"p1\" class=\"entry\"><td><div class=\"balken-article\"></div></td>",
        "<td><i>John Doe, Jane Roe</i>,<br> <b>A\u{2013}B Study</b>,<br>",
        "Proc X, 3(2):10\u{2013}20, 2020.",
        "<p class=\"infolinks\"> <a href=\"javascript:toggleInfo('p1','bibtex')\">",
        "<img src=\"https://isas.iar.kit.edu/img/BibTeX.png\" alt=\"BibTeX\"></a></p>",
        "</td></tr>\n",
        "<tr id=\"bib_p1\" class=\"bibtex noshow\"><td></td><td><b>BibTeX</b>:<pre>",
        "@article{p1,\n",
        " author = {John Doe and Jane Roe},\n",
        " journal = {Proc X},\n",
        " number = {2},\n",
        " pages = {10--20},\n",
        " title = {A--B Study},\n",
        " volume = {3},\n",
        " year = {2020}\n",
        "}\n",
        "</pre></td></tr>\n",
        "</tbody></table>\n",
    );
    assert_eq!(html, expected);
}

#[test]
fn test_fixture_renders_every_entry() {
    let table = render_bibtex(FIXTURE, ParseOptions::default(), HtmlTableOptions::default())
        .expect("Failed to render fixture");

    println!("HTML Output:\n{}", table.html);

    assert_eq!(table.rendered, 5);
    assert!(table.skipped.is_empty());
    assert!(table.html.starts_with("<table id=\"qs_table\" border=\"1\"><tbody>\n"));
    assert!(table.html.ends_with("</tbody></table>\n"));
    assert_eq!(table.html.matches("<table").count(), 1);
    assert_eq!(table.html.matches("class=\"entry\"").count(), 5);
    assert_eq!(table.html.matches("class=\"bibtex noshow\"").count(), 5);
}

#[test]
fn test_badges_follow_entry_type() {
    let table = render_bibtex(FIXTURE, ParseOptions::default(), HtmlTableOptions::default())
        .unwrap();
    let html = &table.html;

    assert!(html.contains("<tr id=\"JAIF23_Roe\" class=\"entry\"><td><div class=\"balken-article\">"));
    assert!(html.contains(
        "<tr id=\"Fusion22_Doe\" class=\"entry\"><td><div class=\"balken-inproceedings\">"
    ));
    assert!(html.contains("<tr id=\"Book22_Editors\" class=\"entry\"><td><div class=\"balken-book\">"));
    assert!(html.contains(
        "<tr id=\"Thesis22_Doe\" class=\"entry\"><td><div class=\"balken-phdthesis\">"
    ));
    // misc is outside the whitelist, so the arXiv venue does not make it a preprint
    assert!(html.contains("<tr id=\"Preprint23_Doe\" class=\"entry\"><td><div class=\"balken-other\">"));
}

#[test]
fn test_citation_lines_from_fixture() {
    let table = render_bibtex(FIXTURE, ParseOptions::default(), HtmlTableOptions::default())
        .unwrap();
    let html = &table.html;

    assert!(html.contains(concat!(
        "<i>John Doe, Uwe D. Hanebeck</i>,<br> <b>Tracking with Kalman Filters</b>,<br>",
        "Proceedings of the International Conference on Information Fusion (Fusion 2022), ",
        "pp. 1\u{2013}8, Link\u{f6}ping, Sweden, July, 2022.",
    )));
    assert!(html.contains(concat!(
        "<i>Ann Editor, Bob Editor (Eds.)</i>,<br> <b>Collected Works</b>,<br>",
        "Springer, Lecture Notes, 2022.",
    )));
    assert!(html.contains(
        "<b>Directional Statistics Revisited</b>,<br>Journal of Advances in Information Fusion, 18(1):20\u{2013}41, March, 2023."
    ));
}

#[test]
fn test_info_links() {
    let table = render_bibtex(FIXTURE, ParseOptions::default(), HtmlTableOptions::default())
        .unwrap();
    let html = &table.html;

    assert!(html.contains(concat!(
        " <a href=\"https://isas.iar.kit.edu/pdf/Fusion22_Doe.pdf\" target=\"_blank\">",
        "<img src=\"https://isas.iar.kit.edu/img/PDF.png\" alt=\"PDF\"></a>",
        " <a href=\"https://doi.org/10.1000/fusion22\" target=\"_blank\">URL</a></p>",
    )));
    assert!(html.contains(
        "toggleInfo('Preprint23_Doe','bibtex')\"><img src=\"https://isas.iar.kit.edu/img/BibTeX.png\" alt=\"BibTeX\"></a> <span class=\"annote\" style=\"color: red\">Best Paper Award</span></p>"
    ));
}

#[test]
fn test_field_values_are_escaped() {
    let entry = BibEntry::new("misc", "amp")
        .with_field("author", "Smith & Sons")
        .with_field("title", "<script>alert(1)</script>")
        .with_field("url", "https://example.org/?a=1&b=\"2\"")
        .with_field("year", "2021");
    let html = HtmlTableFormat::default()
        .serialize(&Bibliography::new(vec![entry]))
        .unwrap();

    assert!(html.contains("<i>Smith &amp; Sons</i>"));
    assert!(html.contains("<b>&lt;script&gt;alert(1)&lt;/script&gt;</b>"));
    assert!(html.contains("href=\"https://example.org/?a=1&amp;b=&quot;2&quot;\""));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_custom_hosting_page() {
    let options = HtmlTableOptions {
        table_id: "pubs".to_string(),
        asset_base_url: "/static/icons/".to_string(),
        pdf_base_url: "/papers".to_string(),
        badge_class_prefix: "badge-".to_string(),
        toggle_function: "showRow".to_string(),
        ..Default::default()
    };
    let entry = paper().with_field("pdf", "p1.pdf");
    let html = HtmlTableFormat::new(options)
        .serialize(&Bibliography::new(vec![entry]))
        .unwrap();

    assert!(html.starts_with("<table id=\"pubs\" border=\"1\">"));
    assert!(html.contains("<div class=\"badge-article\">"));
    assert!(html.contains("href=\"javascript:showRow('p1','bibtex')\""));
    assert!(html.contains("src=\"/static/icons/BibTeX.png\""));
    assert!(html.contains("href=\"/papers/p1.pdf\""));
}

#[test]
fn test_rendering_is_deterministic() {
    let bib = parse_bibliography(FIXTURE, ParseOptions::default()).unwrap();
    let format = HtmlTableFormat::default();
    let first = format.serialize(&bib).unwrap();
    let second = format.serialize(&bib).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_quote_in_key_keeps_toggle_call_intact() {
    let entry = BibEntry::new("misc", "OBrien'21")
        .with_field("author", "P. O'Brien")
        .with_field("title", "T")
        .with_field("year", "2021");
    let html = HtmlTableFormat::default()
        .serialize(&Bibliography::new(vec![entry]))
        .unwrap();

    assert!(html.contains("href=\"javascript:toggleInfo('OBrien\\'21','bibtex')\""));
    assert!(html.contains("<tr id=\"bib_OBrien'21\" class=\"bibtex noshow\">"));
}

#[test]
fn test_annotation_style_can_be_left_to_the_page() {
    let options = HtmlTableOptions {
        annote_style: String::new(),
        ..Default::default()
    };
    let entry = paper().with_field("annote", "Invited Talk");
    let html = HtmlTableFormat::new(options)
        .serialize(&Bibliography::new(vec![entry]))
        .unwrap();

    assert!(html.contains(" <span class=\"annote\">Invited Talk</span></p>"));
}
