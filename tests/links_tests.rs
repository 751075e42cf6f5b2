//! Tests for link discovery and filename sanitization.

use docharvest::links::{dedup, parse_base, resolve, LinkExtractor};
use docharvest::{sanitize_filename, FileKind};

mod common;
use common::helpers::*;

const PAGE: &str = r#"
<html>
  <body>
    <ul>
      <li><a href="/docs/sheet1.pdf">Sheet 1</a></li>
      <li><a href="/docs/sheet1.pdf">Sheet 1 (mirror)</a></li>
      <li><a href="https://other.com/x.pdf">Other</a></li>
      <li><a href="/docs/readme.txt">Readme</a></li>
      <li><a href="/files/pack.zip">Pack</a></li>
    </ul>
  </body>
</html>
"#;

#[test]
fn test_extract_dedup_resolve() {
    let base = parse_base(TEST_DOMAIN).unwrap();
    let candidates = dedup(LinkExtractor::new(FileKind::Pdf).extract(PAGE));
    assert_eq!(candidates, vec!["/docs/sheet1.pdf", "https://other.com/x.pdf"]);

    let urls: Vec<String> = candidates
        .iter()
        .map(|c| resolve(&base, c).unwrap().to_string())
        .collect();
    assert_eq!(
        urls,
        vec![
            "https://www.example.com/docs/sheet1.pdf",
            "https://other.com/x.pdf"
        ]
    );
}

#[test]
fn test_extract_by_kind() {
    assert_eq!(
        LinkExtractor::new(FileKind::Zip).extract(PAGE),
        vec!["/files/pack.zip"]
    );
}

#[test]
fn test_extract_from_joined_pages() {
    let pages = [r#"<a href="a.pdf">"#, r#"<a href="b.pdf">"#].join("\n");
    assert_eq!(
        LinkExtractor::new(FileKind::Pdf).extract(&pages),
        vec!["a.pdf", "b.pdf"]
    );
}

#[test]
fn test_dedup_is_subsequence() {
    let input = ["c", "a", "c", "b", "a", "d"];
    let output = dedup(input);
    assert_eq!(output, vec!["c", "a", "b", "d"]);

    let mut positions = output
        .iter()
        .map(|o| input.iter().position(|i| i == o).unwrap());
    let mut last = positions.next().unwrap();
    for p in positions {
        assert!(p > last);
        last = p;
    }
}

#[test]
fn test_sanitize_safe_basename_unchanged() {
    for name in ["sheet1.pdf", "abc123.pdf", "x.pdf"] {
        let url = format!("https://www.example.com/some/path/{}", name);
        assert_eq!(sanitize_filename(&url, FileKind::Pdf), name);
    }
}

#[test]
fn test_sanitize_never_doubles_separators() {
    for url in ["https://x.com/a!!b", "https://x.com/a!?-b", "https://x.com/a__b"] {
        let name = sanitize_filename(url, FileKind::Pdf);
        assert_eq!(name, "a_b.pdf");
        assert!(!name.contains("__"));
    }
}

#[test]
fn test_sanitize_never_leads_with_separator() {
    for url in ["https://x.com/!a.pdf", "https://x.com/(a).pdf", "https://x.com/ a.pdf"] {
        assert!(!sanitize_filename(url, FileKind::Pdf).starts_with('_'));
    }
}

#[test]
fn test_sanitize_is_deterministic() {
    let url = "https://www.example.com/Docs/SDS - Shock (2024).pdf";
    let first = sanitize_filename(url, FileKind::Pdf);
    assert_eq!(first, sanitize_filename(url, FileKind::Pdf));
    assert_eq!(first, "sds_shock_2024.pdf");
}
