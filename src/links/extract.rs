//! Text-pattern link extraction.
//!
//! Links are found by matching `href="...<ext>"` substrings in the raw page
//! text, not by parsing HTML. Single-quoted and unquoted attributes, and
//! links built by scripts, are missed. Matches inside comments or on tags
//! other than `<a>` are kept. The extension match is case-sensitive.

use crate::download::FileKind;
use regex::Regex;

/// Finds `href` values ending in the extension of a [`FileKind`].
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    kind: FileKind,
    pattern: Regex,
}

impl LinkExtractor {
    /// Creates an extractor for `kind`.
    pub fn new(kind: FileKind) -> Self {
        let pattern = format!(r#"href="([^"]+{})""#, regex::escape(kind.extension()));
        Self {
            kind,
            pattern: Regex::new(&pattern).expect("link pattern is a valid regex"),
        }
    }

    /// Kind of document this extractor looks for.
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Returns the raw `href` values found in `text`, in document order.
    ///
    /// Values are returned as written: relative links stay relative and
    /// duplicates are kept.
    ///
    /// ```rust
    /// use docharvest::{FileKind, LinkExtractor};
    ///
    /// let page = r#"<a href="x.pdf">x</a> <a href="y.txt">y</a>"#;
    /// let links = LinkExtractor::new(FileKind::Pdf).extract(page);
    /// assert_eq!(links, vec!["x.pdf"]);
    /// ```
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.pattern
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
