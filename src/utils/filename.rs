//! Deterministic URL to filename conversion.

use crate::download::FileKind;

const SEPARATOR: char = '_';

/// Converts a URL into a safe local filename for `kind`.
///
/// The URL is lowercased and reduced to its final path segment; every run
/// of characters outside `[a-z0-9]` becomes a single `_`, a leading `_` is
/// dropped, the leftovers of known extensions (`_pdf`, `_zip`) are removed
/// and the canonical extension of `kind` is appended when missing.
///
/// Query strings and fragments are not stripped, they are part of the last
/// segment and get sanitized with it. There is no error path: degenerate
/// input yields a degenerate name such as `".pdf"`.
///
/// ```rust
/// use docharvest::{sanitize_filename, FileKind};
///
/// let name = sanitize_filename("https://example.com/docs/Sheet 1.PDF", FileKind::Pdf);
/// assert_eq!(name, "sheet_1.pdf");
/// ```
pub fn sanitize_filename(url: &str, kind: FileKind) -> String {
    let lowercase = url.to_lowercase();
    let base = basename(&lowercase);

    let mut safe = String::with_capacity(base.len() + kind.extension().len());
    for c in base.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            safe.push(c);
        } else if !safe.ends_with(SEPARATOR) {
            safe.push(SEPARATOR);
        }
    }

    // Only the first character can still be a separator here.
    if let Some(trimmed) = safe.strip_prefix(SEPARATOR) {
        safe = trimmed.to_string();
    }

    for known in FileKind::ALL {
        safe = safe.replace(known.redundant_literal(), "");
    }

    if !safe.ends_with(kind.extension()) {
        safe.push_str(kind.extension());
    }

    safe
}

/// Last slash-separated element of `path`, ignoring trailing slashes.
fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}
