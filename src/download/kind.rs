//! Kinds of documents a harvest can target.

use std::fmt;

/// The kind of document being harvested.
///
/// A kind ties together the extension links must end with, the MIME type
/// the server must announce, and the literal the filename sanitizer strips
/// when the extension ended up inside the basename as a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileKind {
    /// Portable Document Format.
    #[default]
    Pdf,
    /// ZIP archive.
    Zip,
}

impl FileKind {
    /// Every known kind.
    pub const ALL: [FileKind; 2] = [FileKind::Pdf, FileKind::Zip];

    /// Canonical extension, including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Pdf => ".pdf",
            FileKind::Zip => ".zip",
        }
    }

    /// Substring the `Content-Type` header must contain.
    pub fn mime(self) -> &'static str {
        match self {
            FileKind::Pdf => "application/pdf",
            FileKind::Zip => "application/zip",
        }
    }

    /// Leftover of the extension once the dot has been sanitized away.
    pub fn redundant_literal(self) -> &'static str {
        match self {
            FileKind::Pdf => "_pdf",
            FileKind::Zip => "_zip",
        }
    }

    /// Conventional output directory name.
    pub fn directory_name(self) -> &'static str {
        match self {
            FileKind::Pdf => "PDFs",
            FileKind::Zip => "ZIPs",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Pdf => f.write_str("pdf"),
            FileKind::Zip => f.write_str("zip"),
        }
    }
}
