//! Represents a document to be downloaded.
//!
//! # Examples
//!
//! ```rust
//! use docharvest::download::{Download, FileKind};
//!
//! let download = Download::parse("https://example.com/docs/Sheet-1.pdf", FileKind::Pdf)?;
//! assert_eq!(download.filename, "sheet_1.pdf");
//! # Ok::<(), docharvest::Error>(())
//! ```

use super::kind::FileKind;
use crate::error::Result;
use crate::links::validate;
use crate::utils::sanitize_filename;

use std::path::{Path, PathBuf};
use url::Url;

/// Represents a document to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Absolute URL of the document.
    pub url: Url,
    /// Sanitized file name used to save the document on disk.
    pub filename: String,
    /// Kind of document, which decides the expected MIME type.
    pub kind: FileKind,
}

impl Download {
    /// Creates a new [`Download`], deriving the file name from the serialized URL.
    ///
    /// The serialized form is percent-encoded. When the link text is at hand,
    /// use [`Download::from_link`] so the name is derived from what was written.
    pub fn new(url: Url, kind: FileKind) -> Self {
        let filename = sanitize_filename(url.as_str(), kind);
        Self {
            url,
            filename,
            kind,
        }
    }

    /// Creates a new [`Download`] for `url`, deriving the file name from `link`,
    /// the text `url` was resolved from.
    ///
    /// ```rust
    /// use docharvest::download::{Download, FileKind};
    /// use url::Url;
    ///
    /// let link = "/docs/Safety Data Sheet.pdf";
    /// let url = Url::parse("https://example.com")?.join(link)?;
    /// let download = Download::from_link(url, link, FileKind::Pdf);
    /// assert_eq!(download.filename, "safety_data_sheet.pdf");
    /// # Ok::<(), url::ParseError>(())
    /// ```
    pub fn from_link(url: Url, link: &str, kind: FileKind) -> Self {
        Self {
            url,
            filename: sanitize_filename(link, kind),
            kind,
        }
    }

    /// Parses and validates an absolute http(s) URL, then creates the [`Download`].
    ///
    /// The file name is derived from `url` as given, not from its encoded form.
    pub fn parse(url: &str, kind: FileKind) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| {
            crate::Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e))
        })?;
        Ok(Self::from_link(validate(parsed)?, url, kind))
    }

    /// Path the document is written to inside `directory`.
    pub fn target(&self, directory: &Path) -> PathBuf {
        directory.join(&self.filename)
    }
}

impl TryFrom<&str> for Download {
    type Error = crate::error::Error;

    /// Parses a PDF download.
    fn try_from(value: &str) -> Result<Self> {
        Download::parse(value, FileKind::Pdf)
    }
}

impl TryFrom<&Url> for Download {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self> {
        Ok(Download::new(validate(value.clone())?, FileKind::Pdf))
    }
}
