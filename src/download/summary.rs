//! Per-download outcome.
//!
//! Every download attempt ends in a [`Summary`]. Its [`Status`] says whether
//! the document was written, skipped because it was already on disk, or
//! abandoned with a typed [`Failure`].
//!
//! # Examples
//!
//! ```rust
//! use docharvest::download::{Download, Status, Summary};
//! use docharvest::Failure;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let download = Download::try_from("https://example.com/file.pdf")?;
//! let summary = Summary::new(download, None, 0).fail(Failure::EmptyBody);
//!
//! match summary.status() {
//!     Status::Success => println!("Downloaded {} bytes", summary.size()),
//!     Status::Skipped(reason) => println!("Skipped: {}", reason),
//!     Status::Fail(failure) => println!("Failed: {}", failure),
//!     Status::NotStarted => {}
//! }
//! # Ok(())
//! # }
//! ```

use super::download::Download;
use crate::error::Failure;
use reqwest::StatusCode;

/// Download status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Download failed
    Fail(Failure),
    /// Download not yet started
    NotStarted,
    /// Download was skipped with reason
    Skipped(String),
    /// Download completed successfully
    Success,
}

impl Status {
    /// Whether the download failed.
    pub fn is_fail(&self) -> bool {
        matches!(self, Status::Fail(_))
    }
}

/// Represents a [`Download`] summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Downloaded item.
    download: Download,
    /// HTTP status code, absent when no request was made.
    statuscode: Option<StatusCode>,
    /// Bytes written to disk.
    size: u64,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`Download`] [`Summary`].
    pub fn new(download: Download, statuscode: Option<StatusCode>, size: u64) -> Self {
        Self {
            download,
            statuscode,
            size,
            status: Status::NotStarted,
        }
    }

    /// Attach a status to a [`Download`] [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Get the summary's HTTP status code.
    pub fn statuscode(&self) -> Option<StatusCode> {
        self.statuscode
    }

    /// Get the summary's size.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get a reference to the summary's download.
    pub fn download(&self) -> &Download {
        &self.download
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Mark the summary as failed.
    pub fn fail(self, failure: impl Into<Failure>) -> Self {
        Self {
            status: Status::Fail(failure.into()),
            ..self
        }
    }

    /// Mark the summary as skipped with a message.
    pub fn skip(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Skipped(format!("{}", msg)),
            ..self
        }
    }
}
