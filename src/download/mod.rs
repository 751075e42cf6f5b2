//! Download module containing the units of work and their outcomes.
//!
//! - [`download`] - The [`Download`] struct: a validated URL and its sanitized file name
//! - [`kind`] - The [`FileKind`] of document being harvested
//! - [`summary`] - Per-download [`Summary`] and [`Status`]
//! - [`report`] - The [`Report`] aggregating a whole run
//!
//! # Examples
//!
//! ```rust
//! use docharvest::download::{Download, FileKind, Status, Summary};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let download = Download::parse("https://example.com/files/archive.zip", FileKind::Zip)?;
//! assert_eq!(download.filename, "archive.zip");
//!
//! let summary = Summary::new(download, None, 0).skip("File already exists");
//! assert!(matches!(summary.status(), Status::Skipped(_)));
//! # Ok(())
//! # }
//! ```

pub mod download;
pub mod kind;
pub mod report;
pub mod summary;

pub use download::Download;
pub use kind::FileKind;
pub use report::Report;
pub use summary::{Status, Summary};
