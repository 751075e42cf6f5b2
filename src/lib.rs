//! docharvest scrapes web pages (or enumerates numeric document IDs) for
//! downloadable documents and fetches each one to local storage, skipping
//! files already present and checking the content type before saving.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use docharvest::{DownloaderBuilder, Error, FileKind, Harvester, Source};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let source = Source::pages(
//!     ["https://www.example.com/safety-data-sheets/"],
//!     "https://www.example.com",
//! )?;
//! let downloader = DownloaderBuilder::page_scrape()
//!     .directory(PathBuf::from("PDFs"))
//!     .build();
//! let report = Harvester::new(downloader, FileKind::Pdf).run(&source).await?;
//! println!("{} downloaded, {} skipped, {} failed",
//!     report.succeeded(), report.skipped(), report.failed());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`links`] - Link extraction, deduplication and resolution
//! - [`utils`] - Filename sanitization and directory preparation
//! - [`download`] - The `Download` unit of work and its `Summary` / `Report`
//! - [`downloader`] - The `Downloader` and its builder
//! - [`harvest`] - Page-scrape and ID-enumeration runs
//! - [`error`] - Setup errors and per-document failures
//! - [`http`] - HTTP client construction
//! - [`progress`] - Progress bar styling and display

pub mod download;
pub mod downloader;
pub mod error;
pub mod harvest;
pub mod http;
pub mod links;
pub mod progress;
pub mod utils;

pub use download::{Download, FileKind, Report, Status, Summary};
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{Error, Failure, Result};
pub use harvest::{Harvester, Source};
pub use http::{create_http_client, HttpClientConfig};
pub use links::{dedup, LinkExtractor};
pub use progress::{ProgressBarOpts, StyleOptions};
pub use utils::sanitize_filename;
