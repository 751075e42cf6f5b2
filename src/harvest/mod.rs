//! Harvest runs: candidate discovery feeding the downloader.
//!
//! - `source` - The two ways of producing candidates: scraping seed pages, or
//!   enumerating numeric IDs
//! - `harvester` - [`Harvester`], which plans a run and aggregates its [`Report`]
//!
//! [`Report`]: crate::download::Report
//!
//! # Examples
//!
//! ```rust,no_run
//! use docharvest::downloader::DownloaderBuilder;
//! use docharvest::harvest::{Harvester, Source};
//! use docharvest::FileKind;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), docharvest::Error> {
//! let downloader = DownloaderBuilder::page_scrape()
//!     .directory(PathBuf::from("PDFs"))
//!     .build();
//! let source = Source::pages(
//!     ["https://www.example.com/safety-data-sheets/"],
//!     "https://www.example.com",
//! )?;
//!
//! let report = Harvester::new(downloader, FileKind::Pdf).run(&source).await?;
//! println!("{} new documents", report.succeeded());
//! # Ok(())
//! # }
//! ```

pub mod harvester;
pub mod source;

pub use harvester::{scrape, Harvester, Plan};
pub use source::{format_id_url, Source, ID_PLACEHOLDER};
