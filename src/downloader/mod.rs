//! Downloader module: the fetch logic, its builder, and its configuration.
//!
//! - `downloader` - Core [`Downloader`] with the skip / fetch / validate / write steps
//! - `builder` - [`DownloaderBuilder`] with the page-scrape and ID-enumeration presets
//! - `config` - [`DownloaderConfig`] defaults and the completion callback type
//!
//! # Examples
//!
//! ```rust
//! use docharvest::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("./PDFs"))
//!     .concurrent_downloads(8)
//!     .launch_delay(Duration::from_millis(500))
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! assert_eq!(downloader.concurrent_downloads(), 8);
//! ```

pub mod builder;
pub mod config;
pub mod downloader;

pub use builder::DownloaderBuilder;
pub use config::{DownloadCallback, DownloaderConfig};
pub use downloader::Downloader;
