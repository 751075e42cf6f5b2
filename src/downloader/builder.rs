//! Builder pattern implementation for creating Downloader instances.
//!
//! # Examples
//!
//! ## Presets
//!
//! ```rust
//! use docharvest::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//!
//! // One document at a time, short timeout.
//! let pages = DownloaderBuilder::page_scrape()
//!     .directory(PathBuf::from("PDFs"))
//!     .build();
//! assert_eq!(pages.concurrent_downloads(), 1);
//!
//! // Several in flight, one launch per second, long timeout.
//! let ids = DownloaderBuilder::id_enumeration()
//!     .directory(PathBuf::from("PDFs"))
//!     .build();
//! assert_eq!(ids.concurrent_downloads(), 16);
//! ```
//!
//! ## Callbacks
//!
//! ```rust
//! use docharvest::downloader::DownloaderBuilder;
//! use docharvest::download::Status;
//!
//! let downloader = DownloaderBuilder::hidden()
//!     .on_complete(|summary| {
//!         if let Status::Fail(failure) = summary.status() {
//!             eprintln!("{}: {}", summary.download().url, failure);
//!         }
//!     })
//!     .build();
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::download::Summary;
use crate::{ProgressBarOpts, StyleOptions};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::{path::PathBuf, sync::Arc, time::Duration};

/// A builder used to create a [`Downloader`].
///
/// ```rust
/// # fn main()  {
/// use docharvest::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().concurrent_downloads(4).directory("PDFs".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    ///
    /// The defaults match [`DownloaderBuilder::page_scrape`].
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Sequential downloads with the page-scrape timeout.
    pub fn page_scrape() -> Self {
        DownloaderBuilder::default()
            .concurrent_downloads(1)
            .launch_delay(Duration::ZERO)
            .timeout(DownloaderConfig::PAGE_SCRAPE_TIMEOUT)
    }

    /// Bounded concurrent downloads, spaced launches, long timeout.
    pub fn id_enumeration() -> Self {
        DownloaderBuilder::default()
            .concurrent_downloads(DownloaderConfig::ID_ENUMERATION_CONCURRENCY)
            .launch_delay(DownloaderConfig::ID_ENUMERATION_DELAY)
            .timeout(DownloaderConfig::ID_ENUMERATION_TIMEOUT)
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        DownloaderBuilder::default().style_options(StyleOptions::new(
            ProgressBarOpts::hidden(),
            ProgressBarOpts::hidden(),
        ))
    }

    /// Sets the directory where to store the downloads.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the number of concurrent downloads.
    ///
    /// Values below 1 are raised to 1.
    pub fn concurrent_downloads(mut self, concurrent_downloads: usize) -> Self {
        self.config.concurrent_downloads = concurrent_downloads.max(1);
        self
    }

    /// Set the fixed pause between two download launches.
    pub fn launch_delay(mut self, delay: Duration) -> Self {
        self.config.launch_delay = delay;
        self
    }

    /// Set the total time allowed per request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Route requests through a proxy.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set the downloader style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set callback for when each download completes.
    ///
    /// The callback runs once per document, whatever its outcome, as soon as
    /// that document is handled.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// Can be called multiple times, all maps are merged into one.
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue, HeaderMap};
    /// use docharvest::downloader::DownloaderBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    ///
    /// let downloader = DownloaderBuilder::new()
    ///     .headers(HeaderMap::from_iter([(header::USER_AGENT, ua)]))
    ///     .build();
    /// ```
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use docharvest::downloader::DownloaderBuilder;
    ///
    /// let ua = HeaderValue::from_static("docharvest/0.1");
    /// let downloader = DownloaderBuilder::new().header(header::USER_AGENT, ua).build();
    /// ```
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Downloader`] with the specified options.
    pub fn build(self) -> Downloader {
        Downloader::new(self.config)
    }
}
