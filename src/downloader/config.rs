//! Configuration structures and defaults for the downloader.

use crate::download::Summary;
use crate::StyleOptions;

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Callback type for download completion events
pub type DownloadCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory where to store the downloaded files.
    pub directory: PathBuf,
    /// Number of maximum concurrent downloads.
    pub concurrent_downloads: usize,
    /// Fixed pause between two download launches.
    pub launch_delay: Duration,
    /// Total time allowed per request.
    pub timeout: Option<Duration>,
    /// Optional proxy.
    pub proxy: Option<reqwest::Proxy>,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Downloader style options.
    pub style_options: StyleOptions,
    /// Callback for when each download completes.
    pub on_complete: Option<Arc<DownloadCallback>>,
}

impl DownloaderConfig {
    /// Timeout used when downloading documents found by scraping pages.
    pub const PAGE_SCRAPE_TIMEOUT: Duration = Duration::from_secs(3 * 60);
    /// Timeout used when enumerating document IDs.
    pub const ID_ENUMERATION_TIMEOUT: Duration = Duration::from_secs(10 * 60);
    /// Downloads in flight when enumerating document IDs.
    pub const ID_ENUMERATION_CONCURRENCY: usize = 16;
    /// Pause between launches when enumerating document IDs.
    pub const ID_ENUMERATION_DELAY: Duration = Duration::from_secs(1);
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("concurrent_downloads", &self.concurrent_downloads)
            .field("launch_delay", &self.launch_delay)
            .field("timeout", &self.timeout)
            .field("proxy", &self.proxy)
            .field("headers", &self.headers)
            .field("style_options", &self.style_options)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            concurrent_downloads: 1,
            launch_delay: Duration::ZERO,
            timeout: Some(Self::PAGE_SCRAPE_TIMEOUT),
            proxy: None,
            headers: None,
            style_options: StyleOptions::default(),
            on_complete: None,
        }
    }
}
