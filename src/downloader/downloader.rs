//! Core downloader implementation with fetch logic.
//!
//! Each document goes through the same steps:
//!
//! 1. If a regular file already sits at the target path, the document is
//!    skipped and no request is made.
//! 2. The document is requested. Anything but `200 OK`, or a `Content-Type`
//!    not containing the expected MIME type, fails the document.
//! 3. The body is buffered in memory. An empty body fails the document.
//! 4. The buffer is written to a newly created file. A file that appeared in
//!    the meantime is left alone and the document is skipped. Any other entry
//!    in the way, such as a directory, fails the document.
//!
//! Nothing touches the disk before step 4, so a failed document never
//! leaves a partial file behind.
//!
//! # Examples
//!
//! ```rust,no_run
//! use docharvest::downloader::DownloaderBuilder;
//! use docharvest::download::{Download, FileKind};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::page_scrape()
//!     .directory(PathBuf::from("PDFs"))
//!     .build();
//! let downloads = vec![
//!     Download::parse("https://example.com/docs/sheet1.pdf", FileKind::Pdf)?,
//!     Download::parse("https://example.com/docs/sheet2.pdf", FileKind::Pdf)?,
//! ];
//!
//! for summary in downloader.download(&downloads).await? {
//!     println!("{} - {:?}", summary.download().filename, summary.status());
//! }
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use crate::download::{Download, Status, Summary};
use crate::error::{Failure, Result};
use crate::http::{create_http_client, HttpClientConfig};
use crate::progress::ProgressDisplay;

use futures::stream::{self, StreamExt};
use reqwest::{
    header::{HeaderMap, CONTENT_TYPE},
    Response, StatusCode,
};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::{debug, info, warn};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use docharvest::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl fmt::Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where files will be downloaded.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the number of concurrent downloads.
    pub fn concurrent_downloads(&self) -> usize {
        self.config.concurrent_downloads
    }

    /// Gets the pause between two launches.
    pub fn launch_delay(&self) -> Duration {
        self.config.launch_delay
    }

    /// Gets the per-request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.config.timeout
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Builds an HTTP client from this downloader's settings.
    pub fn http_client(&self) -> Result<ClientWithMiddleware> {
        let config = HttpClientConfig {
            timeout: self.config.timeout,
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
        };
        Ok(create_http_client(config)?)
    }

    /// Starts the downloads.
    ///
    /// Only the construction of the HTTP client can fail; per-document
    /// problems are reported in the returned summaries.
    pub async fn download(&self, downloads: &[Download]) -> Result<Vec<Summary>> {
        let client = self.http_client()?;
        Ok(self.download_with_client(&client, downloads).await)
    }

    /// Starts the downloads with an existing client.
    ///
    /// At most `concurrent_downloads` documents are in flight, and two
    /// launches are at least `launch_delay` apart. Summaries come back in
    /// completion order.
    pub async fn download_with_client(
        &self,
        client: &ClientWithMiddleware,
        downloads: &[Download],
    ) -> Vec<Summary> {
        let progress_display =
            ProgressDisplay::new(self.config.style_options.clone(), downloads.len());
        let delay = self.config.launch_delay;

        let summaries = stream::iter(downloads.iter().enumerate())
            .then(|(i, d)| async move {
                if i > 0 && !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                d
            })
            .map(|d| self.fetch(client, d, &progress_display))
            .buffer_unordered(self.config.concurrent_downloads)
            .collect::<Vec<_>>()
            .await;

        progress_display.finish();

        summaries
    }

    /// Fetches one document, then logs and reports the outcome.
    async fn fetch(
        &self,
        client: &ClientWithMiddleware,
        download: &Download,
        progress_display: &ProgressDisplay,
    ) -> Summary {
        let summary = self.try_fetch(client, download, progress_display).await;

        match summary.status() {
            Status::Success => info!(
                "Successfully downloaded {} bytes: {} -> {}",
                summary.size(),
                download.url,
                download.target(&self.config.directory).display()
            ),
            Status::Skipped(reason) => info!("Skipping {}: {}", download.url, reason),
            Status::Fail(failure) => warn!("Failed to download {}: {}", download.url, failure),
            Status::NotStarted => (),
        }

        progress_display.increment_main();

        if let Some(ref callback) = self.config.on_complete {
            callback(&summary);
        }

        summary
    }

    async fn try_fetch(
        &self,
        client: &ClientWithMiddleware,
        download: &Download,
        progress_display: &ProgressDisplay,
    ) -> Summary {
        let output = download.target(&self.config.directory);

        if is_file(&output).await {
            return Summary::new(download.clone(), None, 0)
                .skip(format!("file already exists: {}", output.display()));
        }

        debug!("Fetching {}", &download.url);
        let res = match client.get(download.url.as_str()).send().await {
            Ok(res) => res,
            Err(e) => return Summary::new(download.clone(), None, 0).fail(e),
        };

        let status = res.status();
        let summary = Summary::new(download.clone(), Some(status), 0);
        if status != StatusCode::OK {
            return summary.fail(Failure::HttpStatus(status));
        }

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.contains(download.kind.mime()) {
            return summary.fail(Failure::ContentType {
                expected: download.kind.mime(),
                found: content_type,
            });
        }

        let body = match buffer_body(res, &download.filename, progress_display).await {
            Ok(body) => body,
            Err(failure) => return summary.fail(failure),
        };
        if body.is_empty() {
            return summary.fail(Failure::EmptyBody);
        }

        match write_new(&output, &body).await {
            Ok(()) => Summary::new(download.clone(), Some(status), body.len() as u64)
                .with_status(Status::Success),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                if is_file(&output).await {
                    summary.skip(format!("file appeared while downloading: {}", output.display()))
                } else {
                    summary.fail(e)
                }
            }
            Err(e) => summary.fail(e),
        }
    }
}

/// Whether a non-directory entry exists at `path`.
async fn is_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|m| !m.is_dir())
        .unwrap_or(false)
}

/// Reads the whole body into memory, advancing a child progress bar.
async fn buffer_body(
    res: Response,
    filename: &str,
    progress_display: &ProgressDisplay,
) -> std::result::Result<Vec<u8>, Failure> {
    let pb = progress_display.create_child_progress(res.content_length().unwrap_or(0), filename);

    let mut body = Vec::new();
    let mut stream = res.bytes_stream();
    while let Some(item) = stream.next().await {
        let chunk = match item {
            Ok(chunk) => chunk,
            Err(e) => {
                progress_display.finish_child(pb);
                return Err(e.into());
            }
        };
        pb.inc(chunk.len() as u64);
        body.extend_from_slice(&chunk);
    }

    progress_display.finish_child(pb);
    Ok(body)
}

/// Writes `body` to a file that must not exist yet.
///
/// A file left half-written by a failed write is removed.
async fn write_new(path: &Path, body: &[u8]) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        debug!("Creating destination directory {:?}", dir);
        fs::create_dir_all(dir).await?;
    }

    debug!("Creating destination file {:?}", path);
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;

    let written = match file.write_all(body).await {
        Ok(()) => file.flush().await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        drop(file);
        if let Err(rm) = fs::remove_file(path).await {
            warn!("Could not remove partial file {:?}: {}", path, rm);
        }
        return Err(e);
    }

    Ok(())
}
