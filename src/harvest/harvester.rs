//! Drives a harvest run from a [`Source`] to a [`Report`].

use super::source::{format_id_url, Source};
use crate::download::{Download, FileKind, Report};
use crate::downloader::Downloader;
use crate::error::{Error, Failure, Result};
use crate::links::{dedup, resolve, LinkExtractor};
use crate::utils::ensure_directory;

use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, info, warn};
use url::Url;

/// Documents planned for a run, and the candidates that were dropped.
#[derive(Debug, Default)]
pub struct Plan {
    /// Valid downloads, in discovery order.
    pub downloads: Vec<Download>,
    /// Candidates that could not be turned into a download.
    pub rejected: Vec<(String, Failure)>,
}

/// Runs a [`Source`] through discovery and the [`Downloader`].
#[derive(Debug, Clone)]
pub struct Harvester {
    downloader: Downloader,
    kind: FileKind,
}

impl Harvester {
    /// Creates a harvester for documents of `kind`.
    pub fn new(downloader: Downloader, kind: FileKind) -> Self {
        Self { downloader, kind }
    }

    /// Gets the downloader.
    pub fn downloader(&self) -> &Downloader {
        &self.downloader
    }

    /// Gets the kind of document harvested.
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Discovers the candidates of `source` and downloads them.
    ///
    /// Fails only when the output directory or the HTTP client cannot be
    /// set up. Every per-document problem ends up in the report.
    pub async fn run(&self, source: &Source) -> Result<Report> {
        ensure_directory(self.downloader.directory()).await?;
        let client = self.downloader.http_client()?;

        let plan = self.plan(&client, source).await;
        info!(
            "Planned {} {} downloads ({} candidates rejected)",
            plan.downloads.len(),
            self.kind,
            plan.rejected.len()
        );

        let summaries = self
            .downloader
            .download_with_client(&client, &plan.downloads)
            .await;
        let report = Report::new(summaries, plan.rejected);

        info!(
            "Done: {} downloaded ({} bytes), {} skipped, {} failed",
            report.succeeded(),
            report.bytes(),
            report.skipped(),
            report.failed()
        );
        Ok(report)
    }

    /// Turns `source` into downloads without fetching any document.
    ///
    /// For [`Source::Pages`] the seed pages are fetched.
    pub async fn plan(&self, client: &ClientWithMiddleware, source: &Source) -> Plan {
        match source {
            Source::Pages { seeds, base } => {
                let text = scrape(client, seeds).await;
                let candidates = dedup(LinkExtractor::new(self.kind).extract(&text));
                debug!("Found {} unique candidate links", candidates.len());
                self.collect(candidates, |c| resolve(base, c))
            }
            Source::Ids { template, ids } => {
                let candidates = ids.clone().map(|id| format_id_url(template, id));
                self.collect(candidates, |c| {
                    Url::parse(c)
                        .map_err(|e| {
                            Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", c, e))
                        })
                        .and_then(crate::links::validate)
                })
            }
        }
    }

    fn collect<I, F>(&self, candidates: I, to_url: F) -> Plan
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Result<Url>,
    {
        let mut plan = Plan::default();
        for candidate in candidates {
            match to_url(&candidate) {
                Ok(url) => plan
                    .downloads
                    .push(Download::from_link(url, &candidate, self.kind)),
                Err(e) => {
                    warn!("Dropping candidate {:?}: {}", candidate, e);
                    plan.rejected.push((candidate, rejection(e)));
                }
            }
        }
        plan
    }
}

/// Fetches the seed pages in order and joins their bodies with newlines.
///
/// A page that cannot be fetched contributes an empty body.
pub async fn scrape(client: &ClientWithMiddleware, seeds: &[String]) -> String {
    let mut bodies = Vec::with_capacity(seeds.len());
    for seed in seeds {
        info!("Scraping {}", seed);
        bodies.push(fetch_page(client, seed).await.unwrap_or_default());
    }
    bodies.join("\n")
}

async fn fetch_page(client: &ClientWithMiddleware, url: &str) -> Option<String> {
    let res = match client.get(url).send().await {
        Ok(res) => res,
        Err(e) => {
            warn!("Failed to fetch page {}: {}", url, e);
            return None;
        }
    };
    if !res.status().is_success() {
        warn!("Page {} answered {}", url, res.status());
    }
    match res.text().await {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Failed to read page {}: {}", url, e);
            None
        }
    }
}

fn rejection(e: Error) -> Failure {
    match e {
        Error::InvalidUrl(msg) => Failure::InvalidUrl(msg),
        other => Failure::InvalidUrl(other.to_string()),
    }
}
