//! Downloads every PDF linked from the seed pages into `PDFs/`.

use color_eyre::Result;
use console::style;
use docharvest::utils::ensure_directory;
use docharvest::{DownloaderBuilder, FileKind, Harvester, Source};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const SEED_PAGES: &[&str] = &["https://www.poolseason.com/safety-data-sheets/"];
const BASE_DOMAIN: &str = "https://www.poolseason.com";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    for kind in FileKind::ALL {
        ensure_directory(Path::new(kind.directory_name())).await?;
    }

    let source = Source::pages(SEED_PAGES.iter().copied(), BASE_DOMAIN)?;
    let downloader = DownloaderBuilder::page_scrape()
        .directory(FileKind::Pdf.directory_name().into())
        .build();
    let report = Harvester::new(downloader, FileKind::Pdf).run(&source).await?;

    println!("{} {}", style("docharvest").bold(), style(BASE_DOMAIN).dim());
    println!("{}", report.table());
    Ok(())
}
