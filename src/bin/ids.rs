//! Enumerates document IDs and downloads every PDF found into `PDFs/`.
//!
//! Launches are one second apart with at most 16 downloads in flight.

use color_eyre::Result;
use console::style;
use docharvest::utils::ensure_directory;
use docharvest::{DownloaderBuilder, FileKind, Harvester, Source};
use std::ops::RangeInclusive;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const ID_TEMPLATE: &str = "https://www.poolseason.com/wp-content/uploads/sds/{id}.pdf";
const IDS: RangeInclusive<u64> = 1..=10_000;

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

    let source = Source::ids(ID_TEMPLATE, IDS);
    let downloader = DownloaderBuilder::id_enumeration()
        .directory(FileKind::Pdf.directory_name().into())
        .build();
    let report = Harvester::new(downloader, FileKind::Pdf).run(&source).await?;

    println!("{} {}", style("docharvest-ids").bold(), style(ID_TEMPLATE).dim());
    println!("{}", report.table());
    Ok(())
}
