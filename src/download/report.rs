//! Aggregated outcome of a harvest run.

use super::summary::{Status, Summary};
use crate::error::Failure;

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};

/// Outcome of a whole run: one [`Summary`] per attempted download, plus the
/// candidates that never became a download because they could not be
/// resolved to a valid URL.
#[derive(Debug, Clone, Default)]
pub struct Report {
    summaries: Vec<Summary>,
    rejected: Vec<(String, Failure)>,
}

impl Report {
    /// Create a new [`Report`].
    pub fn new(summaries: Vec<Summary>, rejected: Vec<(String, Failure)>) -> Self {
        Self {
            summaries,
            rejected,
        }
    }

    /// Per-download summaries, in completion order.
    pub fn summaries(&self) -> &[Summary] {
        &self.summaries
    }

    /// Candidates dropped before download, with the reason.
    pub fn rejected(&self) -> &[(String, Failure)] {
        &self.rejected
    }

    /// Number of documents written to disk.
    pub fn succeeded(&self) -> usize {
        self.count(|s| matches!(s, Status::Success))
    }

    /// Number of documents skipped because they were already on disk.
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, Status::Skipped(_)))
    }

    /// Number of failed downloads plus rejected candidates.
    pub fn failed(&self) -> usize {
        self.count(Status::is_fail) + self.rejected.len()
    }

    /// Total bytes written by successful downloads.
    pub fn bytes(&self) -> u64 {
        self.summaries
            .iter()
            .filter(|s| matches!(s.status(), Status::Success))
            .map(Summary::size)
            .sum()
    }

    /// Renders one row per item that was not downloaded, followed by totals.
    ///
    /// Successful downloads are only counted.
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Outcome", "Item", "Detail"]);

        for summary in &self.summaries {
            let (outcome, detail) = match summary.status() {
                Status::Skipped(reason) => (Cell::new("skipped").fg(Color::Yellow), reason.clone()),
                Status::Fail(failure) => (Cell::new("failed").fg(Color::Red), failure.to_string()),
                Status::Success | Status::NotStarted => continue,
            };
            table.add_row(vec![
                outcome,
                Cell::new(summary.download().url.as_str()),
                Cell::new(detail),
            ]);
        }
        for (candidate, failure) in &self.rejected {
            table.add_row(vec![
                Cell::new("rejected").fg(Color::Red),
                Cell::new(candidate),
                Cell::new(failure),
            ]);
        }

        table.add_row(vec![
            Cell::new("total").add_attribute(Attribute::Bold),
            Cell::new(format!(
                "{} downloaded, {} skipped, {} failed",
                self.succeeded(),
                self.skipped(),
                self.failed()
            )),
            Cell::new(format!("{} bytes written", self.bytes())),
        ]);
        table
    }

    fn count(&self, f: impl Fn(&Status) -> bool) -> usize {
        self.summaries.iter().filter(|s| f(s.status())).count()
    }
}
