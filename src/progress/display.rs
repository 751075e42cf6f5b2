//! Progress bar display management.

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

/// Coordinates the main bar of a run and the child bar of each document.
pub struct ProgressDisplay {
    multi: MultiProgress,
    main: ProgressBar,
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a display for a run of `total` documents.
    pub fn new(style_options: StyleOptions, total: usize) -> Self {
        let multi = match style_options.is_enabled() {
            true => MultiProgress::new(),
            false => MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        };

        let main = multi.add(style_options.main().clone().to_progress_bar(total as u64));
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Create a child bar for one document of `size` bytes (0 when unknown).
    pub fn create_child_progress(&self, size: u64, filename: &str) -> ProgressBar {
        let pb = self
            .multi
            .add(self.style_options.child().clone().to_progress_bar(size));
        pb.set_message(filename.to_string());
        pb
    }

    /// Record one more document as handled.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Finish a child progress bar based on configuration.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }

    /// Finish the progress display, clearing or keeping the main bar.
    pub fn finish(self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }
}
