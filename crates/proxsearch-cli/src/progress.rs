//! Progress bar display for batch scans.

use indicatif::{ProgressBar, ProgressStyle};
use proxsearch_domain::{DocumentOutcome, ProgressObserver, ScanReport};

const BAR_TEMPLATE: &str = "{spinner:.green} Processing [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {wide_msg}";

/// Progress observer that drives an indicatif progress bar.
///
/// The bar draws to stderr and stays invisible when stderr is not a terminal.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a visible progress reporter.
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::new(0),
        }
    }

    /// Create a reporter that never draws.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Current position (documents finished).
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of documents.
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ProgressReporter {
    fn on_start(&mut self, total: usize) {
        self.bar.set_length(total as u64);
        if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
            self.bar.set_style(style.progress_chars("=> "));
        }
    }

    fn on_document(&mut self, filename: &str, outcome: DocumentOutcome) {
        match outcome {
            DocumentOutcome::Processed { observations } => {
                self.bar
                    .set_message(format!("{} ({} observations)", filename, observations));
            }
            DocumentOutcome::Skipped => {
                self.bar.set_message(format!("{} (skipped)", filename));
            }
        }
        self.bar.inc(1);
    }

    fn on_finish(&mut self, _report: &ScanReport) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_reporter_counts_documents() {
        let mut reporter = ProgressReporter::hidden();
        reporter.on_start(3);
        reporter.on_document("a.pdf", DocumentOutcome::Processed { observations: 2 });
        reporter.on_document("b.pdf", DocumentOutcome::Skipped);

        assert_eq!(reporter.length(), Some(3));
        assert_eq!(reporter.position(), 2);

        reporter.on_finish(&ScanReport::new());
    }
}
