//! Counters collected over a batch extraction run

/// A document the engine skipped, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    /// File name of the skipped document
    pub filename: String,

    /// Human-readable reason (the extraction error)
    pub reason: String,
}

/// Summary of a batch run
///
/// Tracks documents processed and skipped, and observations emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Documents whose text was extracted and scanned
    pub documents_processed: usize,

    /// Documents skipped after an extraction failure
    pub skipped: Vec<SkippedDocument>,

    /// Observations written to the sink
    pub observations: usize,
}

impl ScanReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scanned document and the observations it produced
    pub fn record_processed(&mut self, observations: usize) {
        self.documents_processed += 1;
        self.observations += observations;
    }

    /// Record a skipped document
    pub fn record_skipped(&mut self, filename: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedDocument {
            filename: filename.into(),
            reason: reason.into(),
        });
    }

    /// Number of documents skipped
    pub fn documents_skipped(&self) -> usize {
        self.skipped.len()
    }

    /// Documents seen, processed or skipped
    pub fn documents_seen(&self) -> usize {
        self.documents_processed + self.skipped.len()
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} documents seen, {} processed, {} skipped, {} observations",
            self.documents_seen(),
            self.documents_processed,
            self.documents_skipped(),
            self.observations
        )
    }
}
