//! Trait definitions for external interactions
//!
//! These traits define the boundaries between extraction logic and
//! infrastructure. Implementations live in other crates.

use crate::{Observation, ScanReport};
use std::path::Path;

/// Trait for turning a document file into raw text
///
/// Implemented by the infrastructure layer (proxsearch-extractor's PDF backend)
pub trait TextExtractor {
    /// Error type for extraction failures
    type Error;

    /// Extract the full text of the document at `path`
    ///
    /// The text may contain artifacts of the source format. A failure here
    /// only affects this one document.
    fn extract_text(&self, path: &Path) -> Result<String, Self::Error>;
}

/// Trait for receiving observations as they are produced
pub trait ObservationSink {
    /// Error type for write failures
    type Error;

    /// Write one observation
    fn write(&mut self, observation: &Observation) -> Result<(), Self::Error>;

    /// Flush buffered observations; called after each document
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// What happened to a single document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// Text was extracted and scanned
    Processed {
        /// Observations emitted for the document
        observations: usize,
    },
    /// Extraction failed and the document was skipped
    Skipped,
}

/// Observer notified as a batch run progresses
///
/// All methods default to doing nothing.
pub trait ProgressObserver {
    /// Called once before the first document
    fn on_start(&mut self, _total: usize) {}

    /// Called after each document, processed or skipped
    fn on_document(&mut self, _filename: &str, _outcome: DocumentOutcome) {}

    /// Called once after the last document
    fn on_finish(&mut self, _report: &ScanReport) {}
}

/// Progress observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}
