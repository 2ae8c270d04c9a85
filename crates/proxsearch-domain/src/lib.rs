//! Proxsearch Domain
//!
//! Core types for causal-observation extraction.
//!
//! This crate contains no I/O: it defines the values that flow through the
//! extraction pipeline and the traits at the boundaries to infrastructure.
//!
//! - [`Sentence`]: one piece of a segmented document
//! - [`Observation`]: a core sentence plus its surrounding context window
//! - [`ScanReport`]: counters collected over a batch run
//! - [`traits`]: text extraction, observation output and progress reporting

#![warn(missing_docs)]

pub mod observation;
pub mod report;
pub mod sentence;
pub mod traits;

pub use observation::Observation;
pub use report::{ScanReport, SkippedDocument};
pub use sentence::{Sentence, SENTENCE_DELIMITER};
pub use traits::{DocumentOutcome, NoopObserver, ObservationSink, ProgressObserver, TextExtractor};
