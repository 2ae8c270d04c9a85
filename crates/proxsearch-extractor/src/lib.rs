//! Proxsearch Extractor
//!
//! Finds candidate cause-effect observations in a corpus of documents.
//!
//! # Overview
//!
//! A sentence qualifies when it matches the causal vocabulary and the topic
//! vocabulary and matches neither exclusion vocabulary. Each qualifying
//! sentence is emitted with a context window of up to two sentences on
//! either side.
//!
//! # Architecture
//!
//! ```text
//! PDF → PdfExtractor → text → segment → Sentences → find_matches → build_window → Observations → sink
//! ```
//!
//! # Example Usage
//!
//! ```
//! use proxsearch_extractor::{
//!     CaseMode, DocumentSource, Engine, ExtractorConfig, MockExtractor, TermSet, TermSets,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let terms = TermSets::new(
//!     TermSet::from_patterns(["flood"], CaseMode::Sensitive)?,
//!     TermSet::from_patterns(["damage"], CaseMode::Sensitive)?,
//! );
//! let engine = Engine::new(terms, ExtractorConfig::default());
//!
//! let mut extractor = MockExtractor::new();
//! extractor.add_text("a.pdf", "The flood caused damage. Prices rose.");
//!
//! let source = DocumentSource::from_paths(["a.pdf"]);
//! let observations = engine.collect(source.documents(), &extractor)?;
//!
//! assert_eq!(observations.len(), 1);
//! assert_eq!(observations[0].core_sentence(), "The flood caused damage.");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod matcher;
mod mock;
mod pdf;
mod segmenter;
mod sink;
mod source;
mod terms;
mod window;


pub use config::{CaseMode, ExtractorConfig};
pub use engine::Engine;
pub use error::ExtractorError;
pub use matcher::{find_matches, is_match};
pub use mock::MockExtractor;
pub use pdf::{collapse_whitespace, PdfExtractor, PDF_MAX_BYTES, PDF_MAX_PAGES};
pub use segmenter::{rejoin, segment};
pub use sink::VecSink;
pub use source::{DocumentFile, DocumentSource};
pub use terms::{TermPaths, TermSet, TermSets};
pub use window::{build_window, window_bounds};
