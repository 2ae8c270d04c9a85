//! Core Engine implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::matcher::find_matches;
use crate::segmenter::segment;
use crate::sink::VecSink;
use crate::source::DocumentFile;
use crate::terms::TermSets;
use crate::window::build_window;
use proxsearch_domain::{
    DocumentOutcome, NoopObserver, Observation, ObservationSink, ProgressObserver, ScanReport,
    TextExtractor,
};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// The Engine turns documents into observations
///
/// It holds the run's term sets and configuration, both fixed at
/// construction, and keeps no state between documents. Documents are
/// processed one at a time in the order given; each document's
/// observations are emitted in sentence order before the next document is
/// opened.
pub struct Engine {
    terms: TermSets,
    config: ExtractorConfig,
}

impl Engine {
    /// Create a new Engine
    pub fn new(terms: TermSets, config: ExtractorConfig) -> Self {
        Self { terms, config }
    }

    /// The term sets in use
    pub fn terms(&self) -> &TermSets {
        &self.terms
    }

    /// The configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the observations from one document's text
    pub fn process_text(&self, filename: &str, text: &str) -> Vec<Observation> {
        let sentences = segment(text);
        let matches = find_matches(&sentences, &self.terms);

        debug!(
            "{}: {} sentences, {} matches",
            filename,
            sentences.len(),
            matches.len()
        );

        matches
            .into_iter()
            .map(|idx| {
                Observation::new(
                    filename,
                    build_window(text, &sentences, idx, self.config.window_radius),
                    sentences[idx].to_string(),
                )
            })
            .collect()
    }

    /// Run a batch over `documents`, writing observations to `sink`
    ///
    /// A document whose text cannot be extracted is logged, recorded in the
    /// report and skipped; the batch continues. A sink failure aborts the
    /// run. The sink is flushed after every document.
    pub fn run<E, S, O>(
        &self,
        documents: &[DocumentFile],
        extractor: &E,
        sink: &mut S,
        observer: &mut O,
    ) -> Result<ScanReport, ExtractorError>
    where
        E: TextExtractor,
        E::Error: Display,
        S: ObservationSink,
        S::Error: Display,
        O: ProgressObserver,
    {
        info!("Starting scan of {} documents", documents.len());

        let mut report = ScanReport::new();
        observer.on_start(documents.len());

        for document in documents {
            let text = match extractor.extract_text(&document.path) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Skipping {}: {}", document.filename, e);
                    report.record_skipped(&document.filename, e.to_string());
                    observer.on_document(&document.filename, DocumentOutcome::Skipped);
                    continue;
                }
            };

            let observations = self.process_text(&document.filename, &text);
            for observation in &observations {
                sink.write(observation)
                    .map_err(|e| ExtractorError::Output(e.to_string()))?;
            }
            sink.flush()
                .map_err(|e| ExtractorError::Output(e.to_string()))?;

            report.record_processed(observations.len());
            observer.on_document(
                &document.filename,
                DocumentOutcome::Processed {
                    observations: observations.len(),
                },
            );
        }

        observer.on_finish(&report);
        info!("Scan complete: {}", report.summary());

        Ok(report)
    }

    /// Run a batch and return every observation in emission order
    pub fn collect<E>(
        &self,
        documents: &[DocumentFile],
        extractor: &E,
    ) -> Result<Vec<Observation>, ExtractorError>
    where
        E: TextExtractor,
        E::Error: Display,
    {
        let mut sink = VecSink::new();
        self.run(documents, extractor, &mut sink, &mut NoopObserver)?;
        Ok(sink.into_inner())
    }
}
