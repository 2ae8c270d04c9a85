//! Deterministic in-memory text extractor

use crate::error::ExtractorError;
use proxsearch_domain::TextExtractor;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock extractor for deterministic testing
///
/// Returns pre-registered text keyed by file name, without touching the
/// file system. Unknown files, and files registered with
/// [`MockExtractor::add_failure`], fail with an extraction error.
///
/// # Examples
///
/// ```
/// use proxsearch_extractor::MockExtractor;
/// use proxsearch_domain::TextExtractor;
/// use std::path::Path;
///
/// let mut extractor = MockExtractor::new();
/// extractor.add_text("a.pdf", "The flood caused damage.");
/// extractor.add_failure("broken.pdf");
///
/// assert_eq!(
///     extractor.extract_text(Path::new("docs/a.pdf")).unwrap(),
///     "The flood caused damage."
/// );
/// assert!(extractor.extract_text(Path::new("docs/broken.pdf")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockExtractor {
    texts: HashMap<String, Option<String>>,
    call_count: Arc<AtomicUsize>,
}

impl MockExtractor {
    /// Create an extractor with no registered documents
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the text returned for `filename`
    pub fn add_text(&mut self, filename: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(filename.into(), Some(text.into()));
    }

    /// Make extraction of `filename` fail
    pub fn add_failure(&mut self, filename: impl Into<String>) {
        self.texts.insert(filename.into(), None);
    }

    /// Number of times `extract_text` was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl TextExtractor for MockExtractor {
    type Error = ExtractorError;

    fn extract_text(&self, path: &Path) -> Result<String, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match self.texts.get(&filename) {
            Some(Some(text)) => Ok(text.clone()),
            Some(None) => Err(ExtractorError::Extraction {
                path: path.display().to_string(),
                reason: "mock extraction failure".to_string(),
            }),
            None => Err(ExtractorError::Extraction {
                path: path.display().to_string(),
                reason: "no text registered".to_string(),
            }),
        }
    }
}
