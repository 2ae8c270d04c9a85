//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while loading terms or scanning documents
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A term-list line is not a usable pattern
    #[error("Invalid pattern in {path} line {line}: {message}")]
    Config {
        /// Term-list file (or `<inline>`)
        path: String,
        /// 1-based line number
        line: usize,
        /// Why the pattern was rejected
        message: String,
    },

    /// A term list's patterns compile one by one but not as a combined set
    #[error("Cannot combine the patterns in {path} into one term set: {message}")]
    TermSet {
        /// Term-list file (or `<inline>`)
        path: String,
        /// Why the combined set was rejected
        message: String,
    },

    /// A term-list file is missing or unreadable
    #[error("Cannot read term file {path}: {source}")]
    TermFile {
        /// Term-list file
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Extractor configuration failed validation
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// A single document could not be read or text-extracted
    #[error("Extraction failed for {path}: {reason}")]
    Extraction {
        /// Document path
        path: String,
        /// Why extraction failed
        reason: String,
    },

    /// The document directory cannot be listed
    #[error("Cannot list documents in {path}: {source}")]
    DocumentSource {
        /// Document directory
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The observation sink failed
    #[error("Output error: {0}")]
    Output(String),
}
