//! Error types for the CLI application.

use proxsearch_extractor::ExtractorError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction error
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// Output file error
    #[error("Cannot write output file {path}: {source}")]
    Output {
        /// Output file path
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
