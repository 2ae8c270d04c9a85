//! Proxsearch CLI library.
//!
//! This library provides the pieces of the `proxsearch` command-line tool:
//! argument parsing, configuration resolution, CSV output, progress display
//! and the scan command itself.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;
pub mod scan;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use output::CsvWriter;
pub use progress::ProgressReporter;
