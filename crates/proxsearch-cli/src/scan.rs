//! The scan command: term files + document directory → CSV.

use crate::cli::Cli;
use crate::config;
use crate::error::{CliError, Result};
use crate::output::{output_path, CsvWriter};
use crate::progress::ProgressReporter;
use proxsearch_domain::{ProgressObserver, ScanReport, TextExtractor};
use proxsearch_extractor::{DocumentSource, Engine, PdfExtractor, TermSets};
use std::fmt::Display;
use std::fs::File;
use tracing::info;

/// Execute a scan with the PDF extractor and a progress bar.
pub fn execute_scan(cli: &Cli) -> Result<ScanReport> {
    let mut progress = if cli.no_progress {
        ProgressReporter::hidden()
    } else {
        ProgressReporter::new()
    };
    scan_with(cli, &PdfExtractor::new(), &mut progress)
}

/// Execute a scan with any text extractor and progress observer.
///
/// Term files are loaded and compiled first, then the document directory
/// is listed, then the output file is created. Any failure up to that
/// point aborts before a single document is read.
pub fn scan_with<E, O>(cli: &Cli, extractor: &E, observer: &mut O) -> Result<ScanReport>
where
    E: TextExtractor,
    E::Error: Display,
    O: ProgressObserver,
{
    let config = config::resolve(cli)?;
    let terms = TermSets::load(&cli.term_paths(), &config)?;
    let engine = Engine::new(terms, config);
    log_terms(engine.terms());

    let source = DocumentSource::scan(&cli.documents_dir, engine.config())?;

    let path = output_path(&cli.output_name);
    let output_error = |source| CliError::Output {
        path: path.display().to_string(),
        source,
    };
    let file = File::create(&path).map_err(output_error)?;
    let mut writer = CsvWriter::new(file).map_err(output_error)?;

    let report = engine.run(source.documents(), extractor, &mut writer, observer)?;
    writer.into_inner().map_err(output_error)?;

    info!("Wrote {} observations to {}", report.observations, path.display());
    Ok(report)
}

fn log_terms(terms: &TermSets) {
    let families = [
        ("causal", &terms.causal),
        ("topic", &terms.topic),
        ("exclude-causal", &terms.exclude_causal),
        ("exclude-topic", &terms.exclude_topic),
    ];
    for (family, set) in families {
        if !set.is_empty() {
            info!("Loaded {} {} terms from {}", set.len(), family, set.source());
        }
    }
}
