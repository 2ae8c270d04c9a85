//! Extractor configuration resolution for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use proxsearch_extractor::{CaseMode, ExtractorConfig, ExtractorError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load an extractor configuration file.
pub fn load(path: &Path) -> Result<ExtractorConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("Cannot read config file {}: {}", path.display(), e))
    })?;
    ExtractorConfig::from_toml(&contents)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
}

/// Build the run configuration: the config file (or defaults), then flags.
pub fn resolve(cli: &Cli) -> Result<ExtractorConfig> {
    let mut config = match &cli.config {
        Some(path) => load(path)?,
        None => ExtractorConfig::default(),
    };

    apply_overrides(&mut config, cli);
    config.validate().map_err(ExtractorError::InvalidConfig)?;
    if let Ok(text) = config.to_toml() {
        debug!("Effective configuration:\n{}", text);
    }
    Ok(config)
}

/// Apply command-line flags on top of a loaded configuration.
pub fn apply_overrides(config: &mut ExtractorConfig, cli: &Cli) {
    if cli.ignore_case || cli.ignore_case_causal {
        config.causal_case = CaseMode::Insensitive;
    }
    if cli.ignore_case || cli.ignore_case_topic {
        config.topic_case = CaseMode::Insensitive;
    }
    if let Some(radius) = cli.radius {
        config.window_radius = radius;
    }
}
