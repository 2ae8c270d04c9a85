//! CLI argument definitions and parsing.

use clap::Parser;
use proxsearch_extractor::TermPaths;
use std::ffi::OsString;
use std::path::PathBuf;

/// Proxsearch - Extract cause-effect observations from a directory of PDFs.
///
/// Every sentence that matches a causal term and a topic term, and no
/// exclusion term, is written to CSV with two sentences of context on
/// either side.
#[derive(Debug, Parser)]
#[command(name = "proxsearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the PDF documents to process
    pub documents_dir: PathBuf,

    /// File of causal search terms, one regular expression per line
    pub causal_terms: PathBuf,

    /// File of topic search terms, one regular expression per line
    pub topic_terms: PathBuf,

    /// Name of the output file; ".csv" is appended when missing
    pub output_name: String,

    /// File of causal terms whose sentences are excluded (also -xc)
    #[arg(long = "exclude_causal_terms", alias = "exclude-causal-terms", value_name = "FILE")]
    pub exclude_causal_terms: Option<PathBuf>,

    /// File of topic terms whose sentences are excluded (also -xt)
    #[arg(long = "exclude_topic_terms", alias = "exclude-topic-terms", value_name = "FILE")]
    pub exclude_topic_terms: Option<PathBuf>,

    /// Extractor configuration file (TOML)
    #[arg(short, long, env = "PROXSEARCH_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Match every term set case-insensitively
    #[arg(long)]
    pub ignore_case: bool,

    /// Match causal and exclude-causal terms case-insensitively
    #[arg(long)]
    pub ignore_case_causal: bool,

    /// Match topic and exclude-topic terms case-insensitively
    #[arg(long)]
    pub ignore_case_topic: bool,

    /// Sentences of context on each side of a match
    #[arg(long, value_name = "N")]
    pub radius: Option<usize>,

    /// Do not show the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Log debug detail for every document
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log warnings and errors only
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse the process arguments, accepting the short -xc / -xt spellings
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// The term-list files named on the command line
    pub fn term_paths(&self) -> TermPaths {
        TermPaths {
            causal: self.causal_terms.clone(),
            topic: self.topic_terms.clone(),
            exclude_causal: self.exclude_causal_terms.clone(),
            exclude_topic: self.exclude_topic_terms.clone(),
        }
    }

    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Rewrite the two-letter flags -xc and -xt to their long forms
///
/// Arguments after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if passthrough {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some("-xc") => OsString::from("--exclude_causal_terms"),
                Some("-xt") => OsString::from("--exclude_topic_terms"),
                _ => arg,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(normalize_args(args.iter().copied()))
    }

    #[test]
    fn test_positional_arguments() {
        let cli = parse(&["proxsearch", "docs", "causal.txt", "topic.txt", "results"]);
        assert_eq!(cli.documents_dir, PathBuf::from("docs"));
        assert_eq!(cli.causal_terms, PathBuf::from("causal.txt"));
        assert_eq!(cli.topic_terms, PathBuf::from("topic.txt"));
        assert_eq!(cli.output_name, "results");
        assert!(cli.exclude_causal_terms.is_none());
        assert!(cli.exclude_topic_terms.is_none());
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_short_exclusion_flags() {
        let cli = parse(&[
            "proxsearch", "docs", "c.txt", "t.txt", "out", "-xc", "xc.txt", "-xt", "xt.txt",
        ]);
        assert_eq!(cli.exclude_causal_terms, Some(PathBuf::from("xc.txt")));
        assert_eq!(cli.exclude_topic_terms, Some(PathBuf::from("xt.txt")));
    }

    #[test]
    fn test_long_exclusion_flags() {
        let cli = parse(&[
            "proxsearch",
            "docs",
            "c.txt",
            "t.txt",
            "out",
            "--exclude_causal_terms",
            "xc.txt",
            "--exclude-topic-terms",
            "xt.txt",
        ]);
        let paths = cli.term_paths();
        assert_eq!(paths.exclude_causal, Some(PathBuf::from("xc.txt")));
        assert_eq!(paths.exclude_topic, Some(PathBuf::from("xt.txt")));
    }

    #[test]
    fn test_missing_positional_is_error() {
        let result = Cli::try_parse_from(["proxsearch", "docs", "c.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["proxsearch", "d", "c", "t", "o", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_leaves_args_after_separator() {
        let args = normalize_args(["proxsearch", "--", "-xc"]);
        assert_eq!(args[2], OsString::from("-xc"));
    }

    #[test]
    fn test_case_and_radius_flags() {
        let cli = parse(&[
            "proxsearch",
            "docs",
            "c.txt",
            "t.txt",
            "out",
            "--ignore-case-topic",
            "--radius",
            "3",
            "--no-progress",
            "-q",
        ]);
        assert!(cli.ignore_case_topic);
        assert!(!cli.ignore_case_causal);
        assert_eq!(cli.radius, Some(3));
        assert!(cli.no_progress);
        assert_eq!(cli.log_level(), "warn");
    }
}
