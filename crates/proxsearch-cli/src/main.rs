//! Proxsearch CLI - extract causal observations from a directory of PDFs.

use proxsearch_cli::scan;
use proxsearch_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse_args();

    // Initialize tracing (log to stderr)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = scan::execute_scan(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
