use clap::Parser;
use tracing::{debug, error};

use undecidable::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2) // Show target module for -vv
        .init();

    debug!("undecidable started with verbosity level: {}", cli.verbose);

    if let Err(e) = execute_command(cli.command) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
