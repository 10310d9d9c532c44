// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! msgcheck - commit message format checker for pre-commit hooks.

use clap::Parser;
use msgcheck::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit status when the check could not run at all.
const EXIT_FAILURE: i32 = 2;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    match run(cli) {
        Ok(verdict) => std::process::exit(verdict.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

/// Set up logging/tracing. Hooks only relay stderr, so logs go there too.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("msgcheck=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
