// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitgate - Conventional Commits gate
//!
//! Exits 0 when the commit message is valid and 1 otherwise.

use clap::Parser;
use commitgate::cli::{run, Cli, Outcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    match run(cli) {
        Ok(Outcome::Success) => {}
        Ok(Outcome::Rejected) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Set up logging/tracing.
///
/// Logs go to stderr so that stdout only carries the verdict.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("commitgate=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
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
