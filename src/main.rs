//! # flowcanvas CLI
//!
//! Parses the command line, installs the tracing subscriber and dispatches
//! to the command handlers.

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use flowcanvas::cli::Cli;
use flowcanvas::commands::execute_command;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    execute_command(Cli::parse()).await
}

/// Initialize tracing subscriber with environment filter.
///
/// Logs go to stderr so command output on stdout stays pipeable.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
