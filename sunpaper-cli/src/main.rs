//! Binary crate for the `sunpaper` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Setting up logging on stderr
//! - Printing the chosen wallpaper on stdout

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    cmd.run().await
}
