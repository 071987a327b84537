//! CricScore console
//!
//! Operator front end for the innings scorer: reads one command per line
//! from stdin and prints the live scorecard after every change.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use cric_core::{FileSnapshotStore, MatchSession, ScorerConfig};

mod cli;
mod console;
mod render;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let mut config = ScorerConfig::from_env().context("Failed to load scorer config")?;
    cli.apply_to(&mut config);
    config.validate()?;

    let store = FileSnapshotStore::new(&config.save_dir);
    let session = MatchSession::open(store, &config)
        .with_context(|| format!("Failed to open saved match in {}", config.save_dir.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(session, stdin.lock(), stdout.lock())
}
