//! buildbump - CLI entry point.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use buildbump::run_bump;

/// Bump the build number in ls.manifest, ls.rc, and config.h.
#[derive(Parser, Debug)]
#[command(name = "buildbump")]
#[command(about = "Bump the build number in ls.manifest, ls.rc, and config.h")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    let outcome = run_bump(Path::new(".")).context("Version bump failed")?;

    println!("Version bumped to {}", outcome.full_version);

    Ok(())
}
