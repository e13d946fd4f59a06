//! Contact Book - Main entry point
//!
//! Runs the interactive contact manager on the terminal. Diagnostics go to
//! stderr so they never mix with command replies on stdout.

use anyhow::Result;
use contact_book::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to avoid polluting the REPL on stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    if let Err(e) = contact_book::repl::run(&config) {
        error!("Contact book stopped: {:#}", e);
        return Err(e);
    }

    info!("Contact book shutdown complete");
    Ok(())
}
