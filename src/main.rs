//! Entry point for elfview.
//!
//! 1. Parse command-line arguments using `clap`.
//! 2. Set up logging with `tracing-subscriber`.
//! 3. Map and decode the input file.
//! 4. Render the requested document shape and print it.
//!
//! Error handling is done via `anyhow`; a failed parse prints nothing to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use elfview::config::Config;
use elfview::{loader, present};

fn main() -> Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let object = loader::open(&config.file)
        .with_context(|| format!("failed to parse {}", config.file.display()))?;
    tracing::info!(
        "{}: {} sections, {} segments",
        config.file.display(),
        object.sections().len(),
        object.program_headers().len()
    );

    let document = present::render(&object, config.shape)
        .with_context(|| format!("failed to render {}", config.file.display()))?;
    let text = if config.compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };
    println!("{text}");
    Ok(())
}
