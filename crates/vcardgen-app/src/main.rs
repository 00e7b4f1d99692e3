//! `vcardgen` - format a contact snapshot as a vCard document.
//!
//! Reads a JSON contact snapshot and writes the document to stdout. Logs go
//! to stderr so the output can be redirected straight into a `.vcf` file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use vcardgen_core::config::load_config;

mod export;

#[derive(Parser)]
#[command(name = "vcardgen")]
#[command(author, version, about = "Format a contact snapshot as a vCard document", long_about = None)]
struct Cli {
    /// Path to the contact snapshot (JSON)
    input: PathBuf,

    /// Emit vCard 3.0 regardless of the configured version
    #[arg(long)]
    legacy: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let legacy = cli.legacy || config.output.legacy_version()?;
    let document = export::render_file(&cli.input, legacy)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.flush()?;

    tracing::info!(input = %cli.input.display(), legacy, "vCard written");

    Ok(())
}
