//! Casefile translation-entry generator entry point.
//!
//! Prints the French clue and location entries to stdout. Logs go to
//! stderr so the output can be pasted as-is.

use std::error::Error;
use std::io::Write;

use casefile_translations::application::consistency::consistency_report;
use casefile_translations::application::fingerprint::fingerprint;
use casefile_translations::application::json::write_json;
use casefile_translations::application::render::write_translations;
use casefile_translations::domain::fr_catalog::french_catalog;
use tracing_subscriber::EnvFilter;

mod config;

use config::{Config, OutputFormat};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = Config::from_env();
    tracing::info!(format = %config.format, "Generating French translation entries");

    let catalog = french_catalog();
    for finding in consistency_report(&catalog).findings {
        tracing::warn!(%finding, "catalog inconsistency");
    }

    let mut buffer = Vec::new();
    let entries = match config.format {
        OutputFormat::Ts => write_translations(&catalog, &mut buffer)?,
        OutputFormat::Json => write_json(&catalog, &mut buffer)?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&buffer)?;
    stdout.flush()?;

    tracing::info!(
        entries,
        bytes = buffer.len(),
        sha256 = %fingerprint(&buffer),
        "Translation entries written"
    );

    Ok(())
}
