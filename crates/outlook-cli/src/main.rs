// File: crates/outlook-cli/src/main.rs
// Summary: Loads solar.csv and renders the linear and log outlook charts into graphs/.

use anyhow::{Context, Result};
use outlook_core::{ChartConfig, RenderOptions};
use std::path::Path;
use tracing::info;

const INPUT: &str = "solar.csv";
const OUT_DIR: &str = "graphs";

fn main() -> Result<()> {
    init_tracing();

    let config = ChartConfig::default();
    config.validate().context("built-in chart configuration is invalid")?;

    let input = Path::new(INPUT);
    let written = outlook_core::run(input, OUT_DIR, &config, &RenderOptions::default())
        .with_context(|| format!("failed to render outlook charts from '{}'", input.display()))?;

    for path in &written {
        println!("Plot saved: {}", path.display());
    }
    info!(files = written.len(), "done");
    Ok(())
}

/// `RUST_LOG` overrides the default `info` filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // A subscriber installed by an embedding host wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
