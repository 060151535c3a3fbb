use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use firdes::{design_from_json_with, DesignConfig};

#[derive(Parser)]
#[command(name = "firdes", about = "Window-method FIR filter coefficient design")]
struct Args {
    /// JSON filter configuration
    #[arg(long)]
    config: PathBuf,

    /// Decimal places kept by every truncation (overrides the file's round_to)
    #[arg(long)]
    round_to: Option<i32>,

    /// Report only the final coefficients
    #[arg(long)]
    coefficients_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Reject the legacy "passband"/"stopband" filter type names
    #[arg(long)]
    strict_names: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let text = std::fs::read_to_string(&args.config)
        .with_context(|| format!("reading {}", args.config.display()))?;
    let mut raw: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", args.config.display()))?;
    if let (Some(round_to), Some(obj)) = (args.round_to, raw.as_object_mut()) {
        obj.insert("round_to".into(), round_to.into());
    }

    let cfg = DesignConfig {
        legacy_band_names: !args.strict_names,
        ..DesignConfig::default()
    };
    let report = design_from_json_with(&raw, &cfg)
        .with_context(|| format!("designing filter from {}", args.config.display()))?;
    info!(taps = report.coefficients.len(), "design complete");

    let out = match (args.coefficients_only, args.pretty) {
        (true, true) => serde_json::to_string_pretty(&report.coefficients)?,
        (true, false) => serde_json::to_string(&report.coefficients)?,
        (false, true) => serde_json::to_string_pretty(&report)?,
        (false, false) => serde_json::to_string(&report)?,
    };
    println!("{out}");

    Ok(())
}
