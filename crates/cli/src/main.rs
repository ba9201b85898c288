//! modecheck - firmware mode-table consistency checker
//!
//! Points the `modecheck` library at a sketch file and reports whether the
//! mode enum and its parallel configuration tables still agree. Intended to
//! run under CI or a test harness: silent pass, non-zero exit with a
//! pinpointed drift report on failure.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use modecheck::{CheckSpec, ModeCheckError, verify_path};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "modecheck")]
#[command(about = "Check that a sketch's mode enum and parallel tables stay in lock-step")]
#[command(version)]
#[command(long_about = "
modecheck validates a firmware sketch against its mode-table convention:
the mode enum's count sentinel must equal the length of every parallel
configuration table (display names, speeds, and any others configured).

A passing run is silent and exits 0. A failing run names every table that
drifted from the enum and by how much, and exits non-zero.
")]
struct Cli {
    /// Sketch file to check
    sketch: PathBuf,

    /// JSON file overriding the default enum/sentinel/table names
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output in JSON format for machine parsing
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("modecheck={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let check = load_check_spec(&cli)?;
    info!(sketch = %cli.sketch.display(), enum_name = %check.enum_name, "verifying");

    match verify_path(&cli.sketch, &check) {
        Ok(report) => {
            if cli.json {
                let payload = serde_json::json!({ "status": "pass", "report": report });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            Ok(())
        }
        Err(ModeCheckError::Mismatch(report)) => {
            if cli.json {
                let payload = serde_json::json!({ "status": "fail", "mismatch": report });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            Err(anyhow::anyhow!("{report}"))
        }
        Err(err) => Err(err).with_context(|| {
            format!("could not verify `{}`", cli.sketch.display())
        }),
    }
}

fn load_check_spec(cli: &Cli) -> Result<CheckSpec> {
    match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read config `{}`", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid check config `{}`", path.display()))
        }
        None => Ok(CheckSpec::default()),
    }
}
