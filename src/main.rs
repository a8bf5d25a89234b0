//! # tax-strategy-engine CLI
//!
//! Composition root: loads configuration, wires adapters into an engine and
//! runs a single computation over a profile file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tax_strategy_engine::application::bootstrap;
use tax_strategy_engine::config::{AppConfig, TelemetryConfig};
use tax_strategy_engine::domain::foundation::Timestamp;
use tax_strategy_engine::domain::profile::ClientProfile;

/// Deterministic tax baseline and strategy optimizer.
///
/// Reference data and the audit sink are configured through `TAX_ENGINE__*`
/// environment variables.
#[derive(Parser, Debug)]
#[command(name = "tax-strategy-engine", version, about)]
struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Compute the pre-strategy tax baseline.
    Baseline {
        /// Client profile (JSON, or YAML by `.yaml`/`.yml` extension).
        #[arg(long)]
        profile: PathBuf,
    },
    /// Rank eligible strategies and record an audit document.
    Optimize {
        /// Client profile (JSON, or YAML by `.yaml`/`.yml` extension).
        #[arg(long)]
        profile: PathBuf,

        /// Replay at a fixed RFC 3339 timestamp instead of the current time.
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
}

fn init_tracing(telemetry: &TelemetryConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&telemetry.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if telemetry.json_output() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_profile(path: &Path) -> anyhow::Result<ClientProfile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading profile {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let profile = if is_yaml {
        ClientProfile::from_yaml(&content)
    } else {
        ClientProfile::from_json(&content)
    };
    profile.with_context(|| format!("invalid profile {}", path.display()))
}

fn print_json(value: &impl serde::Serialize, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;
    init_tracing(&config.telemetry);

    let engine = bootstrap::build_engine(&config)
        .await
        .context("building tax engine")?;

    match cli.command {
        Commands::Baseline { profile } => {
            let profile = read_profile(&profile)?;
            print_json(&engine.compute_baseline(&profile), cli.pretty)?;
        }
        Commands::Optimize { profile, at } => {
            let profile = read_profile(&profile)?;
            let timestamp = at.map(Timestamp::from_datetime).unwrap_or_else(Timestamp::now);
            let report = engine.optimize_at(&profile, timestamp)?;
            print_json(&report, cli.pretty)?;
            engine.flush_audits().await;
        }
    }

    Ok(())
}
