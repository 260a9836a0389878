//! Registry node binary.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use registry_node::{load_config, NodeRuntime, Script};
use registry_telemetry::{init_logging, subsystem_span, TelemetryConfig};
use tracing::{error, info, Instrument};

/// Name registry node: replays a request script against a fresh registry.
#[derive(Parser, Debug)]
#[command(name = "registry-node")]
#[command(about = "Replay registry requests and report the resulting state")]
struct Args {
    /// TOML configuration file (`[registry]` table). Env overrides apply on top.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON script with `funding` and `steps`.
    script: PathBuf,

    /// Skip the final state report.
    #[arg(long)]
    no_report: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let telemetry = TelemetryConfig::from_env();
    init_logging(&telemetry).context("Failed to initialize logging")?;

    let span = subsystem_span!("registry-node", service = %telemetry.service_name);
    run(args).instrument(span).await
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let script = Script::load(&args.script)?;
    info!(steps = script.steps.len(), "Script loaded");

    let mut node = NodeRuntime::new(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    node.replay(script, &mut out).await?;

    let report = node.report().await;
    if !args.no_report {
        serde_json::to_writer(&mut out, &report).context("Failed to write report")?;
        writeln!(out).context("Failed to write report")?;
    }
    out.flush().context("Failed to flush output")?;

    if !report.is_consistent() {
        for violation in &report.invariant_violations {
            error!(%violation, "Invariant violated");
        }
        bail!(
            "{} registry invariant(s) violated",
            report.invariant_violations.len()
        );
    }

    info!(
        reserved = report.total_reserved,
        escrowed = %report.total_escrowed,
        "Registry node finished"
    );
    Ok(())
}
