//! reachability-probe
//!
//! Checks that service endpoints (by default a MongoDB instance on
//! `localhost:27017`) accept TCP connections within a timeout.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI args ─┐
//!   env vars ─┼─▶ config ──▶ probe plan ──▶ Prober::probe_all ──▶ reports ──▶ stdout
//!   TOML file ┘                                   │                  │
//!                                                 │                  └──▶ exit status
//!                          Ctrl-C / SIGTERM ──────┘ (drops in-flight probes)
//! ```
//!
//! # Exit Status
//! - 0: every target reached
//! - 1: at least one target unreachable
//! - 2: invalid configuration
//! - 130: interrupted

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use reachability_probe::config::{load_config, Overrides};
use reachability_probe::lifecycle::shutdown_signal;
use reachability_probe::observability::logging::init_logging;
use reachability_probe::probe::{ProbeReport, Prober};

#[derive(Parser)]
#[command(name = "reachability-probe")]
#[command(about = "Check that service endpoints accept TCP connections", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target as host:port or mongodb://host:port/db. Repeatable.
    #[arg(short, long = "target")]
    targets: Vec<String>,

    /// Per-attempt connect timeout in milliseconds.
    #[arg(long)]
    connect_timeout_ms: Option<u64>,

    /// Overall budget for finding a reachable address, in milliseconds.
    #[arg(long)]
    selection_timeout_ms: Option<u64>,

    /// Print reports as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let overrides = Overrides {
        targets: cli.targets,
        connect_timeout_ms: cli.connect_timeout_ms,
        selection_timeout_ms: cli.selection_timeout_ms,
    };

    let config = match load_config(cli.config.as_deref(), |key| std::env::var(key).ok(), &overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    init_logging(&config.observability);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "reachability-probe starting");

    let plan = match config.probe_plan() {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!(error = %e, "Invalid probe target");
            return ExitCode::from(2);
        }
    };

    for (connection_string, probe_config) in &plan {
        tracing::info!(
            connection_string = %connection_string,
            connect_timeout_ms = probe_config.connect_timeout().as_millis() as u64,
            selection_timeout_ms = probe_config.selection_timeout().as_millis() as u64,
            "Probing"
        );
    }

    let plan: Vec<_> = plan
        .into_iter()
        .map(|(connection_string, probe_config)| (connection_string.target().clone(), probe_config))
        .collect();

    let prober = Prober::new();
    let reports = tokio::select! {
        reports = prober.probe_all(&plan) => reports,
        _ = shutdown_signal() => {
            tracing::warn!("Interrupted, abandoning in-flight probes");
            return ExitCode::from(130);
        }
    };

    print_reports(&reports, cli.json);

    if reports.iter().all(|r| r.result.is_reached()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn print_reports(reports: &[ProbeReport], json: bool) {
    if json {
        match serde_json::to_string_pretty(reports) {
            Ok(out) => println!("{}", out),
            Err(e) => tracing::error!(error = %e, "Failed to serialize reports"),
        }
        return;
    }

    for report in reports {
        println!("{}", report);
    }
}
