/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use metronome::{loader, render, sched};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Metronome tick-driven CPU-scheduling simulator (Rust implementation).
///
/// Example:
///   metronome demos/processes.csv
///   metronome -d round-robin -q 4 demos/processes.csv
#[derive(Debug, Parser)]
#[command(
    name = "metronome",
    about = "Metronome CPU-scheduling simulator – Rust implementation",
    long_about = None,
)]
struct Cli {
    /// Path to the CSV process list (processID,burstDuration,arrivalTime[,priority]).
    input: PathBuf,

    /// Round-Robin time quantum in ticks.
    #[arg(short = 'q', long = "quantum", default_value_t = sched::DEFAULT_QUANTUM)]
    quantum: u64,

    /// Run a single discipline instead of all four
    /// (fcfs, sjf, priority, round-robin).
    #[arg(short = 'd', long = "discipline")]
    discipline: Option<String>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialise structured logging.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{:#}", e);
        process::exit(1);
    }
}

/// Load the process list once, then run the selected discipline(s) against
/// the shared output sink.
fn run(cli: Cli) -> anyhow::Result<()> {
    info!(
        input      = %cli.input.display(),
        quantum    = cli.quantum,
        discipline = ?cli.discipline,
        "Configuration"
    );

    let processes =
        loader::load_from_path(&cli.input).context("failed to load process list")?;

    let disciplines: Vec<&str> = match &cli.discipline {
        Some(one) => vec![one.as_str()],
        None => sched::ALL_DISCIPLINES.to_vec(),
    };

    let stdout = io::stdout();
    let mut sink = stdout.lock();

    for discipline in disciplines {
        let result = sched::schedule(&processes, discipline, cli.quantum)
            .with_context(|| format!("'{discipline}' scheduling failed"))?;
        render::render_report(&mut sink, &result).context("failed to write report")?;
    }

    Ok(())
}
