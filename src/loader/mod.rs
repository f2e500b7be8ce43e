//! Process list loading.
//!
//! This module mirrors the Go `loadProcesses` / `openProcessingFile` pair:
//! the input is a headerless CSV file with one row per process, either three
//! or four integer fields:
//!
//! ```text
//! processID,burstDuration,arrivalTime[,priority]
//! ```
//!
//! The priority field defaults to 0 when absent. Row order is preserved
//! exactly as read — input position is the FCFS execution order and the
//! Round-Robin cursor order, so the loader must never sort.
//!
//! A malformed field is a fatal load error (the engines never see a
//! half-parsed list), reported with the 1-based row number instead of the
//! reference's bare `os.Exit(1)`.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::Trim;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::process::Process;

// ── Private CSV deserialization type ──────────────────────────────────────────

/// One raw CSV row. Kept private — callers work with [`Process`].
///
/// The trailing `Option` absorbs the 3-vs-4-field variance: with a flexible
/// reader, a three-field row deserializes with `None` priority.
#[derive(Debug, Deserialize)]
struct RawRecord(i64, u64, u64, #[serde(default)] Option<u64>);

// ── Errors ────────────────────────────────────────────────────────────────────

/// Why a process list could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be opened.
    #[error("cannot open process file '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row failed to parse (wrong field count, non-integer field, I/O
    /// failure mid-read).
    #[error("malformed process record on row {row}: {source}")]
    MalformedRecord {
        /// 1-based row number.
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// A row declared a zero burst duration, which no engine can ever
    /// complete or finalize.
    #[error("process {pid} on row {row} has a zero burst duration")]
    ZeroBurst { row: usize, pid: i64 },
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Open `path` and load the process list from it.
pub fn load_from_path(path: &Path) -> Result<Vec<Process>, LoadError> {
    info!("loading process list from: {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file)
}

/// Load the process list from any reader.
///
/// An empty input yields an empty list — rejecting that is the engines' job
/// ([`ScheduleError::EmptyProcessList`](crate::sched::ScheduleError)), the
/// loader only vouches for well-formed rows.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Process>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut processes = Vec::new();
    for (idx, record) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let row = idx + 1;
        let raw = record.map_err(|source| LoadError::MalformedRecord { row, source })?;
        let RawRecord(id, burst, arrival, priority) = raw;

        if burst == 0 {
            return Err(LoadError::ZeroBurst { row, pid: id });
        }
        if processes.iter().any(|p: &Process| p.id == id) {
            // Ids are opaque display keys; the reference does not police
            // duplicates, so neither do we — but they make the Gantt chart
            // ambiguous and are worth flagging.
            warn!(pid = id, row, "duplicate process id in input");
        }

        processes.push(Process {
            id,
            arrival,
            burst,
            priority: priority.unwrap_or(0),
        });
    }

    info!(process_count = processes.len(), "process list loaded");
    Ok(processes)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
