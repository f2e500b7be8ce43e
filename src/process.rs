/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core process data structures for the Metronome simulator.
//!
//! Two sides of the simulation pipeline share this module:
//!
//! ```text
//! CSV file ──(loader)──► Process ──(engine)──► ScheduleResult ──► renderer
//!                         ↑ input                ↑ output
//!                         immutable record        rows + timeline + metrics
//! ```
//!
//! # Ownership model
//! `Process` records are **borrowed** by the engines (`&[Process]`) and never
//! mutated: each engine keeps its own remaining-burst working table inside the
//! simulation state, so the same slice can be handed to all four engines in
//! turn (or in parallel) without copies or locks.

// ── Process (input record) ────────────────────────────────────────────────────

/// Stable process identifier.
///
/// Opaque to the simulation — it is only used for display, grouping timeline
/// segments, and the Round-Robin "don't re-pick the previous process" rule.
/// Identity inside the engines is the *input index*, which also serves as the
/// deterministic tie-breaker, so the id itself carries no ordering meaning.
pub type ProcessId = i64;

/// One job as read from the input file.
///
/// Mirrors the Go `Process` struct, with unsigned tick fields: arrival and
/// burst are non-negative by construction, so the `int64` sign bit of the
/// original buys nothing but underflow hazards.
///
/// The *position* of a record in the input slice is significant: FCFS runs
/// processes strictly in input order and Round-Robin's circular cursor walks
/// input positions, so the loader must never re-sort what it read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    /// Unique display identifier.
    pub id: ProcessId,

    /// Tick at which the process becomes eligible to run.
    pub arrival: u64,

    /// Total CPU ticks required. Always > 0 — the loader rejects zero-burst
    /// records before they reach an engine.
    pub burst: u64,

    /// Scheduling priority; lower value = scheduled first. Only the
    /// Priority-SJF engine reads it. Defaults to 0 when the input row has
    /// three fields.
    pub priority: u64,
}

// ── TimelineSegment (Gantt output) ────────────────────────────────────────────

/// One contiguous run of a single process on the CPU: `[start, stop)`.
///
/// Consecutive ticks won by the same process are merged into one segment by
/// the simulation state; a fresh segment starts whenever the running process
/// changes or an idle gap separates two runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineSegment {
    pub pid: ProcessId,
    pub start: u64,
    pub stop: u64,
}

impl TimelineSegment {
    /// Number of ticks this segment occupies.
    pub fn len(&self) -> u64 {
        self.stop.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.stop <= self.start
    }
}

// ── ScheduleRow (per-process output) ──────────────────────────────────────────

/// Finalized timing record for one process.
///
/// Populated exactly once, on the tick where the process's remaining burst
/// reaches zero. `burst` is the *original* burst duration, not the exhausted
/// working copy. Invariants (checked in tests, guaranteed by construction):
///
/// * `waiting == completion − arrival − burst` (modulo the FCFS sticky quirk)
/// * `turnaround == completion − arrival`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleRow {
    pub pid: ProcessId,
    pub priority: u64,
    pub burst: u64,
    pub arrival: u64,
    pub waiting: u64,
    pub turnaround: u64,
    /// Tick at which the final burst tick finished.
    pub completion: u64,
}

// ── Metrics (aggregates) ──────────────────────────────────────────────────────

/// Whole-run aggregates, derived after every process has completed.
///
/// `throughput` is processes per tick measured against the **latest
/// completion tick across all rows** — not an engine loop counter, which for
/// the preemptive engines can overshoot the last real completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub throughput: f64,
}

// ── ScheduleResult ────────────────────────────────────────────────────────────

/// Everything one engine run produces, ready for the renderer.
///
/// `rows` is ordered by original input index regardless of completion order;
/// `timeline` is ordered by start tick. The result owns its data — nothing
/// refers back to the input slice, so results outlive the processes they were
/// computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleResult {
    /// Human-readable name of the discipline, e.g. "First-come, first-serve".
    pub title: &'static str,

    /// One row per process, in input order.
    pub rows: Vec<ScheduleRow>,

    /// Merged Gantt segments, in execution order.
    pub timeline: Vec<TimelineSegment>,

    /// Run-level aggregates.
    pub metrics: Metrics,
}

impl ScheduleResult {
    /// Latest completion tick across all rows.
    ///
    /// Returns 0 for an empty row set — engines reject empty input before a
    /// result is ever built, so this is only reachable from tests.
    pub fn last_completion(&self) -> u64 {
        self.rows.iter().map(|r| r.completion).max().unwrap_or(0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
