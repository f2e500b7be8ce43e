/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Aggregate metric derivation shared by all engines.
//!
//! The Go reference accumulates `totalWait` / `totalTurnaround` inside each
//! scheduling loop and divides by whatever loop counter happens to be in
//! scope — for Round-Robin the divisor is the final loop tick, which
//! overshoots the last real completion by up to a quantum. Here the
//! aggregates are derived once, from the finalized rows, so every engine gets
//! identical semantics:
//!
//! * `avg_waiting   = Σ waiting   / n`
//! * `avg_turnaround = Σ turnaround / n`
//! * `throughput    = n / max(completion)`

use crate::process::{Metrics, ScheduleRow};

/// Derive the three run-level aggregates from finalized rows.
///
/// Engines validate non-empty input up front, so `rows` is never empty on the
/// production path; an empty slice yields all-zero metrics rather than NaN.
pub fn aggregate(rows: &[ScheduleRow]) -> Metrics {
    if rows.is_empty() {
        return Metrics {
            avg_waiting: 0.0,
            avg_turnaround: 0.0,
            throughput: 0.0,
        };
    }

    let count = rows.len() as f64;
    let total_waiting: u64 = rows.iter().map(|r| r.waiting).sum();
    let total_turnaround: u64 = rows.iter().map(|r| r.turnaround).sum();
    let last_completion = rows.iter().map(|r| r.completion).max().unwrap_or(0);

    Metrics {
        avg_waiting: total_waiting as f64 / count,
        avg_turnaround: total_turnaround as f64 / count,
        // burst > 0 for every process, so last_completion > 0 whenever rows
        // is non-empty; the guard is for synthetic test rows only.
        throughput: if last_completion == 0 {
            0.0
        } else {
            count / last_completion as f64
        },
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
