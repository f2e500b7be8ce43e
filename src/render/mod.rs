//! Report rendering: title banner, Gantt strip, schedule table.
//!
//! The core hands over a fully-typed [`ScheduleResult`]; everything here is
//! presentation. All functions write to any `io::Write` sink so tests render
//! into a `Vec<u8>` and the driver into stdout.
//!
//! Layout follows the Go reference: a dashed title banner, a pipe-separated
//! Gantt strip with the tick marks underneath, then a fixed-width table with
//! one row per process and the three aggregates at the bottom.

use std::io::{self, Write};

use crate::process::ScheduleResult;

// ── Column layout ─────────────────────────────────────────────────────────────

const HEADERS: [&str; 7] = ["ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Exit"];

/// Width of every table column; wide enough for the headers and any sane
/// tick count.
const COL_WIDTH: usize = 10;

/// Width of one Gantt cell (the Go reference pads pids to eight characters).
const GANTT_CELL: usize = 8;

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render one engine run: banner, Gantt strip, schedule table.
pub fn render_report<W: Write>(w: &mut W, result: &ScheduleResult) -> io::Result<()> {
    write_title(w, result.title)?;
    write_gantt(w, result)?;
    write_table(w, result)
}

/// Dashed banner with the run title roughly centred, as in the reference.
fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{}{title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

/// Pipe-separated process ids, with each segment's start tick underneath and
/// the final stop tick at the end of the strip.
fn write_gantt<W: Write>(w: &mut W, result: &ScheduleResult) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;

    write!(w, "|")?;
    for seg in &result.timeline {
        write!(w, "{:^GANTT_CELL$}|", seg.pid)?;
    }
    writeln!(w)?;

    for (i, seg) in result.timeline.iter().enumerate() {
        write!(w, "{}\t", seg.start)?;
        if i == result.timeline.len() - 1 {
            write!(w, "{}", seg.stop)?;
        }
    }
    writeln!(w)?;
    writeln!(w)
}

/// Fixed-width schedule table, one row per process in input order, with the
/// run aggregates underneath.
fn write_table<W: Write>(w: &mut W, result: &ScheduleResult) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    for header in HEADERS {
        write!(w, "{header:>COL_WIDTH$}")?;
    }
    writeln!(w)?;
    writeln!(w, "{}", "-".repeat(COL_WIDTH * HEADERS.len()))?;

    for row in &result.rows {
        writeln!(
            w,
            "{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}{:>COL_WIDTH$}",
            row.pid, row.priority, row.burst, row.arrival, row.waiting, row.turnaround, row.completion
        )?;
    }

    writeln!(w, "{}", "-".repeat(COL_WIDTH * HEADERS.len()))?;
    let m = &result.metrics;
    writeln!(w, "Average waiting time:    {:.2}", m.avg_waiting)?;
    writeln!(w, "Average turnaround time: {:.2}", m.avg_turnaround)?;
    writeln!(w, "Throughput:              {:.2}/t", m.throughput)?;
    writeln!(w)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
