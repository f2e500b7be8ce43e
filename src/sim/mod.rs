//! Tick-granular simulation state shared by the preemptive engines.
//!
//! The Go reference threads loose counters (`time`, `timeSpent`, `circuitVar`,
//! `prev`) through monolithic loops and reconstructs Gantt segments from their
//! differences after the fact. Here the per-run state lives in one
//! [`TickSim`] value with two stepping operations:
//!
//! * [`TickSim::run`] — dispatch one process for up to N ticks,
//! * [`TickSim::idle`] — let the clock advance with nothing eligible,
//!
//! and the CPU is always in exactly one [`CpuState`]. Timeline segments are
//! merged *as they are recorded* (same process, contiguous ticks), so no
//! post-hoc `gantt[0].Start = 0` patch-ups are needed.

pub mod metrics;

use tracing::debug;

use crate::process::{Process, ProcessId, ScheduleRow, TimelineSegment};

// ── CPU state ─────────────────────────────────────────────────────────────────

/// What the simulated CPU is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuState {
    /// No eligible process; the clock still advances.
    Idle,
    /// The given process ran the most recent tick.
    Running(ProcessId),
    /// Every process has completed.
    Done,
}

// ── Timeline builder ──────────────────────────────────────────────────────────

/// Accumulates Gantt segments, merging a new run into the previous segment
/// when it continues the same process with no gap.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    segments: Vec<TimelineSegment>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `pid` held the CPU for `[start, stop)`.
    ///
    /// Merges into the last segment iff it is the same process and
    /// `last.stop == start`. An idle gap or a process change starts a fresh
    /// segment even when the same process runs on both sides of the gap.
    pub fn record(&mut self, pid: ProcessId, start: u64, stop: u64) {
        if stop <= start {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.pid == pid && last.stop == start {
                last.stop = stop;
                return;
            }
        }
        self.segments.push(TimelineSegment { pid, start, stop });
    }

    pub fn into_segments(self) -> Vec<TimelineSegment> {
        self.segments
    }
}

// ── TickSim ───────────────────────────────────────────────────────────────────

/// Per-run simulation state: the working remaining-burst table, the clock,
/// finalized rows and the timeline under construction.
///
/// The input slice is never mutated; `remaining` is the engine's private
/// working copy of each burst. Rows are slotted by input index so the final
/// row list comes out in input order no matter the completion order.
#[derive(Debug)]
pub struct TickSim<'a> {
    procs: &'a [Process],
    remaining: Vec<u64>,
    clock: u64,
    state: CpuState,
    completed: usize,
    rows: Vec<Option<ScheduleRow>>,
    timeline: TimelineBuilder,
}

impl<'a> TickSim<'a> {
    /// Start a fresh simulation at tick 0 with full bursts remaining.
    pub fn new(procs: &'a [Process]) -> Self {
        Self {
            procs,
            remaining: procs.iter().map(|p| p.burst).collect(),
            clock: 0,
            state: CpuState::Idle,
            completed: 0,
            rows: vec![None; procs.len()],
            timeline: TimelineBuilder::new(),
        }
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn state(&self) -> CpuState {
        self.state
    }

    /// Remaining burst ticks for the process at input index `idx`.
    pub fn remaining(&self, idx: usize) -> u64 {
        self.remaining[idx]
    }

    /// A process is eligible when it has arrived and still has work left.
    pub fn is_eligible(&self, idx: usize) -> bool {
        self.procs[idx].arrival <= self.clock && self.remaining[idx] > 0
    }

    pub fn is_done(&self) -> bool {
        self.completed == self.procs.len()
    }

    /// Dispatch the process at input index `idx` for up to `ticks` ticks.
    ///
    /// The run is truncated to the remaining burst (Round-Robin's short final
    /// run falls out of this for free). On the tick the burst reaches zero the
    /// row is finalized with `completion = clock` after the run:
    /// `waiting = completion − arrival − burst`,
    /// `turnaround = completion − arrival`.
    ///
    /// Returns `true` if the process completed during this run.
    pub fn run(&mut self, idx: usize, ticks: u64) -> bool {
        let proc = &self.procs[idx];
        let slice = ticks.min(self.remaining[idx]);
        debug_assert!(slice > 0, "dispatching a finished or zero-tick run");

        let start = self.clock;
        self.clock += slice;
        self.remaining[idx] -= slice;
        self.timeline.record(proc.id, start, self.clock);

        debug!(
            pid = proc.id,
            start,
            stop = self.clock,
            remaining = self.remaining[idx],
            "dispatch"
        );

        if self.remaining[idx] > 0 {
            self.state = CpuState::Running(proc.id);
            return false;
        }

        let completion = self.clock;
        self.rows[idx] = Some(ScheduleRow {
            pid: proc.id,
            priority: proc.priority,
            burst: proc.burst,
            arrival: proc.arrival,
            waiting: completion - proc.arrival - proc.burst,
            turnaround: completion - proc.arrival,
            completion,
        });
        self.completed += 1;
        self.state = if self.is_done() {
            CpuState::Done
        } else {
            CpuState::Running(proc.id)
        };
        true
    }

    /// Advance the clock with no process on the CPU.
    ///
    /// The reference leaves this case undefined (its selection loop silently
    /// decrements a stale index); here an idle tick is an explicit no-op that
    /// emits no segment.
    pub fn idle(&mut self, ticks: u64) {
        self.clock += ticks;
        if !self.is_done() {
            self.state = CpuState::Idle;
        }
    }

    /// Tear down a finished simulation into its outputs: rows in input order
    /// plus the merged timeline.
    pub fn finish(self) -> (Vec<ScheduleRow>, Vec<TimelineSegment>) {
        debug_assert!(self.is_done(), "finish() called before all rows exist");
        let rows = self.rows.into_iter().flatten().collect();
        (rows, self.timeline.into_segments())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
