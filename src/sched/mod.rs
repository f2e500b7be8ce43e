//! The four scheduling disciplines.
//!
//! Every engine consumes the same immutable `&[Process]` slice and produces a
//! [`ScheduleResult`]: per-process rows in input order, a merged Gantt
//! timeline, and the three run aggregates. The engines are independent — the
//! driver can run any subset against the same slice.
//!
//! # Design decisions vs Go implementation
//!
//! | Topic | Go | Rust |
//! |---|---|---|
//! | Loop state | Loose counters (`timeSpent`, `circuitVar`, `prev`) | [`TickSim`] state machine, one stepping call per dispatch |
//! | Gantt segments | Reconstructed from counter deltas, `gantt[0].Start = 0` patch-up | Merged as recorded, no patch-ups |
//! | Priority selection | Joint `<` on burst **and** priority (no total order) | Lexicographic: priority, then remaining burst, then input index |
//! | RR sole candidate | Scan can find nothing and re-run a stale index | Previous process is re-selected when it is the only eligible one |
//! | Throughput | Divided by the engine's final loop tick | `n / max(completion)` over finalized rows |
//! | Empty input | Index panic / NaN averages | [`ScheduleError::EmptyProcessList`] |
//!
//! # Example
//! ```rust,ignore
//! let result = sched::schedule(&processes, "sjf", sched::DEFAULT_QUANTUM)?;
//! render::render_report(&mut io::stdout(), &result)?;
//! ```

pub mod error;

pub use error::ScheduleError;

use tracing::info;

use crate::process::{Process, ProcessId, ScheduleResult, ScheduleRow};
use crate::sim::metrics::aggregate;
use crate::sim::{TickSim, TimelineBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Round-Robin time quantum used when the caller does not override it.
///
/// Two ticks, matching the reference implementation.
pub const DEFAULT_QUANTUM: u64 = 2;

/// Discipline names accepted by [`schedule`], in the order the driver runs
/// them when no single discipline is requested.
pub const ALL_DISCIPLINES: [&str; 4] = ["fcfs", "sjf", "priority", "round-robin"];

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Run the named `discipline` over `processes`.
///
/// `quantum` is only consulted by `"round-robin"`.
///
/// # Errors
/// [`ScheduleError::UnknownDiscipline`] for an unrecognised name, plus
/// whatever the engine itself rejects (empty input, zero quantum).
pub fn schedule(
    processes: &[Process],
    discipline: &str,
    quantum: u64,
) -> Result<ScheduleResult, ScheduleError> {
    match discipline {
        "fcfs" => fcfs(processes),
        "sjf" => sjf(processes),
        "priority" => priority_sjf(processes),
        "round-robin" => round_robin(processes, quantum),
        other => Err(ScheduleError::UnknownDiscipline(other.to_string())),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FCFS — non-preemptive, strict input order
// ─────────────────────────────────────────────────────────────────────────────

/// First-come, first-serve.
///
/// Processes run non-preemptively in **input order** — the list is not sorted
/// by arrival, matching the reference. `service_time` accumulates issued CPU
/// ticks; each process waits `max(0, service_time − arrival)`.
///
/// Two reference quirks are preserved deliberately:
/// * a process with `arrival == 0` does not recompute its waiting time — it
///   inherits the previous iteration's value (the "sticky" carry-over);
/// * an idle gap before a late-arriving process is not represented in the
///   timeline; `service_time` keeps counting bursts only.
pub fn fcfs(processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::EmptyProcessList);
    }

    info!(process_count = processes.len(), "executing fcfs");

    let mut service_time = 0u64;
    let mut waiting = 0u64; // carried across iterations when arrival == 0
    let mut rows = Vec::with_capacity(processes.len());
    let mut timeline = TimelineBuilder::new();

    for p in processes {
        if p.arrival > 0 {
            waiting = service_time.saturating_sub(p.arrival);
        }

        let start = waiting + p.arrival;
        let completion = p.burst + p.arrival + waiting;

        rows.push(ScheduleRow {
            pid: p.id,
            priority: p.priority,
            burst: p.burst,
            arrival: p.arrival,
            waiting,
            turnaround: completion - p.arrival,
            completion,
        });

        service_time += p.burst;
        timeline.record(p.id, start, completion);
    }

    let metrics = aggregate(&rows);
    info!(
        avg_waiting = metrics.avg_waiting,
        avg_turnaround = metrics.avg_turnaround,
        throughput = metrics.throughput,
        "fcfs done"
    );

    Ok(ScheduleResult {
        title: "First-come, first-serve",
        rows,
        timeline: timeline.into_segments(),
        metrics,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// SJF — preemptive shortest-remaining-first, tick granular
// ─────────────────────────────────────────────────────────────────────────────

/// Shortest-job-first (preemptive).
///
/// Every tick, the arrived process with the smallest *remaining* burst wins
/// the CPU for exactly one tick. Ties go to the lowest input index. Ticks
/// with no arrived process are explicit idle ticks: the clock advances, no
/// segment is emitted.
pub fn sjf(processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::EmptyProcessList);
    }

    info!(process_count = processes.len(), "executing sjf");

    let mut sim = TickSim::new(processes);
    while !sim.is_done() {
        match select_shortest(&sim, processes) {
            Some(idx) => {
                sim.run(idx, 1);
            }
            None => sim.idle(1),
        }
    }
    finish_run("Shortest-job-first", "sjf", sim)
}

/// Index of the eligible process with the smallest remaining burst, or `None`
/// when nothing has arrived yet. Strict `<` keeps the lowest input index on
/// ties.
fn select_shortest(sim: &TickSim<'_>, processes: &[Process]) -> Option<usize> {
    let mut best: Option<(u64, usize)> = None;
    for idx in 0..processes.len() {
        if !sim.is_eligible(idx) {
            continue;
        }
        let remaining = sim.remaining(idx);
        if best.map_or(true, |(r, _)| remaining < r) {
            best = Some((remaining, idx));
        }
    }
    best.map(|(_, idx)| idx)
}

// ─────────────────────────────────────────────────────────────────────────────
// Priority-SJF — preemptive, priority-first
// ─────────────────────────────────────────────────────────────────────────────

/// Priority scheduling (preemptive, SJF-modulated).
///
/// Same tick loop as [`sjf`], but selection is the strict lexicographic order
/// `(priority asc, remaining burst asc, input index asc)`. The reference
/// required a candidate to beat the running minimum on burst **and** priority
/// simultaneously, which is not a total order — a process holding the lowest
/// priority could lose to nothing and still never be picked. Priority-first
/// is the documented resolution.
pub fn priority_sjf(processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::EmptyProcessList);
    }

    info!(process_count = processes.len(), "executing priority");

    let mut sim = TickSim::new(processes);
    while !sim.is_done() {
        match select_by_priority(&sim, processes) {
            Some(idx) => {
                sim.run(idx, 1);
            }
            None => sim.idle(1),
        }
    }
    finish_run("Priority", "priority", sim)
}

/// Index of the eligible process minimising `(priority, remaining burst)`,
/// lowest input index on full ties.
fn select_by_priority(sim: &TickSim<'_>, processes: &[Process]) -> Option<usize> {
    let mut best: Option<(u64, u64, usize)> = None;
    for (idx, p) in processes.iter().enumerate() {
        if !sim.is_eligible(idx) {
            continue;
        }
        let key = (p.priority, sim.remaining(idx));
        if best.map_or(true, |(prio, rem, _)| key < (prio, rem)) {
            best = Some((key.0, key.1, idx));
        }
    }
    best.map(|(_, _, idx)| idx)
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-Robin — fixed quantum, circular cursor
// ─────────────────────────────────────────────────────────────────────────────

/// Round-Robin with a fixed time quantum.
///
/// Each dispatch round scans forward from a circular cursor over input
/// positions (wrapping) for the first arrived, unfinished process other than
/// the one that ran the previous round. If the previous process is the *only*
/// eligible one it is re-selected — the reference can find no candidate in
/// that situation and re-runs a stale index, which stalls on some inputs.
/// The cursor advances one position per round regardless of which process
/// ran. A round runs for `quantum` ticks, truncated to the remaining burst.
pub fn round_robin(processes: &[Process], quantum: u64) -> Result<ScheduleResult, ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::EmptyProcessList);
    }
    if quantum == 0 {
        return Err(ScheduleError::ZeroQuantum);
    }

    info!(
        process_count = processes.len(),
        quantum, "executing round-robin"
    );

    let n = processes.len();
    let mut sim = TickSim::new(processes);
    let mut cursor = 0usize;
    let mut prev: Option<ProcessId> = None;

    while !sim.is_done() {
        match select_round_robin(&sim, processes, cursor, prev) {
            Some(idx) => {
                sim.run(idx, quantum);
                prev = Some(processes[idx].id);
                cursor = (cursor + 1) % n;
            }
            // Nothing has arrived yet: burn one idle tick and re-scan.
            None => sim.idle(1),
        }
    }
    finish_run("Round-robin", "round-robin", sim)
}

/// Circular scan for the next Round-Robin candidate.
///
/// First preference: an eligible process that is not `prev`, scanning from
/// `cursor` and wrapping. Fallback: any eligible process (necessarily `prev`
/// itself). `None` only when no process has arrived.
fn select_round_robin(
    sim: &TickSim<'_>,
    processes: &[Process],
    cursor: usize,
    prev: Option<ProcessId>,
) -> Option<usize> {
    let n = processes.len();
    let mut fallback = None;
    for offset in 0..n {
        let idx = (cursor + offset) % n;
        if !sim.is_eligible(idx) {
            continue;
        }
        if prev != Some(processes[idx].id) {
            return Some(idx);
        }
        fallback.get_or_insert(idx);
    }
    fallback
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Tear a finished [`TickSim`] down into a [`ScheduleResult`] and log the run
/// summary.
fn finish_run(
    title: &'static str,
    discipline: &str,
    sim: TickSim<'_>,
) -> Result<ScheduleResult, ScheduleError> {
    let (rows, timeline) = sim.finish();
    let metrics = aggregate(&rows);
    info!(
        discipline,
        avg_waiting = metrics.avg_waiting,
        avg_turnaround = metrics.avg_turnaround,
        throughput = metrics.throughput,
        "{discipline} done"
    );
    Ok(ScheduleResult {
        title,
        rows,
        timeline,
        metrics,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::TimelineSegment;
    use std::collections::HashMap;

    // ── Test helpers ──────────────────────────────────────────────────────────

    fn proc(id: ProcessId, burst: u64, arrival: u64) -> Process {
        Process {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    fn proc_prio(id: ProcessId, burst: u64, arrival: u64, priority: u64) -> Process {
        Process {
            id,
            arrival,
            burst,
            priority,
        }
    }

    fn seg(pid: ProcessId, start: u64, stop: u64) -> TimelineSegment {
        TimelineSegment { pid, start, stop }
    }

    /// Ticks each process held the CPU for, summed over all its segments.
    fn ticks_by_pid(result: &ScheduleResult) -> HashMap<ProcessId, u64> {
        let mut by_pid = HashMap::new();
        for s in &result.timeline {
            *by_pid.entry(s.pid).or_insert(0) += s.len();
        }
        by_pid
    }

    // ── FCFS ──────────────────────────────────────────────────────────────────

    #[test]
    fn fcfs_back_to_back_arrivals() {
        // §spec example: P2 arrives exactly when P1 finishes
        let procs = [proc(1, 5, 0), proc(2, 3, 5)];
        let result = fcfs(&procs).unwrap();

        assert_eq!(result.rows[0].waiting, 0);
        assert_eq!(result.rows[1].waiting, 0);
        assert_eq!(result.rows[0].turnaround, 5);
        assert_eq!(result.rows[1].turnaround, 3);
        assert_eq!(result.rows[0].completion, 5);
        assert_eq!(result.rows[1].completion, 8);
        assert_eq!(result.timeline, vec![seg(1, 0, 5), seg(2, 5, 8)]);
    }

    #[test]
    fn fcfs_queued_processes_accumulate_waiting() {
        let procs = [proc(1, 4, 0), proc(2, 2, 2), proc(3, 3, 2)];
        let result = fcfs(&procs).unwrap();

        // P2 waits for P1's 4 ticks minus its own arrival at 2
        assert_eq!(result.rows[1].waiting, 2);
        assert_eq!(result.rows[1].completion, 6);
        // P3 waits for both: service 6 − arrival 2
        assert_eq!(result.rows[2].waiting, 4);
        assert_eq!(result.rows[2].completion, 9);
    }

    #[test]
    fn fcfs_zero_arrival_carries_previous_waiting_time() {
        // Reference quirk: arrival == 0 skips the waiting-time recompute, so
        // P3 inherits P2's waiting time even though it queued behind both.
        let procs = [proc(1, 4, 0), proc(2, 2, 2), proc(3, 3, 0)];
        let result = fcfs(&procs).unwrap();

        assert_eq!(result.rows[1].waiting, 2);
        assert_eq!(result.rows[2].waiting, 2, "sticky carry-over from P2");
        assert_eq!(result.rows[2].completion, 5);
    }

    #[test]
    fn fcfs_runs_in_input_order_not_arrival_order() {
        // P1 arrives later but is first in the input, so it runs first.
        let procs = [proc(1, 3, 2), proc(2, 2, 0)];
        let result = fcfs(&procs).unwrap();
        assert_eq!(result.timeline[0].pid, 1);
        assert_eq!(result.rows[0].waiting, 0);
    }

    #[test]
    fn fcfs_averages_match_row_sums() {
        let procs = [proc(1, 5, 0), proc(2, 3, 5), proc(3, 4, 5)];
        let result = fcfs(&procs).unwrap();
        let n = result.rows.len() as f64;
        let wait_sum: u64 = result.rows.iter().map(|r| r.waiting).sum();
        let turn_sum: u64 = result.rows.iter().map(|r| r.turnaround).sum();
        assert_eq!(result.metrics.avg_waiting, wait_sum as f64 / n);
        assert_eq!(result.metrics.avg_turnaround, turn_sum as f64 / n);
    }

    // ── SJF ───────────────────────────────────────────────────────────────────

    #[test]
    fn sjf_prefers_shorter_remaining_burst_over_arrival_order() {
        // §spec example: P2 and P3 both overtake the long-running P1.
        let procs = [proc(1, 6, 0), proc(2, 2, 1), proc(3, 4, 3)];
        let result = sjf(&procs).unwrap();

        assert_eq!(result.rows[0].completion, 12);
        assert_eq!(result.rows[1].completion, 3);
        assert_eq!(result.rows[2].completion, 7);
        assert_eq!(
            result.timeline,
            vec![seg(1, 0, 1), seg(2, 1, 3), seg(3, 3, 7), seg(1, 7, 12)]
        );
        assert_eq!(result.metrics.avg_waiting, 2.0);
        assert_eq!(result.metrics.avg_turnaround, 6.0);
        assert_eq!(result.metrics.throughput, 0.25);
    }

    #[test]
    fn sjf_ties_break_to_lowest_input_index() {
        let procs = [proc(1, 3, 0), proc(2, 3, 0)];
        let result = sjf(&procs).unwrap();
        // Equal remaining bursts: P1 wins every arbitration until it finishes.
        assert_eq!(result.rows[0].completion, 3);
        assert_eq!(result.rows[1].completion, 6);
        assert_eq!(result.timeline, vec![seg(1, 0, 3), seg(2, 3, 6)]);
    }

    #[test]
    fn sjf_idles_until_first_arrival() {
        let procs = [proc(1, 2, 3)];
        let result = sjf(&procs).unwrap();
        assert_eq!(result.timeline, vec![seg(1, 3, 5)]);
        assert_eq!(result.rows[0].waiting, 0);
        assert_eq!(result.rows[0].completion, 5);
    }

    #[test]
    fn sjf_segments_merge_while_same_process_keeps_winning() {
        let procs = [proc(1, 4, 0), proc(2, 9, 1)];
        let result = sjf(&procs).unwrap();
        // P1 stays shortest the whole way; its four tick wins are one segment.
        assert_eq!(result.timeline, vec![seg(1, 0, 4), seg(2, 4, 13)]);
    }

    // ── Priority-SJF ──────────────────────────────────────────────────────────

    #[test]
    fn priority_beats_shorter_burst() {
        // P2 has the shorter burst but the worse (higher) priority value.
        let procs = [proc_prio(1, 4, 0, 2), proc_prio(2, 1, 0, 5)];
        let result = priority_sjf(&procs).unwrap();
        assert_eq!(result.rows[0].completion, 4);
        assert_eq!(result.rows[1].completion, 5);
        assert_eq!(result.timeline, vec![seg(1, 0, 4), seg(2, 4, 5)]);
    }

    #[test]
    fn equal_priority_falls_back_to_shortest_remaining() {
        let procs = [proc_prio(1, 4, 0, 1), proc_prio(2, 2, 0, 1)];
        let result = priority_sjf(&procs).unwrap();
        assert_eq!(result.rows[1].completion, 2);
        assert_eq!(result.rows[0].completion, 6);
    }

    #[test]
    fn full_tie_falls_back_to_input_index() {
        let procs = [proc_prio(1, 2, 0, 1), proc_prio(2, 2, 0, 1)];
        let result = priority_sjf(&procs).unwrap();
        assert_eq!(result.rows[0].completion, 2);
        assert_eq!(result.rows[1].completion, 4);
    }

    #[test]
    fn higher_priority_arrival_preempts_running_process() {
        let procs = [proc_prio(1, 5, 0, 3), proc_prio(2, 2, 2, 1)];
        let result = priority_sjf(&procs).unwrap();

        assert_eq!(
            result.timeline,
            vec![seg(1, 0, 2), seg(2, 2, 4), seg(1, 4, 7)]
        );
        assert_eq!(result.rows[0].completion, 7);
        assert_eq!(result.rows[0].waiting, 2);
        assert_eq!(result.rows[1].completion, 4);
        assert_eq!(result.rows[1].waiting, 0);
    }

    // ── Round-Robin ───────────────────────────────────────────────────────────

    #[test]
    fn round_robin_alternates_on_equal_bursts() {
        let procs = [proc(1, 4, 0), proc(2, 4, 0)];
        let result = round_robin(&procs, 2).unwrap();

        assert_eq!(
            result.timeline,
            vec![seg(1, 0, 2), seg(2, 2, 4), seg(1, 4, 6), seg(2, 6, 8)]
        );
        assert_eq!(result.rows[0].completion, 6);
        assert_eq!(result.rows[1].completion, 8);
        assert_eq!(result.rows[0].waiting, 2);
        assert_eq!(result.rows[1].waiting, 4);
    }

    #[test]
    fn round_robin_short_final_run_uses_actual_elapsed_time() {
        let procs = [proc(1, 3, 0), proc(2, 2, 0)];
        let result = round_robin(&procs, 2).unwrap();

        // P1's last round is a single tick, not a full quantum.
        assert_eq!(
            result.timeline,
            vec![seg(1, 0, 2), seg(2, 2, 4), seg(1, 4, 5)]
        );
        assert_eq!(result.rows[0].completion, 5);
        assert_eq!(result.rows[1].completion, 4);
    }

    #[test]
    fn round_robin_reselects_sole_remaining_process() {
        // With one process the "not the previous process" rule would stall
        // forever; the sole survivor is re-selected and the contiguous rounds
        // merge into one segment.
        let procs = [proc(1, 5, 0)];
        let result = round_robin(&procs, 2).unwrap();
        assert_eq!(result.timeline, vec![seg(1, 0, 5)]);
        assert_eq!(result.rows[0].completion, 5);
        assert_eq!(result.rows[0].waiting, 0);
    }

    #[test]
    fn round_robin_reselects_previous_until_next_arrival() {
        let procs = [proc(1, 4, 0), proc(2, 2, 3)];
        let result = round_robin(&procs, 2).unwrap();

        // At tick 2 P2 has not arrived, so P1 runs a second quantum.
        assert_eq!(result.timeline, vec![seg(1, 0, 4), seg(2, 4, 6)]);
        assert_eq!(result.rows[0].completion, 4);
        assert_eq!(result.rows[1].completion, 6);
        assert_eq!(result.rows[1].waiting, 1);
    }

    #[test]
    fn round_robin_idles_until_first_arrival() {
        let procs = [proc(1, 2, 5)];
        let result = round_robin(&procs, 2).unwrap();
        assert_eq!(result.timeline, vec![seg(1, 5, 7)]);
        assert_eq!(result.rows[0].waiting, 0);
    }

    #[test]
    fn round_robin_rejects_zero_quantum() {
        let procs = [proc(1, 2, 0)];
        assert_eq!(
            round_robin(&procs, 0).unwrap_err(),
            ScheduleError::ZeroQuantum
        );
    }

    #[test]
    fn round_robin_larger_quantum_degrades_to_fcfs_order() {
        let procs = [proc(1, 3, 0), proc(2, 2, 0)];
        let result = round_robin(&procs, 10).unwrap();
        assert_eq!(result.timeline, vec![seg(1, 0, 3), seg(2, 3, 5)]);
    }

    // ── Cross-engine properties ───────────────────────────────────────────────

    #[test]
    fn every_engine_emits_one_row_per_process_in_input_order() {
        let procs = [proc(3, 4, 0), proc(1, 2, 1), proc(2, 3, 2)];
        for discipline in ALL_DISCIPLINES {
            let result = schedule(&procs, discipline, DEFAULT_QUANTUM).unwrap();
            let pids: Vec<ProcessId> = result.rows.iter().map(|r| r.pid).collect();
            assert_eq!(pids, vec![3, 1, 2], "{discipline} broke row ordering");
        }
    }

    #[test]
    fn timeline_ticks_equal_burst_per_process() {
        let procs = [proc(1, 6, 0), proc(2, 2, 1), proc(3, 4, 3), proc(4, 3, 4)];
        for discipline in ALL_DISCIPLINES {
            let result = schedule(&procs, discipline, DEFAULT_QUANTUM).unwrap();
            let by_pid = ticks_by_pid(&result);
            for p in &procs {
                assert_eq!(
                    by_pid.get(&p.id).copied().unwrap_or(0),
                    p.burst,
                    "{discipline} lost ticks for process {}",
                    p.id
                );
            }
        }
    }

    #[test]
    fn engines_are_idempotent() {
        let procs = [proc(1, 6, 0), proc(2, 2, 1), proc(3, 4, 3)];
        for discipline in ALL_DISCIPLINES {
            let first = schedule(&procs, discipline, DEFAULT_QUANTUM).unwrap();
            let second = schedule(&procs, discipline, DEFAULT_QUANTUM).unwrap();
            assert_eq!(first, second, "{discipline} is not deterministic");
        }
    }

    #[test]
    fn row_timing_invariants_hold_for_preemptive_engines() {
        // FCFS is excluded: its sticky waiting-time quirk intentionally
        // violates the waiting identity for zero-arrival processes.
        let procs = [
            proc_prio(1, 5, 0, 2),
            proc_prio(2, 3, 1, 1),
            proc_prio(3, 4, 2, 3),
        ];
        for discipline in ["sjf", "priority", "round-robin"] {
            let result = schedule(&procs, discipline, DEFAULT_QUANTUM).unwrap();
            for row in &result.rows {
                assert_eq!(row.turnaround, row.completion - row.arrival);
                assert_eq!(row.waiting, row.completion - row.arrival - row.burst);
            }
        }
    }

    #[test]
    fn throughput_divides_count_by_latest_completion() {
        let procs = [proc(1, 6, 0), proc(2, 2, 1)];
        for discipline in ALL_DISCIPLINES {
            let result = schedule(&procs, discipline, DEFAULT_QUANTUM).unwrap();
            let expected = result.rows.len() as f64 / result.last_completion() as f64;
            assert_eq!(
                result.metrics.throughput, expected,
                "{discipline} throughput mismatch"
            );
        }
    }

    // ── Dispatch / preconditions ──────────────────────────────────────────────

    #[test]
    fn empty_process_list_is_rejected_by_every_engine() {
        for discipline in ALL_DISCIPLINES {
            assert_eq!(
                schedule(&[], discipline, DEFAULT_QUANTUM).unwrap_err(),
                ScheduleError::EmptyProcessList,
                "{discipline} accepted empty input"
            );
        }
    }

    #[test]
    fn unknown_discipline_is_rejected() {
        let procs = [proc(1, 2, 0)];
        let err = schedule(&procs, "lottery", DEFAULT_QUANTUM).unwrap_err();
        assert_eq!(err, ScheduleError::UnknownDiscipline("lottery".to_string()));
    }

    #[test]
    fn titles_match_reference_banners() {
        let procs = [proc(1, 2, 0)];
        let titles: Vec<&str> = ALL_DISCIPLINES
            .iter()
            .map(|d| schedule(&procs, d, DEFAULT_QUANTUM).unwrap().title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "First-come, first-serve",
                "Shortest-job-first",
                "Priority",
                "Round-robin"
            ]
        );
    }
}
