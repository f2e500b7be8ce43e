/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the scheduling engines.
//!
//! The simulation itself is total: given a non-empty, well-typed process
//! list every discipline runs to completion deterministically. What remains
//! are precondition failures, and each gets its own variant so the driver can
//! report exactly what was wrong instead of dividing by zero into NaN output
//! the way the reference implementation does.

use thiserror::Error;

/// Top-level error returned by the engine entry points in [`crate::sched`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// An engine was invoked with an empty process list. Averages and
    /// throughput are undefined for zero processes, so this is rejected
    /// explicitly rather than propagated as NaN.
    #[error("no processes provided — process list is empty")]
    EmptyProcessList,

    /// The discipline name passed to [`crate::sched::schedule`] is not
    /// recognised.
    #[error("unknown scheduling discipline: '{0}' (valid: fcfs, sjf, priority, round-robin)")]
    UnknownDiscipline(String),

    /// Round-Robin was asked to run with a zero-tick quantum, which would
    /// never consume any burst.
    #[error("round-robin quantum must be at least one tick")]
    ZeroQuantum,
}
