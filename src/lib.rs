/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Metronome – tick-driven CPU-scheduling simulator (Rust port)
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── process.rs      – process records and schedule result types
//! ├── loader/         – CSV process list loading
//! ├── sim/            – tick simulation state machine + metrics
//! ├── sched/          – the four scheduling disciplines
//! └── render/         – title banner, Gantt strip, schedule table
//! ```

pub mod loader;
pub mod process;
pub mod render;
pub mod sched;
pub mod sim;
