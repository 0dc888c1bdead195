//! Single-CPU scheduling simulator.
//!
//! Runs a process set through the classic dispatching disciplines — FCFS,
//! SJF, non-preemptive priority, SRTF, round robin, and preemptive
//! priority — and produces, per discipline, an execution timeline and
//! per-process completion/turnaround/waiting metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Segment`, `Timeline`,
//!   `ProcessMetrics`, `SimulationOutcome`
//! - **`disciplines`**: The six disciplines behind the `Discipline` trait
//! - **`metrics`**: Per-run KPIs (`RunKpi`)
//! - **`compare`**: Run every discipline over one workload and rank by
//!   total time
//! - **`report`**: Plain-text tables and Gantt charts
//! - **`validation`**: Input integrity checks (duplicate IDs, value ranges)
//! - **`workload`**: Seeded random process-set generation
//!
//! # Architecture
//!
//! Every discipline run is a pure function of the input: it snapshots the
//! process set into private working state and returns an independent
//! [`models::SimulationOutcome`]. Runs never share state, so disciplines
//! may be invoked in any order — or from independent workers — against the
//! same input.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod compare;
pub mod disciplines;
pub mod metrics;
pub mod models;
pub mod report;
pub mod validation;
pub mod workload;
