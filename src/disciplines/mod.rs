//! Scheduling disciplines.
//!
//! Each discipline is a pure simulation procedure: it copies the input
//! process set into private working state, replays execution from t=0, and
//! returns a [`SimulationOutcome`] with per-process metrics and a timeline.
//! Runs are independent — invoking several disciplines over the same input
//! never shares or mutates state between them.
//!
//! # Disciplines
//!
//! | Discipline | Kind | Selection key |
//! |-----------|------|---------------|
//! | [`Fcfs`] | non-preemptive | arrival time |
//! | [`Sjf`] | non-preemptive | burst time |
//! | [`PriorityNonPreemptive`] | non-preemptive | priority |
//! | [`Srtf`] | preemptive, unit-step | remaining time |
//! | [`PriorityPreemptive`] | preemptive, unit-step | priority |
//! | [`RoundRobin`] | preemptive, quantum slices | FIFO order |
//!
//! Ties are broken by arrival time, then input order, so every run is
//! deterministic.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::disciplines::{Discipline, Sjf};
//! use cpu_sched::models::Process;
//!
//! let processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 2)];
//! let outcome = Sjf.run(&processes);
//! assert_eq!(outcome.timeline.segments[0].process_id, 2);
//! ```
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

mod nonpreemptive;
mod preemptive;
mod round_robin;

pub use nonpreemptive::{Fcfs, PriorityNonPreemptive, Sjf};
pub use preemptive::{PriorityPreemptive, Srtf};
pub use round_robin::RoundRobin;

use std::fmt::Debug;

use crate::models::{Process, SimulationOutcome};

/// A scheduling discipline.
pub trait Discipline: Send + Sync + Debug {
    /// Short discipline name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Simulates this discipline over a copy of the given process set.
    ///
    /// The input is treated as validated (non-negative arrivals, positive
    /// bursts) and is never mutated.
    fn run(&self, processes: &[Process]) -> SimulationOutcome;

    /// Discipline description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Returns all six disciplines, with the given quantum for round robin.
pub fn all(quantum: i64) -> Vec<Box<dyn Discipline>> {
    vec![
        Box::new(Fcfs),
        Box::new(Sjf),
        Box::new(PriorityNonPreemptive),
        Box::new(Srtf),
        Box::new(RoundRobin::new(quantum)),
        Box::new(PriorityPreemptive),
    ]
}

/// Per-run execution state for one process.
///
/// The working copy a run owns: the input descriptor plus the remaining
/// burst, initialized to the full burst at snapshot time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WorkItem {
    pub process: Process,
    pub remaining: i64,
}

/// Builds the private working copy for one run.
pub(crate) fn snapshot(processes: &[Process]) -> Vec<WorkItem> {
    processes
        .iter()
        .map(|p| WorkItem {
            process: *p,
            remaining: p.burst_time,
        })
        .collect()
}
