//! Simulation result model.
//!
//! One discipline run produces a [`SimulationOutcome`]: the process set
//! annotated with completion metrics, plus the execution timeline. Outcomes
//! from different runs are independent values and share no state.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Timeline};

/// Completion metrics for one process in one discipline run.
///
/// Echoes the input descriptor fields so results remain id-addressable
/// without joining back to the input set.
///
/// # Invariants
/// `completion_time = arrival_time + waiting_time + burst_time` and
/// `turnaround_time = completion_time - arrival_time = waiting_time +
/// burst_time`. Both hold by construction: [`ProcessMetrics::from_completion`]
/// is the only way metrics are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub process_id: ProcessId,
    /// Arrival time of the process.
    pub arrival_time: i64,
    /// Burst time of the process.
    pub burst_time: i64,
    /// Priority of the process.
    pub priority: i32,
    /// Time unit at which the process finished.
    pub completion_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Turnaround minus burst (time spent eligible but not executing).
    pub waiting_time: i64,
}

impl ProcessMetrics {
    /// Derives the metrics record for a process that finished at
    /// `completion_time`.
    pub fn from_completion(process: &Process, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            process_id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }
}

/// The result of running one discipline over one process set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Name of the discipline that produced this outcome.
    pub discipline: String,
    /// Per-process metrics, sorted by process id.
    pub metrics: Vec<ProcessMetrics>,
    /// Execution timeline.
    pub timeline: Timeline,
}

impl SimulationOutcome {
    /// Creates an outcome, sorting metrics by process id.
    pub fn new(
        discipline: impl Into<String>,
        mut metrics: Vec<ProcessMetrics>,
        timeline: Timeline,
    ) -> Self {
        metrics.sort_by_key(|m| m.process_id);
        Self {
            discipline: discipline.into(),
            metrics,
            timeline,
        }
    }

    /// Finds the metrics for a given process.
    pub fn metrics_for(&self, process_id: ProcessId) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.process_id == process_id)
    }

    /// Sum of turnaround and waiting time over all processes.
    ///
    /// The aggregate used to rank disciplines (lower is better).
    pub fn total_time(&self) -> i64 {
        self.metrics
            .iter()
            .map(|m| m.turnaround_time + m.waiting_time)
            .sum()
    }

    /// Latest completion time, or 0 for an empty run.
    pub fn makespan(&self) -> i64 {
        self.metrics
            .iter()
            .map(|m| m.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Number of processes in this run.
    pub fn process_count(&self) -> usize {
        self.metrics.len()
    }
}
