//! Run quality metrics (KPIs).
//!
//! Computes standard scheduling performance indicators from one
//! discipline's [`SimulationOutcome`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Time | Sum of turnaround + waiting over all processes |
//! | Avg Waiting | Mean waiting time |
//! | Avg Turnaround | Mean turnaround time |
//! | Makespan | Latest completion time |
//! | CPU Utilization | Busy time / makespan |
//!
//! Total time is the aggregate used to rank disciplines (lower is better).
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use crate::models::SimulationOutcome;

/// Performance indicators for one discipline run.
#[derive(Debug, Clone)]
pub struct RunKpi {
    /// Sum of turnaround and waiting time over all processes.
    pub total_time: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Fraction of the makespan the CPU spent executing (0.0..=1.0).
    ///
    /// Below 1.0 exactly when the timeline has idle gaps.
    pub cpu_utilization: f64,
}

impl RunKpi {
    /// Computes KPIs from a completed run.
    pub fn calculate(outcome: &SimulationOutcome) -> Self {
        let count = outcome.process_count();
        let makespan = outcome.makespan();

        let (avg_waiting_time, avg_turnaround_time) = if count == 0 {
            (0.0, 0.0)
        } else {
            let wait: i64 = outcome.metrics.iter().map(|m| m.waiting_time).sum();
            let turnaround: i64 = outcome.metrics.iter().map(|m| m.turnaround_time).sum();
            (wait as f64 / count as f64, turnaround as f64 / count as f64)
        };

        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            outcome.timeline.busy_time() as f64 / makespan as f64
        };

        Self {
            total_time: outcome.total_time(),
            avg_waiting_time,
            avg_turnaround_time,
            makespan,
            cpu_utilization,
        }
    }
}
