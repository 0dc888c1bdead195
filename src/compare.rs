//! Discipline comparison.
//!
//! Runs every discipline once over the same input — each run on its own
//! private snapshot — and ranks the results by total time (turnaround +
//! waiting summed over all processes). All disciplines tied for the
//! minimum are kept.

use crate::disciplines;
use crate::metrics::RunKpi;
use crate::models::{Process, SimulationOutcome};

/// One discipline's result within a comparison.
#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    /// The run result.
    pub outcome: SimulationOutcome,
    /// KPIs derived from the run.
    pub kpi: RunKpi,
}

/// Results of running all disciplines over one process set.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// One entry per discipline, in invocation order.
    pub entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Entries tied for the minimum total time (lower is better).
    ///
    /// Empty only when the comparison itself is empty.
    pub fn best(&self) -> Vec<&ComparisonEntry> {
        let min = match self.entries.iter().map(|e| e.kpi.total_time).min() {
            Some(min) => min,
            None => return Vec::new(),
        };
        self.entries
            .iter()
            .filter(|e| e.kpi.total_time == min)
            .collect()
    }

    /// Finds the entry for a discipline by name.
    pub fn entry(&self, name: &str) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.outcome.discipline == name)
    }
}

/// Runs all six disciplines over the given process set.
///
/// Each discipline receives its own working copy; the input is never
/// mutated and runs do not affect one another.
///
/// # Example
///
/// ```
/// use cpu_sched::compare::run_all;
/// use cpu_sched::models::Process;
///
/// let processes = vec![
///     Process::new(1, 0, 5).with_priority(2),
///     Process::new(2, 1, 3).with_priority(1),
///     Process::new(3, 2, 1).with_priority(3),
/// ];
/// let comparison = run_all(&processes, 2);
/// assert_eq!(comparison.entries.len(), 6);
/// assert_eq!(comparison.best()[0].outcome.discipline, "SRTF");
/// ```
pub fn run_all(processes: &[Process], quantum: i64) -> Comparison {
    let entries = disciplines::all(quantum)
        .iter()
        .map(|d| {
            let outcome = d.run(processes);
            let kpi = RunKpi::calculate(&outcome);
            ComparisonEntry { outcome, kpi }
        })
        .collect();
    Comparison { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disciplines::{Discipline, Fcfs, Srtf};
    use crate::workload::WorkloadGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5).with_priority(2),
            Process::new(2, 1, 3).with_priority(1),
            Process::new(3, 2, 1).with_priority(3),
        ]
    }

    #[test]
    fn test_run_all_covers_every_discipline() {
        let comparison = run_all(&sample_processes(), 2);
        let names: Vec<_> = comparison
            .entries
            .iter()
            .map(|e| e.outcome.discipline.as_str())
            .collect();
        assert_eq!(names, vec!["FCFS", "SJF", "PRIORITY", "SRTF", "RR", "PRIORITY-P"]);
    }

    #[test]
    fn test_best_is_srtf_on_sample() {
        let comparison = run_all(&sample_processes(), 2);
        assert_eq!(comparison.entry("FCFS").unwrap().kpi.total_time, 29);
        assert_eq!(comparison.entry("SJF").unwrap().kpi.total_time, 25);
        assert_eq!(comparison.entry("PRIORITY").unwrap().kpi.total_time, 29);
        assert_eq!(comparison.entry("SRTF").unwrap().kpi.total_time, 19);
        assert_eq!(comparison.entry("RR").unwrap().kpi.total_time, 29);
        assert_eq!(comparison.entry("PRIORITY-P").unwrap().kpi.total_time, 27);

        let best = comparison.best();
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].outcome.discipline, "SRTF");
    }

    #[test]
    fn test_best_keeps_all_ties() {
        // A single process completes identically under every discipline.
        let comparison = run_all(&[Process::new(1, 0, 4)], 2);
        assert_eq!(comparison.best().len(), 6);
    }

    #[test]
    fn test_runs_are_isolated() {
        // Interleaving runs over the same input changes nothing: a later
        // run sees the original arrivals and bursts, not another run's
        // leftovers.
        let processes = sample_processes();
        let first = Fcfs.run(&processes);
        let _ = Srtf.run(&processes);
        let second = Fcfs.run(&processes);
        assert_eq!(first, second);
    }

    #[test]
    fn test_invariants_on_random_workloads() {
        let mut rng = StdRng::seed_from_u64(7);
        let generator = WorkloadGenerator::new(12)
            .with_max_arrival(20)
            .with_max_burst(8)
            .with_priority_levels(4);

        for _ in 0..5 {
            let processes = generator.generate(&mut rng);
            let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();
            for entry in run_all(&processes, 3).entries {
                let outcome = &entry.outcome;
                assert_eq!(outcome.process_count(), processes.len());
                assert_eq!(outcome.timeline.busy_time(), total_burst);
                assert_eq!(outcome.timeline.span(), outcome.makespan());
                for m in &outcome.metrics {
                    assert_eq!(m.turnaround_time, m.completion_time - m.arrival_time);
                    assert_eq!(m.waiting_time, m.turnaround_time - m.burst_time);
                    assert!(m.waiting_time >= 0);
                    assert_eq!(outcome.timeline.busy_time_for(m.process_id), m.burst_time);
                }
            }
        }
    }

    #[test]
    fn test_empty_comparison_best() {
        let comparison = Comparison { entries: Vec::new() };
        assert!(comparison.best().is_empty());
    }
}
