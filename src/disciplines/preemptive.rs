//! Preemptive disciplines: SRTF and preemptive priority scheduling.
//!
//! # Algorithm
//!
//! Both share one unit-step simulation and differ only in the selection
//! key. At every time unit, among processes that have arrived and still
//! have work left, the one with the smallest (key, arrival time, input
//! order) executes for exactly one unit; the decision is re-evaluated on
//! the next unit, so a better-keyed arrival preempts immediately.
//!
//! Consecutive unit steps of the same process are coalesced into one
//! timeline segment; a new segment starts exactly when the selected
//! process changes.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use crate::models::{Process, ProcessMetrics, SimulationOutcome, Timeline};

use super::{snapshot, Discipline, WorkItem};

/// Shortest Remaining Time First.
///
/// The preemptive form of SJF: a new arrival with less remaining work than
/// the running process takes the CPU at the next time unit.
#[derive(Debug, Clone, Copy)]
pub struct Srtf;

impl Discipline for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn run(&self, processes: &[Process]) -> SimulationOutcome {
        simulate_unit_steps(self.name(), processes, |item| item.remaining)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Priority scheduling (preemptive).
///
/// The running process is preempted as soon as a process with a lower
/// priority value (higher priority) becomes eligible.
#[derive(Debug, Clone, Copy)]
pub struct PriorityPreemptive;

impl Discipline for PriorityPreemptive {
    fn name(&self) -> &'static str {
        "PRIORITY-P"
    }

    fn run(&self, processes: &[Process]) -> SimulationOutcome {
        simulate_unit_steps(self.name(), processes, |item| i64::from(item.process.priority))
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling (Preemptive)"
    }
}

/// Shared unit-step loop for the preemptive disciplines.
///
/// The key is re-read every step, so it may depend on mutable run state
/// (SRTF keys on the remaining time itself).
fn simulate_unit_steps(
    name: &str,
    processes: &[Process],
    key: impl Fn(&WorkItem) -> i64,
) -> SimulationOutcome {
    let mut items = snapshot(processes);
    let mut timeline = Timeline::new();
    let mut metrics = Vec::with_capacity(items.len());
    let mut now = 0;

    while metrics.len() < items.len() {
        let pick = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.remaining > 0 && item.process.arrival_time <= now)
            .min_by_key(|&(order, item)| (key(item), item.process.arrival_time, order))
            .map(|(order, _)| order);

        match pick {
            Some(i) => {
                timeline.record(items[i].process.id, now, 1);
                items[i].remaining -= 1;
                now += 1;
                if items[i].remaining == 0 {
                    metrics.push(ProcessMetrics::from_completion(&items[i].process, now));
                }
            }
            None => {
                // Every arrived process is done; jump to the next arrival.
                let next_arrival = items
                    .iter()
                    .filter(|item| item.remaining > 0)
                    .map(|item| item.process.arrival_time)
                    .min();
                match next_arrival {
                    Some(t) => now = t,
                    None => break,
                }
            }
        }
    }

    SimulationOutcome::new(name, metrics, timeline)
}
