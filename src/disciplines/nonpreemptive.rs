//! Non-preemptive disciplines: FCFS, SJF, and priority scheduling.
//!
//! # Algorithm
//!
//! All three share one single-pick-per-dispatch loop and differ only in the
//! selection key:
//!
//! 1. Among processes that have arrived, pick the one with the smallest
//!    (key, arrival time, input order).
//! 2. Run it to completion as one contiguous segment and fill its metrics.
//! 3. If nothing has arrived yet, jump the clock to the next arrival.
//!
//! A dispatched process is never interrupted: a better-keyed process
//! arriving mid-execution waits for the next dispatch decision.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use crate::models::{Process, ProcessMetrics, Segment, SimulationOutcome, Timeline};

use super::Discipline;

/// First Come First Served.
///
/// Dispatches in ascending arrival order, ties broken by input order.
///
/// # Reference
/// The baseline discipline; optimal for nothing, starvation-free for
/// everything.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl Discipline for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[Process]) -> SimulationOutcome {
        dispatch_by_key(self.name(), processes, |p| p.arrival_time)
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest Job First (non-preemptive).
///
/// At each dispatch decision picks the eligible process with the smallest
/// burst time. Minimizes average waiting time among non-preemptive
/// disciplines when all arrivals are known.
///
/// # Reference
/// Smith (1956), optimal for mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl Discipline for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &[Process]) -> SimulationOutcome {
        dispatch_by_key(self.name(), processes, |p| p.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Priority scheduling (non-preemptive).
///
/// At each dispatch decision picks the eligible process with the lowest
/// priority value (lower = higher priority). A running process is never
/// preempted by a higher-priority arrival.
#[derive(Debug, Clone, Copy)]
pub struct PriorityNonPreemptive;

impl Discipline for PriorityNonPreemptive {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn run(&self, processes: &[Process]) -> SimulationOutcome {
        dispatch_by_key(self.name(), processes, |p| i64::from(p.priority))
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling (Non-Preemptive)"
    }
}

/// Shared dispatch loop for the non-preemptive disciplines.
///
/// Selection is min by (key, arrival, input order); idle time jumps the
/// clock straight to the next arrival.
fn dispatch_by_key(
    name: &str,
    processes: &[Process],
    key: impl Fn(&Process) -> i64,
) -> SimulationOutcome {
    let mut pending: Vec<(usize, Process)> = processes.iter().copied().enumerate().collect();
    let mut timeline = Timeline::new();
    let mut metrics = Vec::with_capacity(processes.len());
    let mut now = 0;

    while !pending.is_empty() {
        let pick = pending
            .iter()
            .enumerate()
            .filter(|(_, (_, p))| p.arrival_time <= now)
            .min_by_key(|(_, (order, p))| (key(p), p.arrival_time, *order))
            .map(|(pos, _)| pos);

        match pick {
            Some(pos) => {
                let (_, p) = pending.remove(pos);
                let completion = now + p.burst_time;
                timeline.push(Segment::new(p.id, now, completion));
                metrics.push(ProcessMetrics::from_completion(&p, completion));
                now = completion;
            }
            None => match pending.iter().map(|(_, p)| p.arrival_time).min() {
                Some(next_arrival) => now = next_arrival,
                None => break,
            },
        }
    }

    SimulationOutcome::new(name, metrics, timeline)
}
