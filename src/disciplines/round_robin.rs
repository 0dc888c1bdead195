//! Round robin scheduling.
//!
//! # Algorithm
//!
//! Three pools: not-yet-arrived processes ordered by arrival, a FIFO ready
//! queue, and the finished set. Each cycle promotes every arrived process
//! into the ready queue, then runs the queue head for
//! `min(quantum, remaining)` units as one timeline slice. Promotion runs
//! again when the slice ends, before the preempted process is re-enqueued,
//! so processes that arrived during the slice are queued ahead of it.
//!
//! Slices are never merged: a process running two back-to-back slices
//! contributes two segments, each bounded by the quantum.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use crate::models::{Process, ProcessMetrics, Segment, SimulationOutcome, Timeline};

use super::{snapshot, Discipline, WorkItem};

/// Round robin with a fixed time quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a round robin discipline with the given quantum.
    ///
    /// The quantum is assumed validated (positive); see the `validation`
    /// module.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// The configured time quantum.
    #[inline]
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Discipline for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, processes: &[Process]) -> SimulationOutcome {
        let mut arrivals: VecDeque<WorkItem> = {
            let mut items = snapshot(processes);
            // Stable by arrival: simultaneous arrivals keep input order.
            items.sort_by_key(|item| item.process.arrival_time);
            items.into()
        };
        let mut ready: VecDeque<WorkItem> = VecDeque::new();
        let mut timeline = Timeline::new();
        let mut metrics = Vec::with_capacity(processes.len());
        let mut now = 0;

        while !arrivals.is_empty() || !ready.is_empty() {
            promote_arrivals(&mut arrivals, &mut ready, now);

            let Some(mut item) = ready.pop_front() else {
                // Ready queue drained; idle until the next arrival.
                match arrivals.front() {
                    Some(next) => {
                        now = next.process.arrival_time;
                        continue;
                    }
                    None => break,
                }
            };

            let slice = self.quantum.min(item.remaining);
            timeline.push(Segment::new(item.process.id, now, now + slice));
            now += slice;
            item.remaining -= slice;

            if item.remaining == 0 {
                metrics.push(ProcessMetrics::from_completion(&item.process, now));
            } else {
                // Arrivals during the slice go ahead of the preempted process.
                promote_arrivals(&mut arrivals, &mut ready, now);
                ready.push_back(item);
            }
        }

        SimulationOutcome::new(self.name(), metrics, timeline)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

/// Moves every process with `arrival_time <= now` into the ready queue,
/// preserving arrival order.
fn promote_arrivals(arrivals: &mut VecDeque<WorkItem>, ready: &mut VecDeque<WorkItem>, now: i64) {
    while let Some(front) = arrivals.front() {
        if front.process.arrival_time > now {
            break;
        }
        if let Some(item) = arrivals.pop_front() {
            ready.push_back(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5).with_priority(2),
            Process::new(2, 1, 3).with_priority(1),
            Process::new(3, 2, 1).with_priority(3),
        ]
    }

    fn durations(outcome: &SimulationOutcome) -> Vec<(u32, i64)> {
        outcome
            .timeline
            .segments
            .iter()
            .map(|s| (s.process_id, s.duration()))
            .collect()
    }

    #[test]
    fn test_round_robin_sample() {
        // q=2: P1 runs [0,2); P2 and P3 arrive during the slice and queue
        // ahead of the preempted P1. P3's only slice is 1 unit (final).
        let outcome = RoundRobin::new(2).run(&sample_processes());
        assert_eq!(
            durations(&outcome),
            vec![(1, 2), (2, 2), (3, 1), (1, 2), (2, 1), (1, 1)]
        );
        assert_eq!(outcome.timeline.span(), 9);

        let p3 = outcome.metrics_for(3).unwrap();
        assert_eq!((p3.completion_time, p3.turnaround_time, p3.waiting_time), (5, 3, 2));
        let p2 = outcome.metrics_for(2).unwrap();
        assert_eq!((p2.completion_time, p2.turnaround_time, p2.waiting_time), (8, 7, 4));
        let p1 = outcome.metrics_for(1).unwrap();
        assert_eq!((p1.completion_time, p1.turnaround_time, p1.waiting_time), (9, 9, 4));
    }

    #[test]
    fn test_slice_bound() {
        let quantum = 2;
        let outcome = RoundRobin::new(quantum).run(&sample_processes());
        let mut remaining: std::collections::HashMap<u32, i64> = sample_processes()
            .iter()
            .map(|p| (p.id, p.burst_time))
            .collect();
        for s in &outcome.timeline.segments {
            assert!(s.duration() <= quantum);
            let rem = remaining.get_mut(&s.process_id).unwrap();
            // A short slice is only ever the process's final slice.
            assert!(s.duration() == quantum || s.duration() == *rem);
            *rem -= s.duration();
        }
        assert!(remaining.values().all(|&r| r == 0));
    }

    #[test]
    fn test_lone_process_slices_stay_separate() {
        let outcome = RoundRobin::new(2).run(&[Process::new(1, 0, 5)]);
        assert_eq!(durations(&outcome), vec![(1, 2), (1, 2), (1, 1)]);
        assert_eq!(outcome.metrics_for(1).unwrap().waiting_time, 0);
    }

    #[test]
    fn test_large_quantum_degenerates_to_fcfs() {
        let rr = RoundRobin::new(100).run(&sample_processes());
        assert_eq!(durations(&rr), vec![(1, 5), (2, 3), (3, 1)]);
    }

    #[test]
    fn test_mid_slice_arrival_queues_before_preempted() {
        // P2 arrives at t=1 while P1 runs [0,2); when the slice ends P2
        // must run before P1 continues.
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 1)];
        let outcome = RoundRobin::new(2).run(&processes);
        assert_eq!(durations(&outcome), vec![(1, 2), (2, 1), (1, 2)]);
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let processes = vec![Process::new(1, 3, 2), Process::new(2, 4, 2)];
        let outcome = RoundRobin::new(2).run(&processes);
        assert_eq!(
            outcome.timeline.segments,
            vec![Segment::new(1, 3, 5), Segment::new(2, 5, 7)]
        );
    }

    #[test]
    fn test_simultaneous_arrivals_keep_input_order() {
        let processes = vec![
            Process::new(1, 0, 2),
            Process::new(2, 0, 2),
            Process::new(3, 0, 2),
        ];
        let outcome = RoundRobin::new(1).run(&processes);
        let order: Vec<_> = outcome
            .timeline
            .segments
            .iter()
            .map(|s| s.process_id)
            .collect();
        assert_eq!(order, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_quantum_accessor() {
        assert_eq!(RoundRobin::new(4).quantum(), 4);
    }

    #[test]
    fn test_empty_input() {
        let outcome = RoundRobin::new(2).run(&[]);
        assert!(outcome.timeline.is_empty());
        assert_eq!(outcome.process_count(), 0);
    }
}
