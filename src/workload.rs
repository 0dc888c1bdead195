//! Random workload generation.
//!
//! Builds randomized process sets for experiments and invariant tests.
//! Generation is deterministic under a seeded rng.

use rand::Rng;

use crate::models::Process;

/// Builder for randomized process sets.
///
/// IDs are sequential and 1-based; arrivals, bursts, and priorities are
/// drawn uniformly from the configured ranges. Defaults produce small
/// interactive-scale workloads.
///
/// # Example
///
/// ```
/// use cpu_sched::workload::WorkloadGenerator;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let processes = WorkloadGenerator::new(4).generate(&mut rng);
/// assert_eq!(processes.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    process_count: usize,
    max_arrival: i64,
    max_burst: i64,
    priority_levels: i32,
}

impl WorkloadGenerator {
    /// Creates a generator for the given number of processes.
    pub fn new(process_count: usize) -> Self {
        Self {
            process_count,
            max_arrival: 10,
            max_burst: 10,
            priority_levels: 5,
        }
    }

    /// Sets the latest possible arrival time (arrivals are 0..=max).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest possible burst time (bursts are 1..=max).
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the number of priority levels (priorities are 1..=levels).
    pub fn with_priority_levels(mut self, priority_levels: i32) -> Self {
        self.priority_levels = priority_levels;
        self
    }

    /// Generates a process set from the given rng.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.process_count)
            .map(|id| {
                Process::new(
                    id as u32,
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(1..=self.max_burst),
                )
                .with_priority(rng.random_range(1..=self.priority_levels))
            })
            .collect()
    }
}
