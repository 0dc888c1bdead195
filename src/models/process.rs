//! Process (job) model.
//!
//! A process is the immutable input descriptor for one simulated job:
//! when it becomes eligible, how much CPU time it needs, and how urgent
//! it is. Per-run execution state lives in the engine, never here.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Process identifier. Positive, unique, assigned by input order (1-based).
///
/// Stable across all discipline runs, so results from different disciplines
/// can be joined by id.
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// # Time Representation
/// All times are in abstract integer time units relative to the simulation
/// start (t=0). The consumer defines what one unit means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time unit at which the process becomes eligible for execution.
    pub arrival_time: i64,
    /// Total CPU time required. Immutable once set; always positive.
    pub burst_time: i64,
    /// Scheduling priority (lower value = higher priority).
    ///
    /// Used only by the two priority disciplines.
    pub priority: i32,
}

impl Process {
    /// Creates a new process with priority 0.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(1, 4, 7).with_priority(2);
        assert_eq!(p.id, 1);
        assert_eq!(p.arrival_time, 4);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_process_default_priority() {
        let p = Process::new(3, 0, 1);
        assert_eq!(p.priority, 0);
    }
}
