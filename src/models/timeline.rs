//! Execution timeline (Gantt chart) model.
//!
//! A timeline is an ordered sequence of execution segments, each recording
//! that one process ran uninterrupted over a half-open time interval.
//! Idle periods appear as gaps between segments, never as segments.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// One uninterrupted execution interval `[start, end)` of a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process that executed.
    pub process_id: ProcessId,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(process_id: ProcessId, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Segment duration (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// An ordered execution timeline for one discipline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Execution segments in time order.
    pub segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment as-is.
    ///
    /// Used by dispatch-granularity runs (non-preemptive disciplines, round
    /// robin slices) where each dispatch is its own segment even when the
    /// same process runs twice in a row.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Records an execution interval, coalescing with the previous segment
    /// when it belongs to the same process and is time-contiguous.
    ///
    /// Used by unit-step runs: consecutive unit steps of one process merge
    /// into a single maximal segment, and a new segment starts exactly when
    /// the executing process changes.
    pub fn record(&mut self, process_id: ProcessId, start: i64, duration: i64) {
        if let Some(last) = self.segments.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end += duration;
                return;
            }
        }
        self.segments.push(Segment::new(process_id, start, start + duration));
    }

    /// Total executed time across all segments (idle gaps excluded).
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(Segment::duration).sum()
    }

    /// Total executed time attributed to one process.
    ///
    /// Equals that process's burst time once its run completes.
    pub fn busy_time_for(&self, process_id: ProcessId) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(Segment::duration)
            .sum()
    }

    /// End of the last segment, or 0 for an empty timeline.
    pub fn span(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
