//! Process model.
//!
//! A process is the unit of scheduling: a named amount of CPU work
//! (burst time) that becomes eligible at a fixed arrival tick.
//!
//! # Time Representation
//! All times are logical integer ticks relative to a simulation epoch (t=0).
//! There is no wall-clock mapping; one tick is one unit of CPU work.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process submitted for scheduling.
///
/// Immutable input: the simulation works on private state derived from it
/// and never mutates the spec itself. Names are display identifiers;
/// duplicates are accepted and not collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Display name (e.g. "P1").
    pub name: String,
    /// Total CPU time required, in ticks. Must be >= 0.
    pub burst_time: i64,
    /// Tick at which the process becomes eligible for dispatch. Must be >= 0.
    pub arrival_time: i64,
}

impl ProcessSpec {
    /// Creates a new process spec.
    pub fn new(name: impl Into<String>, burst_time: i64, arrival_time: i64) -> Self {
        Self {
            name: name.into(),
            burst_time,
            arrival_time,
        }
    }

    /// Whether this process requires no CPU time at all.
    ///
    /// Zero-burst processes complete instantly at their arrival tick and
    /// never occupy the CPU.
    #[inline]
    pub fn is_instant(&self) -> bool {
        self.burst_time == 0
    }
}

/// Per-process performance metrics, produced once a simulation completes.
///
/// One row per input spec, in input order. Input fields are echoed so a
/// row is self-describing without a join back to the specs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Display name, echoed from the input spec.
    pub name: String,
    /// Burst time, echoed from the input spec.
    pub burst_time: i64,
    /// Arrival time, echoed from the input spec.
    pub arrival_time: i64,
    /// Tick at which the last slice of this process finished.
    /// For zero-burst processes, the arrival tick.
    pub completion_time: i64,
    /// Completion tick minus arrival tick.
    pub turnaround_time: i64,
    /// Turnaround minus burst: time spent ready but not running.
    pub waiting_time: i64,
    /// First-dispatch tick minus arrival tick.
    pub response_time: i64,
}
