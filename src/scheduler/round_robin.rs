//! Round-robin scheduling engine.
//!
//! # Algorithm
//!
//! 1. Admit every process whose arrival tick has been reached into a FIFO
//!    ready queue (ascending arrival, input order on ties).
//! 2. Dispatch the queue head for `min(quantum, remaining)` ticks and record
//!    the slice in the timeline.
//! 3. Admit processes that arrived during the slice, then re-enqueue the
//!    preempted process behind them.
//! 4. When the queue is empty but arrivals are pending, jump the clock to
//!    the earliest pending arrival.
//!
//! Step 3's ordering is the defining fairness rule of round-robin: work that
//! became ready during a slice is served before the process that just ran.
//!
//! # Complexity
//! O(total burst / quantum + n log n) for n processes.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::models::{ProcessMetrics, ProcessSpec, Timeline, TimelineEntry};
use crate::validation::{self, SimulationError};

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<ProcessSpec>,
    /// Time quantum in ticks. Must be >= 1.
    pub quantum: i64,
}

impl SimulationRequest {
    /// Creates a new simulation request.
    pub fn new(processes: Vec<ProcessSpec>, quantum: i64) -> Self {
        Self { processes, quantum }
    }

    /// Adds a process.
    pub fn with_process(mut self, spec: ProcessSpec) -> Self {
        self.processes.push(spec);
        self
    }
}

/// Output of a completed simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The Gantt sequence, in execution order.
    pub timeline: Timeline,
    /// Per-process metrics, in input order.
    pub processes: Vec<ProcessMetrics>,
}

impl SimulationResult {
    /// Metrics row for a given process name (first match on duplicates).
    pub fn metrics_for(&self, name: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|p| p.name == name)
    }
}

/// Per-process mutable state during a run. Never exposed to callers.
struct RunState {
    remaining: i64,
    /// Set exactly once, at first dispatch.
    response: Option<i64>,
    completion: i64,
}

/// Preemptive round-robin scheduler over a single logical CPU.
///
/// `simulate` is a pure function of its input: it builds fresh private
/// state per call, never mutates the caller's specs, and produces
/// identical output for identical input.
///
/// # Example
///
/// ```
/// use rr_sched::models::ProcessSpec;
/// use rr_sched::scheduler::RoundRobinScheduler;
///
/// let specs = vec![ProcessSpec::new("P1", 5, 0)];
/// let scheduler = RoundRobinScheduler::new();
/// let result = scheduler.simulate(&specs, 3).unwrap();
///
/// // Burst 5 under quantum 3 splits into slices of 3 and 2.
/// assert_eq!(result.timeline.entry_count(), 2);
/// assert_eq!(result.processes[0].turnaround_time, 5);
/// assert_eq!(result.processes[0].waiting_time, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundRobinScheduler;

impl RoundRobinScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs the simulation.
    ///
    /// Validates the input first; on rejection, returns all detected errors
    /// and no partial output. An empty spec list succeeds with an empty
    /// timeline and no metrics rows.
    ///
    /// Zero-burst processes complete instantly at their arrival tick with
    /// turnaround, waiting, and response all 0; they never enter the ready
    /// queue and contribute no timeline entry.
    pub fn simulate(
        &self,
        specs: &[ProcessSpec],
        quantum: i64,
    ) -> Result<SimulationResult, Vec<SimulationError>> {
        validation::validate_input(specs, quantum)?;

        let mut states: Vec<RunState> = specs
            .iter()
            .map(|s| RunState {
                remaining: s.burst_time,
                response: None,
                // Overwritten at completion for processes that run;
                // already final for zero-burst processes.
                completion: s.arrival_time,
            })
            .collect();

        // Admission pool: indices of processes that need CPU time, in
        // ascending arrival order. Stable sort keeps input order on ties.
        let mut pool: Vec<usize> = (0..specs.len())
            .filter(|&i| !specs[i].is_instant())
            .collect();
        pool.sort_by_key(|&i| specs[i].arrival_time);

        let mut timeline = Timeline::new();
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut next_pending = 0;
        let mut now: i64 = 0;

        while next_pending < pool.len() || !ready.is_empty() {
            next_pending = admit(&pool, next_pending, specs, now, &mut ready);

            let Some(index) = ready.pop_front() else {
                // CPU idle: jump straight to the next arrival. No timeline
                // entry is emitted for the gap.
                now = specs[pool[next_pending]].arrival_time;
                continue;
            };

            let spec = &specs[index];
            let state = &mut states[index];
            if state.response.is_none() {
                state.response = Some(now - spec.arrival_time);
            }

            let slice = quantum.min(state.remaining);
            timeline.push(TimelineEntry::new(spec.name.clone(), now, slice));
            state.remaining -= slice;
            now += slice;

            // Processes that arrived during the slice queue ahead of the
            // preempted one.
            next_pending = admit(&pool, next_pending, specs, now, &mut ready);

            if states[index].remaining > 0 {
                ready.push_back(index);
            } else {
                states[index].completion = now;
            }
        }

        let processes = specs
            .iter()
            .zip(states.iter())
            .map(|(spec, state)| {
                let turnaround = state.completion - spec.arrival_time;
                ProcessMetrics {
                    name: spec.name.clone(),
                    burst_time: spec.burst_time,
                    arrival_time: spec.arrival_time,
                    completion_time: state.completion,
                    turnaround_time: turnaround,
                    waiting_time: turnaround - spec.burst_time,
                    // None only for zero-burst processes, which respond
                    // instantly.
                    response_time: state.response.unwrap_or(0),
                }
            })
            .collect();

        Ok(SimulationResult {
            timeline,
            processes,
        })
    }

    /// Runs the simulation from a request container.
    pub fn simulate_request(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, Vec<SimulationError>> {
        self.simulate(&request.processes, request.quantum)
    }
}

/// Moves every pooled process with `arrival <= now` into the ready queue.
///
/// Returns the new pool cursor. The pool is sorted by arrival, so admission
/// preserves ascending-arrival order with input order on ties.
fn admit(
    pool: &[usize],
    mut next_pending: usize,
    specs: &[ProcessSpec],
    now: i64,
    ready: &mut VecDeque<usize>,
) -> usize {
    while next_pending < pool.len() && specs[pool[next_pending]].arrival_time <= now {
        ready.push_back(pool[next_pending]);
        next_pending += 1;
    }
    next_pending
}
