//! Property-based tests for the round-robin engine.
//!
//! Each property runs the simulation over randomized workloads and checks
//! an invariant that must hold for every valid input.

use proptest::prelude::*;

use rr_sched::models::ProcessSpec;
use rr_sched::scheduler::RoundRobinScheduler;
use rr_sched::validation::SimulationErrorKind;

/// Random workload: 1..=12 processes with bounded bursts and arrivals.
/// Names are unique ("P1".."Pn") so per-process timeline queries are exact.
fn arb_workload() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0i64..=20, 0i64..=30), 1..=12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (burst, arrival))| ProcessSpec::new(format!("P{}", i + 1), burst, arrival))
            .collect()
    })
}

proptest! {
    // No work is created or lost: the timeline executes exactly the
    // requested burst total. Zero-burst processes contribute zero to both
    // sides.
    #[test]
    fn work_is_conserved(specs in arb_workload(), quantum in 1i64..=8) {
        let result = RoundRobinScheduler::new().simulate(&specs, quantum).unwrap();
        let total_burst: i64 = specs.iter().map(|s| s.burst_time).sum();
        prop_assert_eq!(result.timeline.total_busy_time(), total_burst);
    }

    // Each process's own slices sum to its burst.
    #[test]
    fn per_process_slices_sum_to_burst(specs in arb_workload(), quantum in 1i64..=8) {
        let result = RoundRobinScheduler::new().simulate(&specs, quantum).unwrap();
        for spec in &specs {
            let executed: i64 = result
                .timeline
                .entries_for_process(&spec.name)
                .iter()
                .map(|e| e.duration)
                .sum();
            prop_assert_eq!(executed, spec.burst_time);
        }
    }

    // Turnaround dominates burst, waiting is non-negative, and response
    // never exceeds waiting (first dispatch happens at or before the last
    // time the process stops waiting).
    #[test]
    fn metric_inequalities_hold(specs in arb_workload(), quantum in 1i64..=8) {
        let result = RoundRobinScheduler::new().simulate(&specs, quantum).unwrap();
        prop_assert_eq!(result.processes.len(), specs.len());
        for p in &result.processes {
            prop_assert!(p.turnaround_time >= p.burst_time);
            prop_assert!(p.waiting_time >= 0);
            prop_assert!(p.response_time >= 0);
            prop_assert!(p.response_time <= p.waiting_time);
            prop_assert_eq!(p.completion_time, p.arrival_time + p.turnaround_time);
        }
    }

    // Slices never overlap: each entry starts at or after the previous
    // entry's end. A strict gap is an idle interval.
    #[test]
    fn slices_never_overlap(specs in arb_workload(), quantum in 1i64..=8) {
        let result = RoundRobinScheduler::new().simulate(&specs, quantum).unwrap();
        for pair in result.timeline.entries.windows(2) {
            prop_assert!(pair[1].start >= pair[0].end());
        }
    }

    // Every slice is non-empty and bounded by the quantum.
    #[test]
    fn slice_durations_bounded_by_quantum(specs in arb_workload(), quantum in 1i64..=8) {
        let result = RoundRobinScheduler::new().simulate(&specs, quantum).unwrap();
        for entry in &result.timeline.entries {
            prop_assert!(entry.duration >= 1);
            prop_assert!(entry.duration <= quantum);
        }
    }

    // No slice starts before its process has arrived.
    #[test]
    fn no_slice_precedes_arrival(specs in arb_workload(), quantum in 1i64..=8) {
        let result = RoundRobinScheduler::new().simulate(&specs, quantum).unwrap();
        for spec in &specs {
            for entry in result.timeline.entries_for_process(&spec.name) {
                prop_assert!(entry.start >= spec.arrival_time);
            }
        }
    }

    // The simulation is a pure function of its input.
    #[test]
    fn runs_are_idempotent(specs in arb_workload(), quantum in 1i64..=8) {
        let scheduler = RoundRobinScheduler::new();
        let first = scheduler.simulate(&specs, quantum).unwrap();
        let second = scheduler.simulate(&specs, quantum).unwrap();
        prop_assert_eq!(first, second);
    }

    // Non-positive quanta are rejected with no output.
    #[test]
    fn invalid_quantum_rejected(specs in arb_workload(), quantum in -8i64..=0) {
        let errors = RoundRobinScheduler::new()
            .simulate(&specs, quantum)
            .unwrap_err();
        prop_assert!(errors
            .iter()
            .any(|e| e.kind == SimulationErrorKind::InvalidQuantum));
    }
}
