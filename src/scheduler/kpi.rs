//! Simulation quality metrics (KPIs).
//!
//! Aggregates the per-process results of a completed run into the standard
//! scheduling performance indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Waiting | Mean of turnaround - burst |
//! | Avg Response | Mean of first-dispatch - arrival |
//! | Makespan | Latest slice end tick |
//! | CPU Utilization | Busy ticks / makespan |
//! | Context Switches | Adjacent slices run by different processes |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use crate::scheduler::SimulationResult;

/// Aggregate performance indicators of a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationKpi {
    /// Mean turnaround time across all processes (ticks).
    pub avg_turnaround: f64,
    /// Mean waiting time across all processes (ticks).
    pub avg_waiting: f64,
    /// Mean response time across all processes (ticks).
    pub avg_response: f64,
    /// Latest slice end tick (0 for an empty run).
    pub makespan: i64,
    /// Fraction of [0, makespan) spent executing (0.0 for an empty run).
    pub cpu_utilization: f64,
    /// Number of dispatched slices.
    pub dispatch_count: usize,
    /// Adjacent slice pairs where the CPU changed process.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a completed simulation result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let count = result.processes.len();
        let (avg_turnaround, avg_waiting, avg_response) = if count == 0 {
            (0.0, 0.0, 0.0)
        } else {
            let n = count as f64;
            let turnaround: i64 = result.processes.iter().map(|p| p.turnaround_time).sum();
            let waiting: i64 = result.processes.iter().map(|p| p.waiting_time).sum();
            let response: i64 = result.processes.iter().map(|p| p.response_time).sum();
            (
                turnaround as f64 / n,
                waiting as f64 / n,
                response as f64 / n,
            )
        };

        let makespan = result.timeline.makespan();
        let cpu_utilization = if makespan > 0 {
            result.timeline.total_busy_time() as f64 / makespan as f64
        } else {
            0.0
        };

        let context_switches = result
            .timeline
            .entries
            .windows(2)
            .filter(|pair| pair[0].process_name != pair[1].process_name)
            .count();

        Self {
            avg_turnaround,
            avg_waiting,
            avg_response,
            makespan,
            cpu_utilization,
            dispatch_count: result.timeline.entry_count(),
            context_switches,
        }
    }

    /// Average metrics formatted to two decimal places, one per line.
    pub fn summary(&self) -> String {
        format!(
            "Averages:\nTurnaround: {:.2}\nWaiting: {:.2}\nResponse: {:.2}",
            self.avg_turnaround, self.avg_waiting, self.avg_response
        )
    }
}
