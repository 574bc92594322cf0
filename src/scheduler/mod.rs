//! Round-robin engine and KPI evaluation.
//!
//! `RoundRobinScheduler` runs the preemptive time-sliced simulation and
//! produces a `SimulationResult`; `SimulationKpi` condenses a result into
//! aggregate performance indicators.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod kpi;
mod round_robin;

pub use kpi::SimulationKpi;
pub use round_robin::{RoundRobinScheduler, SimulationRequest, SimulationResult};
