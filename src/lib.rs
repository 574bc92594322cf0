//! Round-robin CPU scheduling simulator.
//!
//! Given a set of processes with burst and arrival times and a fixed time
//! quantum, computes the tick-by-tick execution timeline (Gantt sequence)
//! and the derived per-process metrics: turnaround, waiting, and response
//! time. Presentation concerns (input collection, chart rendering) belong
//! to the caller — this crate is the simulation engine only.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `ProcessMetrics`,
//!   `Timeline`, `TimelineEntry`
//! - **`validation`**: Input integrity checks (quantum bounds, negative times)
//! - **`scheduler`**: The round-robin engine and KPI aggregation
//!
//! # Time Model
//!
//! Time is a logical integer tick counter starting at 0. There is no
//! wall-clock mapping, no external preemption, and no state shared across
//! runs: `simulate` is a pure function of its input.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod scheduler;
pub mod validation;
