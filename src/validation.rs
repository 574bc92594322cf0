//! Input validation for simulation runs.
//!
//! Checks the call contract before any simulation step executes:
//! - Quantum must be at least 1
//! - Burst and arrival times must be non-negative
//!
//! All violations are collected and reported together; a failed validation
//! produces no partial simulation output. Duplicate process names are
//! deliberately not rejected — names are display identifiers only.

use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<SimulationError>>;

/// A rejected-input error.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationError {
    /// Error category.
    pub kind: SimulationErrorKind,
    /// Human-readable description naming the offending value.
    pub message: String,
}

/// Categories of rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationErrorKind {
    /// Quantum is zero or negative.
    InvalidQuantum,
    /// A process spec carries a negative burst or arrival time.
    InvalidProcessSpec,
}

impl SimulationError {
    fn new(kind: SimulationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a simulation run.
///
/// Checks:
/// 1. `quantum >= 1`
/// 2. `burst_time >= 0` for every spec
/// 3. `arrival_time >= 0` for every spec
///
/// An empty spec list is valid (the simulation is a no-op with empty
/// outputs).
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(specs: &[ProcessSpec], quantum: i64) -> ValidationResult {
    let mut errors = Vec::new();

    if quantum < 1 {
        errors.push(SimulationError::new(
            SimulationErrorKind::InvalidQuantum,
            format!("Quantum must be a positive integer, got {quantum}"),
        ));
    }

    for (index, spec) in specs.iter().enumerate() {
        if spec.burst_time < 0 {
            errors.push(SimulationError::new(
                SimulationErrorKind::InvalidProcessSpec,
                format!(
                    "Process '{}' (index {index}) has negative burst time {}",
                    spec.name, spec.burst_time
                ),
            ));
        }
        if spec.arrival_time < 0 {
            errors.push(SimulationError::new(
                SimulationErrorKind::InvalidProcessSpec,
                format!(
                    "Process '{}' (index {index}) has negative arrival time {}",
                    spec.name, spec.arrival_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
