//! Orchestration result types.

use std::time::Duration;

use fibseries_core::calculator::FibError;

/// Result of a single calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed value or a structured error.
    pub outcome: Result<u64, FibError>,
    /// Computation duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// The computed value, if the calculation succeeded.
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        self.outcome.as_ref().ok().copied()
    }

    /// The error, if the calculation failed.
    #[must_use]
    pub fn error(&self) -> Option<&FibError> {
        self.outcome.as_ref().err()
    }
}
