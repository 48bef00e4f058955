//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration.
//! `CoreCalculator` is the internal trait implemented by algorithms.
//! `FibCalculator` is a decorator that validates the index and traces the call.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::common::validate_index;
use crate::constants::exit_codes;
use crate::options::Options;

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// Negative index.
    #[error("invalid index {0}: Fibonacci index must be non-negative")]
    InvalidInput(i64),

    /// F(n) does not fit in a u64.
    #[error("F({0}) overflows u64 (largest representable index is {1})")]
    Overflow(i64, u64),

    /// The recursive descent would exceed its depth budget.
    #[error("recursion depth {depth} exceeds limit {limit}")]
    ResourceExhausted { depth: u64, limit: u64 },

    /// Strict closed form refused an index past its exact range.
    #[error("closed form is not exact for F({0})")]
    PrecisionLoss(u64),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Calculation timed out.
    #[error("calculation timed out after {0}")]
    Timeout(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

impl FibError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::Overflow(_, _) => exit_codes::ERROR_DOMAIN,
            Self::ResourceExhausted { .. } | Self::PrecisionLoss(_) | Self::Calculation(_) => {
                exit_codes::ERROR_GENERIC
            }
            Self::Config(_) => exit_codes::ERROR_CONFIG,
            Self::Timeout(_) => exit_codes::ERROR_TIMEOUT,
            Self::Mismatch => exit_codes::ERROR_MISMATCH,
        }
    }
}

/// Asymptotic running time of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Exponential,
    Linear,
    Logarithmic,
    Constant,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Exponential => "O(phi^n)",
            Self::Linear => "O(n)",
            Self::Logarithmic => "O(log n)",
            Self::Constant => "O(1)",
        };
        f.write_str(s)
    }
}

/// Public trait for Fibonacci calculators, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Calculate F(n) with the given options.
    fn calculate(&self, n: i64, opts: &Options) -> Result<u64, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `FibCalculator` which adds index validation and tracing.
pub trait CoreCalculator: Send + Sync {
    /// Compute F(n) for an index already known to be in `0..=MAX_FIB_U64`.
    fn calculate_core(&self, n: u64, opts: &Options) -> Result<u64, FibError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;

    /// Running time of the algorithm.
    fn complexity(&self) -> Complexity;
}

/// Decorator that wraps a `CoreCalculator` with the shared domain policy.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }

    /// Running time of the wrapped algorithm.
    #[must_use]
    pub fn complexity(&self) -> Complexity {
        self.inner.complexity()
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, n: i64, opts: &Options) -> Result<u64, FibError> {
        let span = debug_span!("calculate", algorithm = self.inner.name(), n);
        let _guard = span.enter();

        let index = validate_index(n)?;
        let value = self.inner.calculate_core(index, opts)?;
        debug!(value, "calculation finished");
        Ok(value)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterative::Iterative;

    #[test]
    fn decorator_rejects_negative_index() {
        let calc = FibCalculator::new(Arc::new(Iterative::new()));
        let result = calc.calculate(-1, &Options::default());
        assert_eq!(result, Err(FibError::InvalidInput(-1)));
    }

    #[test]
    fn decorator_rejects_overflowing_index() {
        let calc = FibCalculator::new(Arc::new(Iterative::new()));
        let result = calc.calculate(94, &Options::default());
        assert_eq!(result, Err(FibError::Overflow(94, 93)));
    }

    #[test]
    fn decorator_delegates() {
        let calc = FibCalculator::new(Arc::new(Iterative::new()));
        assert_eq!(calc.calculate(10, &Options::default()), Ok(55));
        assert_eq!(calc.name(), "Iterative");
        assert_eq!(calc.complexity(), Complexity::Linear);
    }

    #[test]
    fn fib_error_display() {
        let err = FibError::Calculation("test".into());
        assert_eq!(err.to_string(), "calculation error: test");

        let err = FibError::InvalidInput(-3);
        assert_eq!(
            err.to_string(),
            "invalid index -3: Fibonacci index must be non-negative"
        );

        let err = FibError::ResourceExhausted {
            depth: 65,
            limit: 64,
        };
        assert_eq!(err.to_string(), "recursion depth 65 exceeds limit 64");
    }

    #[test]
    fn error_codes() {
        assert_eq!(FibError::InvalidInput(-1).exit_code(), 5);
        assert_eq!(FibError::Overflow(100, 93).exit_code(), 5);
        assert_eq!(FibError::Timeout("5s".into()).exit_code(), 2);
        assert_eq!(FibError::Mismatch.exit_code(), 3);
        assert_eq!(FibError::Config("bad".into()).exit_code(), 4);
    }

    #[test]
    fn complexity_display() {
        assert_eq!(Complexity::Exponential.to_string(), "O(phi^n)");
        assert_eq!(Complexity::Logarithmic.to_string(), "O(log n)");
    }
}
