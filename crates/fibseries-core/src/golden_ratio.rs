//! Closed-form evaluator based on Binet's formula.
//!
//! F(n) = (phi^n - psi^n) / sqrt(5) with phi = (1 + sqrt 5) / 2 and
//! psi = (1 - sqrt 5) / 2. The powers are taken in `f64` and the quotient is
//! truncated toward zero, never rounded. Truncation reproduces the integer
//! sequence exactly up to [`GOLDEN_RATIO_EXACT_LIMIT`]; past that the `f64`
//! mantissa runs out and results drift above the true value.

use num_traits::ToPrimitive;
use tracing::warn;

use crate::calculator::{Complexity, CoreCalculator, FibError};
use crate::common::validate_index;
use crate::constants::GOLDEN_RATIO_EXACT_LIMIT;
use crate::options::Options;

/// Compute F(n) from the golden ratio, truncating the floating-point result.
///
/// Exact for `n <= GOLDEN_RATIO_EXACT_LIMIT`, an approximation above it.
///
/// # Example
/// ```
/// assert_eq!(fibseries_core::fibonacci_golden_ratio(20), Ok(6765));
/// ```
pub fn fibonacci_golden_ratio(n: i64) -> Result<u64, FibError> {
    let index = validate_index(n)?;
    GoldenRatio.calculate_core(index, &Options::default())
}

/// Raw value of Binet's formula before truncation.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn binet(n: u64) -> f64 {
    let sqrt5 = 5f64.sqrt();
    let phi = (1.0 + sqrt5) / 2.0;
    let psi = (1.0 - sqrt5) / 2.0;
    let exponent = n as f64;
    (phi.powf(exponent) - psi.powf(exponent)) / sqrt5
}

/// Closed-form calculator.
pub struct GoldenRatio;

impl GoldenRatio {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoldenRatio {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for GoldenRatio {
    fn calculate_core(&self, n: u64, opts: &Options) -> Result<u64, FibError> {
        if n > GOLDEN_RATIO_EXACT_LIMIT {
            if opts.strict_closed_form {
                return Err(FibError::PrecisionLoss(n));
            }
            warn!(n, "closed form past its exact range, result is approximate");
        }

        let value = binet(n);
        value
            .to_u64()
            .ok_or_else(|| FibError::Calculation(format!("closed form produced {value} for F({n})")))
    }

    fn name(&self) -> &'static str {
        "GoldenRatio"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Logarithmic
    }
}
