//! Bottom-up iterative evaluator.

use crate::calculator::{Complexity, CoreCalculator, FibError};
use crate::common::validate_index;
use crate::options::Options;

/// F(0) and F(1), the seed of the rolling window.
const SEED: [u64; 2] = [0, 1];

/// Compute F(n) by rolling a two-term window forward from the seed.
///
/// # Example
/// ```
/// assert_eq!(fibseries_core::fibonacci_iterative(93), Ok(12_200_160_415_121_876_738));
/// ```
pub fn fibonacci_iterative(n: i64) -> Result<u64, FibError> {
    let index = validate_index(n)?;
    Iterative.calculate_core(index, &Options::default())
}

/// Iterative calculator: O(n) time, O(1) space.
pub struct Iterative;

impl Iterative {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Iterative {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for Iterative {
    #[allow(clippy::cast_possible_truncation)]
    fn calculate_core(&self, n: u64, _opts: &Options) -> Result<u64, FibError> {
        if n < 2 {
            return Ok(SEED[n as usize]);
        }

        let mut fib_n_minus_two = SEED[0];
        let mut fib_n_minus_one = SEED[1];
        let mut fib_n = 0;
        for _ in 2..=n {
            fib_n = fib_n_minus_one + fib_n_minus_two;
            fib_n_minus_two = fib_n_minus_one;
            fib_n_minus_one = fib_n;
        }
        Ok(fib_n)
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Linear
    }
}
