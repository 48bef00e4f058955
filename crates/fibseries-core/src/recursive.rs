//! Naive recursive evaluator following the recurrence literally.
//!
//! F(n) = F(n-1) + F(n-2) with no memoization, so the call tree has
//! O(phi^n) nodes and is n frames deep.

use crate::calculator::{Complexity, CoreCalculator, FibError};
use crate::common::validate_index;
use crate::options::Options;

/// Compute F(n) by direct recursive descent.
///
/// # Example
/// ```
/// assert_eq!(fibseries_core::fibonacci_recursive(10), Ok(55));
/// assert!(fibseries_core::fibonacci_recursive(-1).is_err());
/// ```
pub fn fibonacci_recursive(n: i64) -> Result<u64, FibError> {
    let index = validate_index(n)?;
    NaiveRecursive.calculate_core(index, &Options::default())
}

/// Recursive calculator with a depth budget.
pub struct NaiveRecursive;

impl NaiveRecursive {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn descend(n: u64) -> u64 {
        if n < 2 {
            return n;
        }
        Self::descend(n - 1) + Self::descend(n - 2)
    }
}

impl Default for NaiveRecursive {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for NaiveRecursive {
    fn calculate_core(&self, n: u64, opts: &Options) -> Result<u64, FibError> {
        // Deepest frame is the F(1) leaf under the F(n-1) chain.
        let depth = n.max(1);
        let limit = opts.clone().normalize().recursion_limit;
        if depth > limit {
            return Err(FibError::ResourceExhausted { depth, limit });
        }
        Ok(Self::descend(n))
    }

    fn name(&self) -> &'static str {
        "NaiveRecursive"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Exponential
    }
}
