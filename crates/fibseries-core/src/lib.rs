//! # fibseries-core
//!
//! Six ways to compute the nth Fibonacci number, side by side:
//! naive recursion, iteration, matrix exponentiation, Binet's closed form,
//! compile-time evaluation, and a resettable generator.
//!
//! All integer evaluators share one domain policy: negative indices fail with
//! [`FibError::InvalidInput`] and indices above [`MAX_FIB_U64`] fail with
//! [`FibError::Overflow`].

pub mod calculator;
pub(crate) mod common;
pub mod compile_time;
pub mod constants;
pub mod generator;
pub mod golden_ratio;
pub mod iterative;
pub mod matrix;
pub mod matrix_types;
pub mod options;
pub mod recursive;
pub mod registry;

// Re-exports
pub use calculator::{Calculator, Complexity, CoreCalculator, FibCalculator, FibError};
pub use compile_time::{fibonacci_const, FibonacciMeta};
pub use constants::{
    exit_codes, DEFAULT_RECURSION_LIMIT, FIB_TABLE, GOLDEN_RATIO_EXACT_LIMIT, MAX_FIB_U64,
};
pub use generator::FibGenerator;
pub use golden_ratio::fibonacci_golden_ratio;
pub use iterative::fibonacci_iterative;
pub use matrix::fibonacci_power;
pub use matrix_types::Matrix2;
pub use options::Options;
pub use recursive::fibonacci_recursive;
pub use registry::{CalculatorFactory, DefaultFactory};

/// Compute F(n) with the iterative evaluator.
///
/// This is a convenience function for simple use cases. To pick an
/// algorithm by name or pass [`Options`], go through [`DefaultFactory`].
///
/// # Example
/// ```
/// assert_eq!(fibseries_core::fibonacci(10), Ok(55));
/// assert_eq!(fibseries_core::fibonacci(0), Ok(0));
/// ```
pub fn fibonacci(n: i64) -> Result<u64, FibError> {
    fibonacci_iterative(n)
}
