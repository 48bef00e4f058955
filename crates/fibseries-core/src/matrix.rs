//! Matrix Exponentiation algorithm for Fibonacci computation.
//!
//! ```text
//! [F(n+1) F(n)  ]   [1 1]^n
//! [F(n)   F(n-1)] = [1 0]
//! ```
//!
//! so F(n) is the top-left entry of Q^(n-1). The power is computed by
//! recursive halving (square-and-multiply), O(log n) multiplications.

use tracing::trace;

use crate::calculator::{Complexity, CoreCalculator, FibError};
use crate::common::validate_index;
use crate::matrix_types::Matrix2;
use crate::options::Options;

/// Compute F(n) as the top-left entry of Q^(n-1).
///
/// # Example
/// ```
/// assert_eq!(fibseries_core::fibonacci_power(30), Ok(832_040));
/// ```
pub fn fibonacci_power(n: i64) -> Result<u64, FibError> {
    let index = validate_index(n)?;
    MatrixExponentiation.calculate_core(index, &Options::default())
}

/// Raise `m` to the `k`th power in place, assuming `m` starts as Q.
///
/// k = 0 and k = 1 leave `m` unchanged. Otherwise `m` is raised to k/2,
/// squared, and multiplied by Q once more when k is odd.
pub fn power(m: &mut Matrix2, k: u64) -> Result<(), FibError> {
    if k == 0 || k == 1 {
        return Ok(());
    }

    power(m, k / 2)?;
    m.square()?;
    if k % 2 != 0 {
        m.multiply(&Matrix2::fibonacci_q())?;
    }
    trace!(k, top_left = m.a, "matrix power step");
    Ok(())
}

/// Matrix Exponentiation calculator.
pub struct MatrixExponentiation;

impl MatrixExponentiation {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MatrixExponentiation {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for MatrixExponentiation {
    fn calculate_core(&self, n: u64, _opts: &Options) -> Result<u64, FibError> {
        if n == 0 {
            return Ok(0);
        }
        let mut f = Matrix2::fibonacci_q();
        power(&mut f, n - 1)?;
        Ok(f.a)
    }

    fn name(&self) -> &'static str {
        "MatrixExponentiation"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Logarithmic
    }
}
