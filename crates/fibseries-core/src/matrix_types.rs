//! 2x2 integer matrix used by the matrix-exponentiation evaluator.

use crate::calculator::FibError;

/// 2x2 matrix of `u64` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix2 {
    pub a: u64, // [0][0]
    pub b: u64, // [0][1]
    pub c: u64, // [1][0]
    pub d: u64, // [1][1]
}

impl Matrix2 {
    /// Build a matrix from rows.
    #[must_use]
    pub const fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self { a, b, c, d }
    }

    /// Create the identity matrix.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(1, 0, 0, 1)
    }

    /// Create the Fibonacci Q matrix [[1,1],[1,0]].
    #[must_use]
    pub const fn fibonacci_q() -> Self {
        Self::new(1, 1, 1, 0)
    }

    /// Check if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Replace `self` with `self * rhs`.
    ///
    /// All four products are formed from the original entries before any
    /// entry is written, so `rhs` may be a copy of `self`. On overflow
    /// `self` is left unchanged.
    pub fn multiply(&mut self, rhs: &Self) -> Result<(), FibError> {
        let x = dot(self.a, rhs.a, self.b, rhs.c)?;
        let y = dot(self.a, rhs.b, self.b, rhs.d)?;
        let z = dot(self.c, rhs.a, self.d, rhs.c)?;
        let w = dot(self.c, rhs.b, self.d, rhs.d)?;

        self.a = x;
        self.b = y;
        self.c = z;
        self.d = w;
        Ok(())
    }

    /// Replace `self` with `self * self`.
    pub fn square(&mut self) -> Result<(), FibError> {
        let snapshot = *self;
        self.multiply(&snapshot)
    }
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::identity()
    }
}

/// `p * q + r * s` with overflow detection.
fn dot(p: u64, q: u64, r: u64, s: u64) -> Result<u64, FibError> {
    p.checked_mul(q)
        .and_then(|left| r.checked_mul(s).and_then(|right| left.checked_add(right)))
        .ok_or_else(|| FibError::Calculation("2x2 matrix product overflows u64".into()))
}
