//! Compile-time evaluation through `const fn` and const generics.
//!
//! Everything here is resolved by the compiler's constant evaluator when used
//! in a const context, so the generated code contains only the final value.
//! `ConstTable` exposes the baked [`FIB_TABLE`] through the calculator
//! interface: at runtime it performs a single bounds-checked load.

use crate::calculator::{Complexity, CoreCalculator, FibError};
use crate::constants::{FIB_TABLE, MAX_FIB_U64};
use crate::options::Options;

/// F(n) as a `const fn`, following the recurrence from the base cases.
///
/// # Panics
/// Panics if `n > MAX_FIB_U64`. In a const context this is a compile error.
///
/// # Example
/// ```
/// const F30: u64 = fibseries_core::compile_time::fibonacci_const(30);
/// assert_eq!(F30, 832_040);
/// ```
#[must_use]
pub const fn fibonacci_const(n: u64) -> u64 {
    assert!(n <= MAX_FIB_U64, "F(n) overflows u64 for n > 93");
    step(n, 0, 1)
}

/// One application of the recurrence: (F(k), F(k+1)) -> (F(k+1), F(k+2)).
const fn step(remaining: u64, prev: u64, curr: u64) -> u64 {
    match remaining {
        0 => prev,
        1 => curr,
        _ => step(remaining - 1, curr, prev + curr),
    }
}

/// Type-level handle on F(N).
///
/// ```
/// use fibseries_core::compile_time::FibonacciMeta;
/// assert_eq!(FibonacciMeta::<10>::VALUE, 55);
/// ```
///
/// An index past 93 fails to compile once `VALUE` is used:
///
/// ```compile_fail
/// use fibseries_core::compile_time::FibonacciMeta;
/// const TOO_BIG: u64 = FibonacciMeta::<94>::VALUE;
/// ```
pub struct FibonacciMeta<const N: u64>;

impl<const N: u64> FibonacciMeta<N> {
    pub const VALUE: u64 = fibonacci_const(N);
}

const _: () = assert!(FibonacciMeta::<0>::VALUE == 0);
const _: () = assert!(FibonacciMeta::<1>::VALUE == 1);
const _: () = assert!(FibonacciMeta::<93>::VALUE == FIB_TABLE[93]);

/// Calculator over the compile-time table.
pub struct ConstTable;

impl ConstTable {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConstTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for ConstTable {
    #[allow(clippy::cast_possible_truncation)]
    fn calculate_core(&self, n: u64, _opts: &Options) -> Result<u64, FibError> {
        FIB_TABLE
            .get(n as usize)
            .copied()
            .ok_or_else(|| FibError::Calculation(format!("F({n}) is not in the compile-time table")))
    }

    fn name(&self) -> &'static str {
        "ConstTable"
    }

    fn complexity(&self) -> Complexity {
        Complexity::Constant
    }
}
