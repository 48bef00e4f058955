//! Sequence bounds, precomputed terms, and default limits.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Default recursion budget for the naive recursive evaluator.
///
/// The descent for F(n) is n frames deep, so this caps the accepted index.
pub const DEFAULT_RECURSION_LIMIT: u64 = 64;

/// Largest index for which the truncated closed form is exact in `f64`.
pub const GOLDEN_RATIO_EXACT_LIMIT: u64 = 70;

/// Precomputed Fibonacci values for n = 0..=93, evaluated by the compiler.
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

const _: () = assert!(DEFAULT_RECURSION_LIMIT <= MAX_FIB_U64);
const _: () = assert!(GOLDEN_RATIO_EXACT_LIMIT <= MAX_FIB_U64);

/// Process exit codes for collaborators that surface a [`FibError`](crate::FibError).
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Comparison harness deadline passed.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or unknown calculator.
    pub const ERROR_CONFIG: i32 = 4;
    /// Index outside the domain of the evaluators.
    pub const ERROR_DOMAIN: i32 = 5;
}
