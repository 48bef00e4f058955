//! Property-based tests for the Fibonacci evaluators.
//!
//! These go through the `CoreCalculator` trait directly as well as the
//! public free functions.

use proptest::prelude::*;

use fibseries_core::calculator::CoreCalculator;
use fibseries_core::compile_time::ConstTable;
use fibseries_core::golden_ratio::GoldenRatio;
use fibseries_core::iterative::Iterative;
use fibseries_core::matrix::MatrixExponentiation;
use fibseries_core::options::Options;
use fibseries_core::recursive::NaiveRecursive;
use fibseries_core::{
    fibonacci_golden_ratio, fibonacci_iterative, fibonacci_power, fibonacci_recursive,
    FibError, FibGenerator, Matrix2, GOLDEN_RATIO_EXACT_LIMIT, MAX_FIB_U64,
};

const CANONICAL: [u64; 31] = [
    0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181, 6765,
    10946, 17711, 28657, 46368, 75025, 121_393, 196_418, 317_811, 514_229, 832_040,
];

fn compute_core(algo: &dyn CoreCalculator, n: u64) -> u64 {
    algo.calculate_core(n, &Options::default()).unwrap()
}

#[test]
fn every_evaluator_matches_canonical_prefix() {
    for (n, &expected) in CANONICAL.iter().enumerate() {
        let i = n as i64;
        assert_eq!(fibonacci_recursive(i), Ok(expected), "recursive F({n})");
        assert_eq!(fibonacci_iterative(i), Ok(expected), "iterative F({n})");
        assert_eq!(fibonacci_power(i), Ok(expected), "power F({n})");
        assert_eq!(fibonacci_golden_ratio(i), Ok(expected), "golden F({n})");
        assert_eq!(fibseries_core::fibonacci_const(n as u64), expected, "const F({n})");
    }
}

#[test]
fn every_evaluator_rejects_negative_index() {
    let evaluators: [(&str, fn(i64) -> Result<u64, FibError>); 4] = [
        ("recursive", fibonacci_recursive),
        ("iterative", fibonacci_iterative),
        ("power", fibonacci_power),
        ("golden", fibonacci_golden_ratio),
    ];
    for (name, eval) in evaluators {
        assert_eq!(eval(-1), Err(FibError::InvalidInput(-1)), "{name}");
        assert_eq!(eval(i64::MIN), Err(FibError::InvalidInput(i64::MIN)), "{name}");
        assert_eq!(eval(94), Err(FibError::Overflow(94, 93)), "{name}");
    }
}

#[test]
fn generator_reset_reproduces_fresh_sequence() {
    let fresh: Vec<u64> = FibGenerator::new().take(8).collect();
    assert_eq!(fresh, [0, 1, 1, 2, 3, 5, 8, 13]);

    let mut seq = FibGenerator::new();
    seq.by_ref().take(17).for_each(drop);
    seq.reset();
    let after_reset: Vec<u64> = seq.take(8).collect();
    assert_eq!(after_reset, fresh);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Recursive, iterative, and matrix agree on [0, 30].
    #[test]
    fn small_evaluators_agree(n in 0u64..=30) {
        let rec = compute_core(&NaiveRecursive::new(), n);
        let it = compute_core(&Iterative::new(), n);
        let mx = compute_core(&MatrixExponentiation::new(), n);
        prop_assert_eq!(rec, it, "recursive != iterative at n={}", n);
        prop_assert_eq!(it, mx, "iterative != matrix at n={}", n);
    }

    /// The closed form is exact up to its documented limit.
    #[test]
    fn golden_ratio_exact_in_range(n in 0u64..=GOLDEN_RATIO_EXACT_LIMIT) {
        let it = compute_core(&Iterative::new(), n);
        let gr = compute_core(&GoldenRatio::new(), n);
        prop_assert_eq!(it, gr, "iterative != golden ratio at n={}", n);
    }

    /// Matrix and table agree over the whole u64 range.
    #[test]
    fn matrix_matches_table(n in 0u64..=MAX_FIB_U64) {
        let mx = compute_core(&MatrixExponentiation::new(), n);
        let table = compute_core(&ConstTable::new(), n);
        prop_assert_eq!(mx, table, "matrix != table at n={}", n);
    }

    /// F(n) + F(n+1) == F(n+2).
    #[test]
    fn fibonacci_addition_property(n in 0u64..=MAX_FIB_U64 - 2) {
        let algo = Iterative::new();
        let f0 = compute_core(&algo, n);
        let f1 = compute_core(&algo, n + 1);
        let f2 = compute_core(&algo, n + 2);
        prop_assert_eq!(f0 + f1, f2, "F({}) + F({}) != F({})", n, n + 1, n + 2);
    }

    /// Generator's kth term is F(k).
    #[test]
    fn generator_matches_iterative(k in 0usize..93) {
        let term = FibGenerator::new().nth(k).unwrap();
        prop_assert_eq!(term, compute_core(&Iterative::new(), k as u64));
    }

    /// Multiplying by the identity on either side changes nothing.
    #[test]
    fn identity_is_neutral(a in 0u64..1 << 20, b in 0u64..1 << 20, c in 0u64..1 << 20, d in 0u64..1 << 20) {
        let m = Matrix2::new(a, b, c, d);

        let mut right = m;
        right.multiply(&Matrix2::identity()).unwrap();
        prop_assert_eq!(right, m);

        let mut left = Matrix2::identity();
        left.multiply(&m).unwrap();
        prop_assert_eq!(left, m);
    }

    /// Evaluators are pure: same input, same output.
    #[test]
    fn repeated_calls_are_stable(n in -5i64..=40) {
        prop_assert_eq!(fibonacci_power(n), fibonacci_power(n));
        prop_assert_eq!(fibonacci_golden_ratio(n), fibonacci_golden_ratio(n));
        prop_assert_eq!(fibonacci_iterative(n), fibonacci_iterative(n));
    }
}
