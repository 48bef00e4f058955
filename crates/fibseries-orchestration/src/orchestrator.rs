//! Core orchestration: side-by-side execution and result analysis.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, warn};

use fibseries_core::calculator::{Calculator, FibError};
use fibseries_core::options::Options;

use crate::interfaces::CalculationResult;

fn run_one(calc: &dyn Calculator, n: i64, opts: &Options) -> CalculationResult {
    let start = Instant::now();
    let outcome = calc.calculate(n, opts);
    let duration = start.elapsed();
    debug!(algorithm = calc.name(), ?duration, ok = outcome.is_ok(), "calculator finished");
    CalculationResult {
        algorithm: calc.name().to_string(),
        outcome,
        duration,
    }
}

/// Execute calculations with all given calculators.
///
/// A single calculator runs inline; several run in parallel on the rayon pool.
/// Calculators that have not started by the time `timeout` has elapsed report
/// [`FibError::Timeout`] instead of running.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    n: i64,
    opts: &Options,
    timeout: Option<Duration>,
) -> Vec<CalculationResult> {
    if calculators.len() == 1 {
        return vec![run_one(calculators[0].as_ref(), n, opts)];
    }

    let start_time = Instant::now();
    calculators
        .par_iter()
        .map(|calc| {
            if let Some(timeout) = timeout {
                if start_time.elapsed() >= timeout {
                    return CalculationResult {
                        algorithm: calc.name().to_string(),
                        outcome: Err(FibError::Timeout(format!("{timeout:?}"))),
                        duration: Duration::ZERO,
                    };
                }
            }
            run_one(calc.as_ref(), n, opts)
        })
        .collect()
}

/// Analyze comparison results for mismatches.
///
/// Failed entries are ignored. Every successful value must equal the first
/// successful one.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let mut valid = results
        .iter()
        .filter_map(|r| r.value().map(|v| (r.algorithm.as_str(), v)));

    let Some((first_algo, first_value)) = valid.next() else {
        return Err(FibError::Calculation("no valid results".into()));
    };

    for (algo, value) in valid {
        if value != first_value {
            warn!(
                expected = first_value,
                expected_from = first_algo,
                got = value,
                got_from = algo,
                "algorithms disagree"
            );
            return Err(FibError::Mismatch);
        }
    }

    Ok(())
}
