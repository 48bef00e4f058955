//! Calculator selection logic.

use std::sync::Arc;

use fibseries_core::calculator::{Calculator, FibError};
use fibseries_core::registry::CalculatorFactory;

/// Get calculators to run based on algorithm selection.
///
/// `"all"` selects every registered calculator; any other value is looked up
/// by name.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => {
            let calc = factory.get(name)?;
            Ok(vec![calc])
        }
    }
}
