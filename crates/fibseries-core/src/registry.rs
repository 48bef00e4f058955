//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
use crate::compile_time::ConstTable;
use crate::golden_ratio::GoldenRatio;
use crate::iterative::Iterative;
use crate::matrix::MatrixExponentiation;
use crate::recursive::NaiveRecursive;

/// Registered calculator names, slowest first.
pub const CALCULATOR_NAMES: [&str; 5] = ["recursive", "iterative", "matrix", "golden", "const"];

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_core(name: &str) -> Result<Arc<dyn CoreCalculator>, FibError> {
        match name {
            "recursive" => Ok(Arc::new(NaiveRecursive::new())),
            "iterative" => Ok(Arc::new(Iterative::new())),
            "matrix" | "power" => Ok(Arc::new(MatrixExponentiation::new())),
            "golden" | "binet" => Ok(Arc::new(GoldenRatio::new())),
            "const" | "table" => Ok(Arc::new(ConstTable::new())),
            _ => Err(FibError::Config(format!("unknown calculator: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        // Check cache first
        if let Some(calc) = self.cache.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        // Create and cache
        let core = Self::create_core(name)?;
        debug!(name, algorithm = core.name(), "creating calculator");
        let calc: Arc<dyn Calculator> = Arc::new(FibCalculator::new(core));
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        CALCULATOR_NAMES.to_vec()
    }
}
