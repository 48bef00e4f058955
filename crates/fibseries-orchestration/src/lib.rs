//! # fibseries-orchestration
//!
//! Run several Fibonacci calculators on the same index, time them, and
//! cross-validate their answers.

pub mod calculator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use calculator_selection::get_calculators_to_run;
pub use interfaces::CalculationResult;
pub use orchestrator::{analyze_comparison_results, execute_calculations};
