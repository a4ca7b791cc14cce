//! # strassen-orchestration
//!
//! Multiplier selection, concurrent execution, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod selection;

pub use interfaces::{MultiplicationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_multiplications};
pub use selection::get_multipliers_to_run;
