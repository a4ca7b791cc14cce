//! # strassen-core
//!
//! Core library for Strassen-rs: a dense integer matrix type, the classical
//! triple-loop multiplier, and a hybrid Strassen engine that fans its seven
//! sub-products out over a rayon fork-join pool.

pub mod blocks;
pub mod classical;
pub mod constants;
pub mod error;
pub mod fork_join;
pub mod generate;
pub mod matrix;
pub mod options;
pub mod registry;
pub mod strassen;
pub mod strategy;

// Re-exports
pub use blocks::Quadrants;
pub use classical::usual_multiply;
pub use constants::{
    exit_codes, DEFAULT_ELEMENT_RANGE, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_STRASSEN_THRESHOLD,
};
pub use error::MatrixError;
pub use fork_join::ExecutionMode;
pub use matrix::{Element, Matrix};
pub use options::Options;
pub use registry::{DefaultFactory, MultiplierFactory};
pub use strassen::{padded_dimension, StrassenEngine};
pub use strategy::{ClassicalMultiplier, Multiplier, StrassenMultiplier};

/// Multiply `a x b` with the parallel Strassen engine and default options.
///
/// For custom thresholds or sequential execution, build a
/// [`StrassenEngine`] directly.
///
/// # Example
/// ```
/// use strassen_core::{multiply, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let id = Matrix::identity(2).unwrap();
/// assert_eq!(multiply(&a, &id).unwrap(), a);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    StrassenEngine::parallel().multiply(a, b)
}
