//! Orchestration interfaces.

use std::time::Duration;

use strassen_core::{Matrix, MatrixError};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a single multiplication result.
    fn present_result(&self, algorithm: &str, product: &Matrix, duration: Duration);

    /// Present a comparison of several runs.
    fn present_comparison(&self, results: &[MultiplicationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication run.
#[derive(Debug, Clone)]
pub struct MultiplicationResult {
    /// Multiplier name.
    pub algorithm: String,
    /// The product or a structured error.
    pub outcome: Result<Matrix, MatrixError>,
    /// Wall-clock duration.
    pub duration: Duration,
}

impl MultiplicationResult {
    /// Whether the multiplication produced a product.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplication_result() {
        let result = MultiplicationResult {
            algorithm: "Strassen".into(),
            outcome: Ok(Matrix::identity(2).unwrap()),
            duration: Duration::from_millis(3),
        };
        assert_eq!(result.algorithm, "Strassen");
        assert!(result.is_ok());
    }

    #[test]
    fn failed_result() {
        let result = MultiplicationResult {
            algorithm: "Classical".into(),
            outcome: Err(MatrixError::DimensionMismatch {
                a_columns: 2,
                b_rows: 3,
            }),
            duration: Duration::ZERO,
        };
        assert!(!result.is_ok());
    }
}
