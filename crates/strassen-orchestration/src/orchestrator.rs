//! Core orchestration: concurrent execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use strassen_core::{Matrix, MatrixError, Multiplier};

use crate::interfaces::MultiplicationResult;

/// Multiply `a x b` with every given multiplier.
///
/// A single multiplier runs on the calling thread; several run concurrently.
/// Results keep the order of `multipliers`.
pub fn execute_multiplications(
    multipliers: &[Arc<dyn Multiplier>],
    a: &Matrix,
    b: &Matrix,
) -> Vec<MultiplicationResult> {
    let run = |m: &Arc<dyn Multiplier>| {
        let start = Instant::now();
        let outcome = m.multiply(a, b);
        let duration = start.elapsed();
        debug!(algorithm = m.name(), ?duration, ok = outcome.is_ok(), "multiplication finished");
        MultiplicationResult {
            algorithm: m.name().to_string(),
            outcome,
            duration,
        }
    };

    if multipliers.len() == 1 {
        return vec![run(&multipliers[0])];
    }

    multipliers.par_iter().map(run).collect()
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[MultiplicationResult]) -> Result<(), MatrixError> {
    let mut valid = results.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(first) = valid.next() else {
        return Err(MatrixError::Calculation("no valid results".into()));
    };

    if valid.any(|product| product != first) {
        return Err(MatrixError::Mismatch);
    }
    Ok(())
}
