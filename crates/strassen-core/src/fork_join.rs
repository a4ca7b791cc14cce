//! Fork-join execution of independent sub-products.
//!
//! Parallel mode submits every pair to the current rayon pool and joins
//! them all before returning. Sequential mode runs the same closure in the
//! submitting thread.

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// How the seven Strassen sub-products are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Run every sub-product in the calling thread.
    Sequential,
    /// Fork sub-products onto the rayon worker pool.
    #[default]
    Parallel,
}

impl ExecutionMode {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

/// Evaluate `op` on every operand pair and join the results.
///
/// Products are returned in submission order. If any evaluation fails, the
/// first error in submission order is returned once all tasks have finished.
pub fn join_products<F>(
    mode: ExecutionMode,
    pairs: &[(&Matrix, &Matrix)],
    op: F,
) -> Result<Vec<Matrix>, MatrixError>
where
    F: Fn(&Matrix, &Matrix) -> Result<Matrix, MatrixError> + Sync,
{
    match mode {
        ExecutionMode::Sequential => pairs.iter().map(|&(a, b)| op(a, b)).collect(),
        ExecutionMode::Parallel => {
            let results: Vec<Result<Matrix, MatrixError>> =
                pairs.par_iter().map(|&(a, b)| op(a, b)).collect();
            results.into_iter().collect()
        }
    }
}

/// Build a dedicated worker pool with `num_threads` workers.
pub fn build_pool(num_threads: usize) -> Result<ThreadPool, MatrixError> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("strassen-worker-{i}"))
        .build()
        .map_err(|e| MatrixError::Config(format!("failed to create thread pool: {e}")))
}

/// Number of workers the global pool uses.
#[must_use]
pub fn default_parallelism() -> usize {
    rayon::current_num_threads()
}
