//! Seeded random operand generation.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::DEFAULT_ELEMENT_RANGE;
use crate::error::MatrixError;
use crate::matrix::{Element, Matrix};

/// Matrix with elements drawn uniformly from `range`, reproducible by `seed`.
pub fn random_matrix(
    rows: usize,
    columns: usize,
    range: Range<Element>,
    seed: u64,
) -> Result<Matrix, MatrixError> {
    if range.is_empty() {
        return Err(MatrixError::Config(format!(
            "empty element range {}..{}",
            range.start, range.end
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Matrix::from_fn(rows, columns, |_, _| rng.gen_range(range.clone()))
}

/// Square random matrix with elements in [`DEFAULT_ELEMENT_RANGE`].
pub fn random_square(n: usize, seed: u64) -> Result<Matrix, MatrixError> {
    random_matrix(n, n, DEFAULT_ELEMENT_RANGE, seed)
}
