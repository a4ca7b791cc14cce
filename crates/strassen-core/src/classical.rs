//! Classical triple-loop multiplication.
//!
//! Production path below the Strassen threshold and the correctness
//! oracle for every other multiplier.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Compute `C[i][j] = sum_k A[i][k] * B[k][j]`.
///
/// Loops run in i-k-j order so the inner loop walks rows of both `B` and `C`.
pub fn usual_multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    check_compatible(a, b)?;

    let mut out = Matrix::zeroed(a.rows(), b.columns());
    for i in 0..a.rows() {
        let out_row = out.row_slice_mut(i);
        for (k, &aik) in a.row_slice(i).iter().enumerate() {
            if aik == 0 {
                continue;
            }
            for (c, &bkj) in out_row.iter_mut().zip(b.row_slice(k)) {
                *c = c.wrapping_add(aik.wrapping_mul(bkj));
            }
        }
    }
    Ok(out)
}

/// Reject operands whose inner dimensions differ.
pub(crate) fn check_compatible(a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    if a.columns() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            a_columns: a.columns(),
            b_rows: b.rows(),
        });
    }
    Ok(())
}
