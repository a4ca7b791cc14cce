//! Quadrant decomposition, composition, zero padding and truncation.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// The four equal-size quadrants of an even square matrix.
///
/// Each quadrant is an independently owned copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants {
    pub top_left: Matrix,
    pub top_right: Matrix,
    pub bottom_left: Matrix,
    pub bottom_right: Matrix,
}

impl Matrix {
    /// Zero-extend to a `target x target` square.
    ///
    /// The top-left `rows x columns` block equals `self`, everything else is zero.
    pub fn pad_to_square(&self, target: usize) -> Result<Matrix, MatrixError> {
        if target < self.rows().max(self.columns()) {
            return Err(MatrixError::InvalidDimension(format!(
                "cannot pad {}x{} matrix to {target}x{target}",
                self.rows(),
                self.columns()
            )));
        }
        let mut padded = Matrix::zeroed(target, target);
        let columns = self.columns();
        for i in 0..self.rows() {
            padded.row_slice_mut(i)[..columns].copy_from_slice(self.row_slice(i));
        }
        Ok(padded)
    }

    /// Copy out the top-left `rows x columns` block.
    pub fn truncate(&self, rows: usize, columns: usize) -> Result<Matrix, MatrixError> {
        if rows == 0 || columns == 0 || rows > self.rows() || columns > self.columns() {
            return Err(MatrixError::InvalidDimension(format!(
                "cannot truncate {}x{} matrix to {rows}x{columns}",
                self.rows(),
                self.columns()
            )));
        }
        if (rows, columns) == self.shape() {
            return Ok(self.clone());
        }
        let mut out = Matrix::zeroed(rows, columns);
        for i in 0..rows {
            out.row_slice_mut(i)
                .copy_from_slice(&self.row_slice(i)[..columns]);
        }
        Ok(out)
    }

    /// Split a `2n x 2n` matrix into four `n x n` quadrants.
    pub fn split(&self) -> Result<Quadrants, MatrixError> {
        if !self.is_square() || self.rows() % 2 != 0 {
            return Err(MatrixError::InvalidDimension(format!(
                "split requires an even square matrix, got {}x{}",
                self.rows(),
                self.columns()
            )));
        }
        let n = self.rows() / 2;
        let mut top_left = Matrix::zeroed(n, n);
        let mut top_right = Matrix::zeroed(n, n);
        let mut bottom_left = Matrix::zeroed(n, n);
        let mut bottom_right = Matrix::zeroed(n, n);
        for i in 0..n {
            let (left, right) = self.row_slice(i).split_at(n);
            top_left.row_slice_mut(i).copy_from_slice(left);
            top_right.row_slice_mut(i).copy_from_slice(right);

            let (left, right) = self.row_slice(i + n).split_at(n);
            bottom_left.row_slice_mut(i).copy_from_slice(left);
            bottom_right.row_slice_mut(i).copy_from_slice(right);
        }
        Ok(Quadrants {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        })
    }

    /// Assemble four `n x n` quadrants into a `2n x 2n` matrix.
    ///
    /// The caller guarantees all four quadrants are square with equal dimension.
    pub fn from_quadrants(q: &Quadrants) -> Matrix {
        let n = q.top_left.rows();
        debug_assert!(
            [&q.top_left, &q.top_right, &q.bottom_left, &q.bottom_right]
                .iter()
                .all(|m| m.shape() == (n, n)),
            "quadrants must be square and of equal size"
        );
        let mut out = Matrix::zeroed(2 * n, 2 * n);
        for i in 0..n {
            let (left, right) = out.row_slice_mut(i).split_at_mut(n);
            left.copy_from_slice(q.top_left.row_slice(i));
            right.copy_from_slice(q.top_right.row_slice(i));

            let (left, right) = out.row_slice_mut(i + n).split_at_mut(n);
            left.copy_from_slice(q.bottom_left.row_slice(i));
            right.copy_from_slice(q.bottom_right.row_slice(i));
        }
        out
    }
}
