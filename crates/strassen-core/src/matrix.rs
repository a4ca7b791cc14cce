//! Dense integer matrix with validated construction and element-wise arithmetic.
//!
//! Shape (`rows`, `columns`) is fixed at construction; element values are
//! mutable in place through [`Matrix::set`]. Every combining operation
//! allocates a fresh result and never mutates an operand.

use std::fmt;

use crate::error::MatrixError;

/// Scalar type stored in a [`Matrix`].
///
/// Arithmetic wraps on overflow, so every multiplier computes the same
/// product modulo 2^64.
pub type Element = i64;

/// A rectangular grid of signed integers stored row-major.
///
/// Equality and hashing are structural: same shape and same elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<Element>,
}

impl Matrix {
    /// Build a matrix from row data.
    ///
    /// Fails with [`MatrixError::Shape`] on zero rows, zero-length rows,
    /// or rows of inconsistent length.
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self, MatrixError> {
        let Some(first) = rows.first() else {
            return Err(MatrixError::Shape("matrix must have at least one row".into()));
        };
        let columns = first.len();
        if columns == 0 {
            return Err(MatrixError::Shape("rows must not be empty".into()));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(MatrixError::Shape(format!(
                "row {i} has {} elements, expected {columns}",
                row.len()
            )));
        }

        let n_rows = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: n_rows,
            columns,
            data,
        })
    }

    /// Build a matrix from flat row-major data.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<Element>) -> Result<Self, MatrixError> {
        check_dims(rows, columns)?;
        if data.len() != rows * columns {
            return Err(MatrixError::Shape(format!(
                "data length {} does not match {rows}x{columns}",
                data.len()
            )));
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Zero-filled matrix of the given shape.
    pub fn zeros(rows: usize, columns: usize) -> Result<Self, MatrixError> {
        check_dims(rows, columns)?;
        Ok(Self::zeroed(rows, columns))
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        Self::from_fn(n, n, |i, j| Element::from(i == j))
    }

    /// Build a matrix by evaluating `f(row, column)` for every position.
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Result<Self, MatrixError>
    where
        F: FnMut(usize, usize) -> Element,
    {
        check_dims(rows, columns)?;
        let mut data = Vec::with_capacity(rows * columns);
        for i in 0..rows {
            for j in 0..columns {
                data.push(f(i, j));
            }
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Allocation without shape validation; callers guarantee non-zero dims.
    pub(crate) fn zeroed(rows: usize, columns: usize) -> Self {
        debug_assert!(rows > 0 && columns > 0);
        Self {
            rows,
            columns,
            data: vec![0; rows * columns],
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Whether `rows == columns`.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Row-major view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// Borrow row `i`.
    pub fn row(&self, i: usize) -> Result<&[Element], MatrixError> {
        if i >= self.rows {
            return Err(self.index_error(i, 0));
        }
        Ok(self.row_slice(i))
    }

    /// Element at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<Element, MatrixError> {
        if i >= self.rows || j >= self.columns {
            return Err(self.index_error(i, j));
        }
        Ok(self.data[i * self.columns + j])
    }

    /// Overwrite the element at `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: Element) -> Result<(), MatrixError> {
        if i >= self.rows || j >= self.columns {
            return Err(self.index_error(i, j));
        }
        self.data[i * self.columns + j] = value;
        Ok(())
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Element>> {
        self.data.chunks_exact(self.columns).map(<[_]>::to_vec).collect()
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, Element::wrapping_add)
    }

    /// Element-wise difference.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, Element::wrapping_sub)
    }

    #[inline]
    pub(crate) fn row_slice(&self, i: usize) -> &[Element] {
        let start = i * self.columns;
        &self.data[start..start + self.columns]
    }

    #[inline]
    pub(crate) fn row_slice_mut(&mut self, i: usize) -> &mut [Element] {
        let start = i * self.columns;
        &mut self.data[start..start + self.columns]
    }

    fn zip_with(
        &self,
        other: &Matrix,
        op: fn(Element, Element) -> Element,
    ) -> Result<Matrix, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::SizeMismatch {
                left_rows: self.rows,
                left_columns: self.columns,
                right_rows: other.rows,
                right_columns: other.columns,
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&x, &y)| op(x, y))
            .collect();
        Ok(Matrix {
            rows: self.rows,
            columns: self.columns,
            data,
        })
    }

    fn index_error(&self, row: usize, column: usize) -> MatrixError {
        MatrixError::Index {
            row,
            column,
            rows: self.rows,
            columns: self.columns,
        }
    }
}

fn check_dims(rows: usize, columns: usize) -> Result<(), MatrixError> {
    if rows == 0 || columns == 0 {
        return Err(MatrixError::Shape(format!(
            "dimensions must be positive, got {rows}x{columns}"
        )));
    }
    Ok(())
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks_exact(self.columns).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
