//! Error type shared by every matrix operation.

/// Error type for matrix construction, access and multiplication.
///
/// All variants describe input-contract violations; none are transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Construction from empty, ragged, or zero-length rows.
    #[error("shape error: {0}")]
    Shape(String),

    /// Element-wise operation on matrices of different shapes.
    #[error("size mismatch: {left_rows}x{left_columns} vs {right_rows}x{right_columns}")]
    SizeMismatch {
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },

    /// Multiplication where `a.columns != b.rows`.
    #[error("dimension mismatch: a.columns ({a_columns}) != b.rows ({b_rows})")]
    DimensionMismatch { a_columns: usize, b_rows: usize },

    /// Split of a non-square or odd matrix, or pad/truncate to an unreachable target.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Element access outside the matrix.
    #[error("index ({row}, {column}) out of bounds for {rows}x{columns} matrix")]
    Index {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Configuration error (unknown multiplier, bad thread pool setup).
    #[error("configuration error: {0}")]
    Config(String),

    /// A computation failed for a reason other than bad input.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Results from different multipliers don't match.
    #[error("result mismatch between multipliers")]
    Mismatch,
}
