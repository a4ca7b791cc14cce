//! Error handling and exit codes.

use strassen_core::constants::exit_codes;
use strassen_core::MatrixError;

/// Map a matrix error to the process exit code.
pub fn handle_error(err: &MatrixError) -> i32 {
    match err {
        MatrixError::Config(_) => exit_codes::ERROR_CONFIG,
        MatrixError::Mismatch => exit_codes::ERROR_MISMATCH,
        MatrixError::Shape(_)
        | MatrixError::SizeMismatch { .. }
        | MatrixError::DimensionMismatch { .. }
        | MatrixError::InvalidDimension(_)
        | MatrixError::Index { .. }
        | MatrixError::Calculation(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for an application error, looking through `anyhow` context.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<MatrixError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
