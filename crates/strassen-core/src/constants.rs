//! Constants for multiplication thresholds and configuration.

/// Default padded dimension at or below which the classical algorithm is used.
pub const DEFAULT_STRASSEN_THRESHOLD: usize = 64;

/// Default padded dimension at or above which the seven sub-products are forked.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 128;

/// Default half-open range for randomly generated elements.
pub const DEFAULT_ELEMENT_RANGE: std::ops::Range<i64> = -1000..1000;

/// Exit codes for the command-line entry point.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Multiplier results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
