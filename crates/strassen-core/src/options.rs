//! Multiplication options and configuration.

use crate::constants::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_STRASSEN_THRESHOLD};
use crate::fork_join::ExecutionMode;

/// Options for the Strassen engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Padded dimension at or below which classical multiplication is used.
    pub threshold: usize,
    /// Padded dimension at or above which sub-products are forked in parallel mode.
    pub parallel_threshold: usize,
    /// Sequential or parallel scheduling of the seven sub-products.
    pub mode: ExecutionMode,
    /// Dedicated worker count (0 = global rayon pool).
    pub num_threads: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_STRASSEN_THRESHOLD,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            mode: ExecutionMode::Parallel,
            num_threads: 0,
        }
    }
}

impl Options {
    /// Sequential options with default thresholds.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            ..Self::default()
        }
    }

    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.threshold == 0 {
            self.threshold = DEFAULT_STRASSEN_THRESHOLD;
        }
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.threshold, 64);
        assert_eq!(opts.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert_eq!(opts.mode, ExecutionMode::Parallel);
        assert_eq!(opts.num_threads, 0);
    }

    #[test]
    fn normalize_zero_thresholds() {
        let opts = Options {
            threshold: 0,
            parallel_threshold: 0,
            ..Default::default()
        };
        let normalized = opts.normalize();
        assert_eq!(normalized.threshold, DEFAULT_STRASSEN_THRESHOLD);
        assert_eq!(normalized.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn normalize_keeps_explicit_values() {
        let opts = Options {
            threshold: 16,
            parallel_threshold: 32,
            ..Options::sequential()
        }
        .normalize();
        assert_eq!(opts.threshold, 16);
        assert_eq!(opts.parallel_threshold, 32);
        assert_eq!(opts.mode, ExecutionMode::Sequential);
    }
}
