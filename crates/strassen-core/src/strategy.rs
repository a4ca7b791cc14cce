//! Multiplication strategy trait and implementations.
//!
//! `Multiplier` is the narrow interface consumed by orchestration and
//! calibration. Strategies cover the classical oracle and the Strassen
//! engine in both execution modes.

use crate::classical::usual_multiply;
use crate::error::MatrixError;
use crate::fork_join::ExecutionMode;
use crate::matrix::Matrix;
use crate::options::Options;
use crate::strassen::StrassenEngine;

/// Narrow interface for matrix multiplication.
pub trait Multiplier: Send + Sync {
    /// Multiply `a x b`.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError>;

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// Classical triple-loop multiplication.
pub struct ClassicalMultiplier;

impl ClassicalMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassicalMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for ClassicalMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        usual_multiply(a, b)
    }

    fn name(&self) -> &'static str {
        "Classical"
    }
}

/// Strassen multiplication, sequential or fork-join depending on the options.
pub struct StrassenMultiplier {
    engine: StrassenEngine,
}

impl StrassenMultiplier {
    /// Wrap an engine built from `options`.
    pub fn with_options(options: Options) -> Result<Self, MatrixError> {
        Ok(Self {
            engine: StrassenEngine::new(options)?,
        })
    }

    /// Sequential Strassen with the given recursion threshold.
    pub fn sequential(threshold: usize) -> Result<Self, MatrixError> {
        Self::with_options(Options {
            threshold,
            ..Options::sequential()
        })
    }

    /// Parallel Strassen with the given thresholds.
    pub fn parallel(threshold: usize, parallel_threshold: usize) -> Result<Self, MatrixError> {
        Self::with_options(Options {
            threshold,
            parallel_threshold,
            ..Options::default()
        })
    }

    /// Options of the wrapped engine.
    #[must_use]
    pub fn options(&self) -> &Options {
        self.engine.options()
    }
}

impl Multiplier for StrassenMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        self.engine.multiply(a, b)
    }

    fn name(&self) -> &'static str {
        match self.engine.options().mode {
            ExecutionMode::Sequential => "Strassen",
            ExecutionMode::Parallel => "ParallelStrassen",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::random_square;

    #[test]
    fn names() {
        assert_eq!(ClassicalMultiplier::new().name(), "Classical");
        assert_eq!(StrassenMultiplier::sequential(64).unwrap().name(), "Strassen");
        assert_eq!(
            StrassenMultiplier::parallel(64, 128).unwrap().name(),
            "ParallelStrassen"
        );
    }

    #[test]
    fn strategies_agree() {
        let a = random_square(40, 1).unwrap();
        let b = random_square(40, 2).unwrap();
        let strategies: Vec<Box<dyn Multiplier>> = vec![
            Box::new(ClassicalMultiplier::new()),
            Box::new(StrassenMultiplier::sequential(8).unwrap()),
            Box::new(StrassenMultiplier::parallel(8, 16).unwrap()),
        ];
        let expected = strategies[0].multiply(&a, &b).unwrap();
        for s in &strategies[1..] {
            assert_eq!(s.multiply(&a, &b).unwrap(), expected, "{}", s.name());
        }
    }

    #[test]
    fn options_are_normalized() {
        let s = StrassenMultiplier::sequential(0).unwrap();
        assert_eq!(s.options().threshold, 64);
    }
}
