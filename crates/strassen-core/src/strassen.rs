//! Hybrid Strassen multiplication engine.
//!
//! Operands whose padded dimension is at or below the threshold go straight
//! to the classical multiplier. Larger operands are zero-padded to a
//! power-of-two square, multiplied recursively with seven sub-products per
//! level, and truncated back to `a.rows x b.columns`.

use rayon::ThreadPool;
use tracing::{debug, trace};

use crate::blocks::Quadrants;
use crate::classical::{check_compatible, usual_multiply};
use crate::error::MatrixError;
use crate::fork_join::{build_pool, join_products, ExecutionMode};
use crate::matrix::Matrix;
use crate::options::Options;

/// Smallest power of two covering `a.rows`, `a.columns` and `b.columns`.
#[must_use]
pub fn padded_dimension(a: &Matrix, b: &Matrix) -> usize {
    a.rows()
        .max(a.columns())
        .max(b.columns())
        .next_power_of_two()
}

/// Strassen engine configured with a threshold and an execution mode.
pub struct StrassenEngine {
    options: Options,
    pool: Option<ThreadPool>,
}

impl StrassenEngine {
    /// Create an engine, building a dedicated pool if `num_threads > 0`.
    pub fn new(options: Options) -> Result<Self, MatrixError> {
        let options = options.normalize();
        let pool = match (options.mode, options.num_threads) {
            (ExecutionMode::Parallel, n) if n > 0 => Some(build_pool(n)?),
            _ => None,
        };
        Ok(Self { options, pool })
    }

    /// Sequential engine with default thresholds.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            options: Options::sequential(),
            pool: None,
        }
    }

    /// Parallel engine on the global rayon pool with default thresholds.
    #[must_use]
    pub fn parallel() -> Self {
        Self {
            options: Options::default(),
            pool: None,
        }
    }

    /// Normalized options this engine runs with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Multiply `a x b`.
    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        check_compatible(a, b)?;

        let n = padded_dimension(a, b);
        if n <= self.options.threshold {
            trace!(n, threshold = self.options.threshold, "classical base case");
            return usual_multiply(a, b);
        }

        debug!(
            a_rows = a.rows(),
            inner = a.columns(),
            b_columns = b.columns(),
            padded = n,
            mode = self.options.mode.name(),
            "strassen multiply"
        );
        let a_padded = a.pad_to_square(n)?;
        let b_padded = b.pad_to_square(n)?;

        let product = match &self.pool {
            Some(pool) => pool.install(|| self.multiply_square(&a_padded, &b_padded)),
            None => self.multiply_square(&a_padded, &b_padded),
        }?;

        product.truncate(a.rows(), b.columns())
    }

    /// Recursive step on equal power-of-two squares.
    fn multiply_square(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        let n = a.rows();
        if n <= self.options.threshold {
            return usual_multiply(a, b);
        }
        trace!(n, "strassen level");

        let Quadrants {
            top_left: a11,
            top_right: a12,
            bottom_left: a21,
            bottom_right: a22,
        } = a.split()?;
        let Quadrants {
            top_left: b11,
            top_right: b12,
            bottom_left: b21,
            bottom_right: b22,
        } = b.split()?;

        let s1 = a11.add(&a22)?;
        let t1 = b11.add(&b22)?;
        let s2 = a21.add(&a22)?;
        let t3 = b12.subtract(&b22)?;
        let t4 = b21.subtract(&b11)?;
        let s5 = a11.add(&a12)?;
        let s6 = a21.subtract(&a11)?;
        let t6 = b11.add(&b12)?;
        let s7 = a12.subtract(&a22)?;
        let t7 = b21.add(&b22)?;

        let pairs = [
            (&s1, &t1),
            (&s2, &b11),
            (&a11, &t3),
            (&a22, &t4),
            (&s5, &b22),
            (&s6, &t6),
            (&s7, &t7),
        ];

        let mode = if n >= self.options.parallel_threshold {
            self.options.mode
        } else {
            ExecutionMode::Sequential
        };
        let products = join_products(mode, &pairs, |x, y| self.multiply_square(x, y))?;
        let [p1, p2, p3, p4, p5, p6, p7]: [Matrix; 7] = products
            .try_into()
            .map_err(|v: Vec<Matrix>| {
                MatrixError::Calculation(format!("expected 7 sub-products, got {}", v.len()))
            })?;

        let quadrants = Quadrants {
            top_left: p1.add(&p4)?.subtract(&p5)?.add(&p7)?,
            top_right: p3.add(&p5)?,
            bottom_left: p2.add(&p4)?,
            bottom_right: p1.subtract(&p2)?.add(&p3)?.add(&p6)?,
        };
        Ok(Matrix::from_quadrants(&quadrants))
    }
}

impl Default for StrassenEngine {
    fn default() -> Self {
        Self::parallel()
    }
}
