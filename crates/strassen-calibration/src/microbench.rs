//! Micro-benchmarks for threshold calibration.

use std::time::Duration;

use strassen_core::generate::random_square;
use strassen_core::{ExecutionMode, Matrix, MatrixError, Multiplier, Options, StrassenMultiplier};

use crate::runner::{benchmark_detailed, BenchmarkResult};

const WARMUP: u32 = 1;
const SAMPLES: u32 = 3;

/// Timing of the sequential engine at one recursion threshold.
#[derive(Debug, Clone)]
pub struct ThresholdPoint {
    pub threshold: usize,
    pub median: Duration,
}

/// Sequential vs parallel timing at one dimension.
#[derive(Debug, Clone)]
pub struct ParallelSpeedup {
    pub dimension: usize,
    pub sequential: Duration,
    pub parallel: Duration,
    pub speedup: f64,
}

fn operands(n: usize) -> Result<(Matrix, Matrix), MatrixError> {
    Ok((random_square(n, 0x5eed)?, random_square(n, 0x5eed + 1)?))
}

/// Benchmark one multiplier on `n x n` random operands.
pub fn bench_multiplier(m: &dyn Multiplier, n: usize) -> Result<BenchmarkResult, MatrixError> {
    let (a, b) = operands(n)?;
    m.multiply(&a, &b)?;
    Ok(benchmark_detailed(m.name(), WARMUP, SAMPLES, || {
        std::hint::black_box(m.multiply(&a, &b).ok());
    }))
}

/// Time the sequential Strassen engine at each candidate threshold.
pub fn sweep_thresholds(n: usize, candidates: &[usize]) -> Result<Vec<ThresholdPoint>, MatrixError> {
    candidates
        .iter()
        .map(|&threshold| {
            let m = StrassenMultiplier::sequential(threshold)?;
            let result = bench_multiplier(&m, n)?;
            tracing::debug!(n, threshold, median = ?result.median, "threshold sample");
            Ok(ThresholdPoint {
                threshold,
                median: result.median,
            })
        })
        .collect()
}

/// Compare sequential and parallel Strassen at dimension `n`.
///
/// The parallel engine forks at every level so the measurement reflects
/// fan-out overhead at this size.
#[allow(clippy::cast_precision_loss)]
pub fn measure_parallel_speedup(n: usize, threshold: usize) -> Result<ParallelSpeedup, MatrixError> {
    let sequential = StrassenMultiplier::sequential(threshold)?;
    let parallel = StrassenMultiplier::with_options(Options {
        threshold,
        parallel_threshold: 1,
        mode: ExecutionMode::Parallel,
        num_threads: 0,
    })?;

    let seq = bench_multiplier(&sequential, n)?.median;
    let par = bench_multiplier(&parallel, n)?.median;
    let speedup = if par.is_zero() {
        1.0
    } else {
        seq.as_nanos() as f64 / par.as_nanos() as f64
    };

    Ok(ParallelSpeedup {
        dimension: n,
        sequential: seq,
        parallel: par,
        speedup,
    })
}

/// Fastest threshold of a sweep, or `None` if the sweep is empty.
#[must_use]
pub fn best_threshold(points: &[ThresholdPoint]) -> Option<usize> {
    points
        .iter()
        .min_by_key(|p| p.median)
        .map(|p| p.threshold)
}
