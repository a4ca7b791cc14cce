//! Benchmark runner for calibration.

use std::time::{Duration, Instant};

/// Run `warmup` untimed iterations, then time `samples` iterations individually.
pub fn benchmark_detailed<F>(name: &str, warmup: u32, samples: u32, mut f: F) -> BenchmarkResult
where
    F: FnMut(),
{
    for _ in 0..warmup {
        f();
    }

    let durations = (0..samples.max(1))
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();

    BenchmarkResult::from_samples(name, durations)
}

/// Summary statistics of one benchmark.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub name: String,
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub samples: u32,
}

impl BenchmarkResult {
    /// Summarize raw sample durations.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_samples(name: &str, mut durations: Vec<Duration>) -> Self {
        durations.sort_unstable();
        let count = durations.len();
        let median = match count {
            0 => Duration::ZERO,
            n if n % 2 == 1 => durations[n / 2],
            n => (durations[n / 2 - 1] + durations[n / 2]) / 2,
        };
        let total: Duration = durations.iter().sum();
        Self {
            name: name.to_string(),
            mean: if count == 0 {
                Duration::ZERO
            } else {
                total / count as u32
            },
            median,
            min: durations.first().copied().unwrap_or_default(),
            max: durations.last().copied().unwrap_or_default(),
            samples: count as u32,
        }
    }
}
