//! Calibration engine.

use std::path::PathBuf;

use strassen_core::{MatrixError, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_STRASSEN_THRESHOLD};

use crate::microbench;
use crate::profile::{self, CalibrationProfile};

/// Mode of calibration.
#[derive(Debug, Clone)]
pub enum CalibrationMode {
    /// Full calibration: threshold sweep plus parallel overhead measurement.
    Full,
    /// Quick calibration: short threshold sweep on small operands.
    Quick,
    /// Cached: load from a profile file, defaulting if unusable.
    Cached(PathBuf),
}

/// Progress callback for calibration.
pub type ProgressCallback = Box<dyn Fn(CalibrationProgress) + Send>;

/// Progress information during calibration.
#[derive(Debug, Clone)]
pub struct CalibrationProgress {
    /// Current step name.
    pub step: String,
    /// Current step number (1-based).
    pub current: usize,
    /// Total number of steps.
    pub total: usize,
}

/// Calibration engine that determines tuned thresholds.
pub struct CalibrationEngine {
    mode: CalibrationMode,
    progress_cb: Option<ProgressCallback>,
}

impl CalibrationEngine {
    /// Create a new calibration engine.
    #[must_use]
    pub fn new(mode: CalibrationMode) -> Self {
        Self {
            mode,
            progress_cb: None,
        }
    }

    /// Set a progress callback.
    #[must_use]
    pub fn with_progress(mut self, cb: ProgressCallback) -> Self {
        self.progress_cb = Some(cb);
        self
    }

    /// Run calibration and produce a profile.
    pub fn calibrate(&self) -> Result<CalibrationProfile, MatrixError> {
        match &self.mode {
            CalibrationMode::Full => self.sweep(256, &[16, 32, 64, 128], &[128, 256, 512]),
            CalibrationMode::Quick => self.sweep(128, &[16, 32, 64], &[]),
            CalibrationMode::Cached(path) => Ok(Self::load_cached(path)),
        }
    }

    fn report_progress(&self, step: &str, current: usize, total: usize) {
        if let Some(cb) = &self.progress_cb {
            cb(CalibrationProgress {
                step: step.to_string(),
                current,
                total,
            });
        }
    }

    fn sweep(
        &self,
        dimension: usize,
        candidates: &[usize],
        parallel_sizes: &[usize],
    ) -> Result<CalibrationProfile, MatrixError> {
        let total = if parallel_sizes.is_empty() { 2 } else { 3 };

        self.report_progress("Sweeping recursion thresholds", 1, total);
        let points = microbench::sweep_thresholds(dimension, candidates)?;
        let strassen_threshold =
            microbench::best_threshold(&points).unwrap_or(DEFAULT_STRASSEN_THRESHOLD);
        tracing::info!(strassen_threshold, dimension, "recursion threshold selected");

        let mut parallel_threshold = DEFAULT_PARALLEL_THRESHOLD.max(strassen_threshold * 2);
        if !parallel_sizes.is_empty() {
            self.report_progress("Measuring parallel overhead", 2, total);
            for &n in parallel_sizes.iter().filter(|&&n| n > strassen_threshold) {
                let s = microbench::measure_parallel_speedup(n, strassen_threshold)?;
                tracing::debug!(n, speedup = s.speedup, "parallel speedup");
                if s.speedup > 1.1 {
                    parallel_threshold = n;
                    break;
                }
            }
        }

        self.report_progress("Building profile", total, total);
        Ok(CalibrationProfile {
            version: profile::PROFILE_VERSION,
            strassen_threshold,
            parallel_threshold,
            num_cores: profile::num_cpus(),
            timestamp: profile::current_timestamp(),
        })
    }

    fn load_cached(path: &std::path::Path) -> CalibrationProfile {
        crate::io::load_validated_profile(path).unwrap_or_else(|| {
            tracing::warn!("Cached profile missing or unusable, using defaults");
            CalibrationProfile::default()
        })
    }
}
