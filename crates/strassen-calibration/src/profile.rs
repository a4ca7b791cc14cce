//! Calibration profile (serializable).

use serde::{Deserialize, Serialize};

use strassen_core::{
    ExecutionMode, Options, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_STRASSEN_THRESHOLD,
};

/// Current profile format version.
pub const PROFILE_VERSION: u32 = 1;

/// Calibration profile containing tuned thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationProfile {
    /// Profile format version for compatibility checking.
    pub version: u32,
    /// Tuned recursion threshold.
    pub strassen_threshold: usize,
    /// Tuned fork threshold.
    pub parallel_threshold: usize,
    /// Number of CPU cores at calibration time.
    pub num_cores: usize,
    /// Calibration timestamp.
    pub timestamp: String,
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            strassen_threshold: DEFAULT_STRASSEN_THRESHOLD,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            num_cores: num_cpus(),
            timestamp: String::new(),
        }
    }
}

impl CalibrationProfile {
    /// Check if this profile is compatible with the current version.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == PROFILE_VERSION
    }

    /// Validate that thresholds are usable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.strassen_threshold > 0 && self.parallel_threshold > 0
    }

    /// Check whether the profile was measured on a machine with the same core count.
    #[must_use]
    pub fn matches_machine(&self) -> bool {
        self.num_cores == num_cpus()
    }

    /// Engine options carrying this profile's thresholds.
    #[must_use]
    pub fn to_options(&self, mode: ExecutionMode) -> Options {
        Options {
            threshold: self.strassen_threshold,
            parallel_threshold: self.parallel_threshold,
            mode,
            num_threads: 0,
        }
        .normalize()
    }
}

pub(crate) fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(4)
}

/// Seconds since the Unix epoch, formatted as `unix:<secs>`.
#[must_use]
pub fn current_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("unix:{}", dur.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serialization() {
        let profile = CalibrationProfile {
            strassen_threshold: 32,
            ..CalibrationProfile::default()
        };
        let json = serde_json::to_string_pretty(&profile).unwrap();
        let back: CalibrationProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn default_is_valid_and_compatible() {
        let p = CalibrationProfile::default();
        assert!(p.is_valid());
        assert!(p.is_compatible());
        assert!(p.matches_machine());
    }

    #[test]
    fn zero_threshold_is_invalid() {
        let p = CalibrationProfile {
            parallel_threshold: 0,
            ..CalibrationProfile::default()
        };
        assert!(!p.is_valid());
    }

    #[test]
    fn to_options_uses_thresholds() {
        let p = CalibrationProfile {
            strassen_threshold: 32,
            parallel_threshold: 256,
            ..CalibrationProfile::default()
        };
        let opts = p.to_options(ExecutionMode::Sequential);
        assert_eq!(opts.threshold, 32);
        assert_eq!(opts.parallel_threshold, 256);
        assert_eq!(opts.mode, ExecutionMode::Sequential);
    }

    #[test]
    fn timestamp_format() {
        assert!(current_timestamp().starts_with("unix:"));
    }
}
