//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

/// Default operand dimension when neither `--size` nor an explicit axis is given.
const DEFAULT_DIMENSION: usize = 256;

/// Strassen-rs: hybrid Strassen matrix multiplication.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Dimension for rows, inner and columns at once.
    #[arg(short, long, env = "STRASSEN_SIZE")]
    pub size: Option<usize>,

    /// Rows of A.
    #[arg(long)]
    pub rows: Option<usize>,

    /// Columns of A / rows of B.
    #[arg(long)]
    pub inner: Option<usize>,

    /// Columns of B.
    #[arg(long)]
    pub cols: Option<usize>,

    /// Multiplier to use: classical, strassen, parallel, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Recursion threshold (0 = default).
    #[arg(long, default_value = "0")]
    pub threshold: usize,

    /// Fork threshold for parallel mode (0 = default).
    #[arg(long, default_value = "0")]
    pub parallel_threshold: usize,

    /// Dedicated worker threads (0 = global pool).
    #[arg(long, default_value = "0")]
    pub threads: usize,

    /// Seed for random operands.
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Use the identity as B.
    #[arg(long)]
    pub identity: bool,

    /// Cross-check every product against the classical multiplier.
    #[arg(long)]
    pub verify: bool,

    /// Run threshold calibration.
    #[arg(long)]
    pub calibrate: bool,

    /// Shorter calibration run.
    #[arg(long, requires = "calibrate")]
    pub quick: bool,

    /// Calibration profile path (read for thresholds, written by --calibrate).
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Quiet mode (only output checksums).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (print full matrices).
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Resolved `(rows, inner, cols)`: explicit axis, else `--size`, else the default.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize, usize) {
        let base = self.size.unwrap_or(DEFAULT_DIMENSION);
        (
            self.rows.unwrap_or(base),
            self.inner.unwrap_or(base),
            self.cols.unwrap_or(base),
        )
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("strassen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.algo, "all");
        assert_eq!(config.seed, 42);
        assert!(!config.identity);
    }

    #[test]
    fn size_sets_all_dimensions() {
        let config = parse(&["--size", "100"]);
        assert_eq!(config.dimensions(), (100, 100, 100));
    }

    #[test]
    fn explicit_axes_override_size() {
        let config = parse(&["--size", "100", "--rows", "3", "--cols", "7"]);
        assert_eq!(config.dimensions(), (3, 100, 7));
    }

    #[test]
    fn quick_requires_calibrate() {
        assert!(AppConfig::try_parse_from(["strassen", "--quick"]).is_err());
    }

    #[test]
    fn verify_config() {
        AppConfig::command().debug_assert();
    }
}
