//! CLI result presenter.

use std::time::Duration;

use strassen_core::Matrix;
use strassen_orchestration::interfaces::{MultiplicationResult, ResultPresenter};

use crate::output::{checksum, format_duration, format_matrix, format_shape, PREVIEW_LIMIT};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, algorithm: &str, product: &Matrix, duration: Duration) {
        if self.quiet {
            println!("{}", checksum(product));
            return;
        }

        println!("Algorithm: {algorithm}");
        println!("Shape: {}", format_shape(product));
        println!("Duration: {}", format_duration(duration));
        println!("Checksum: {}", checksum(product));
        println!("{}", format_matrix(product, PREVIEW_LIMIT, self.verbose));
    }

    fn present_comparison(&self, results: &[MultiplicationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.is_ok() { "OK" } else { "ERROR" };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
