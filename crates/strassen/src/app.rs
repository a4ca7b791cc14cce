//! Application entry point and dispatch.

use anyhow::{Context, Result};

use strassen_calibration::{io as profile_io, CalibrationEngine, CalibrationMode};
use strassen_cli::presenter::CLIResultPresenter;
use strassen_core::generate::random_matrix;
use strassen_core::{
    DefaultFactory, ExecutionMode, Matrix, MatrixError, MultiplierFactory, Options,
    DEFAULT_ELEMENT_RANGE,
};
use strassen_orchestration::interfaces::ResultPresenter;
use strassen_orchestration::{
    analyze_comparison_results, execute_multiplications, get_multipliers_to_run,
};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        strassen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.calibrate {
        return run_calibration(config);
    }

    run_cli(config)
}

/// Engine options: profile thresholds (if any), overridden by non-zero flags.
fn resolve_options(config: &AppConfig) -> Options {
    let profile = config
        .profile
        .as_deref()
        .and_then(profile_io::load_validated_profile);
    if let Some(profile) = &profile {
        tracing::debug!(?profile, "using calibration profile");
    }

    let mut opts = profile.map_or_else(Options::default, |p| {
        p.to_options(ExecutionMode::Parallel)
    });
    if config.threshold > 0 {
        opts.threshold = config.threshold;
    }
    if config.parallel_threshold > 0 {
        opts.parallel_threshold = config.parallel_threshold;
    }
    opts.num_threads = config.threads;
    opts.normalize()
}

fn build_operands(config: &AppConfig) -> Result<(Matrix, Matrix)> {
    let (rows, inner, cols) = config.dimensions();
    let a = random_matrix(rows, inner, DEFAULT_ELEMENT_RANGE, config.seed)?;
    let b = if config.identity {
        if inner != cols {
            return Err(MatrixError::Config(format!(
                "--identity needs a square B, got {inner}x{cols}"
            ))
            .into());
        }
        Matrix::identity(inner)?
    } else {
        random_matrix(inner, cols, DEFAULT_ELEMENT_RANGE, config.seed.wrapping_add(1))?
    };
    Ok((a, b))
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = resolve_options(config);
    if config.verbose {
        eprintln!("{}", crate::version::full_version());
    }

    let (a, b) = build_operands(config)?;
    tracing::info!(
        a = %format!("{}x{}", a.rows(), a.columns()),
        b = %format!("{}x{}", b.rows(), b.columns()),
        threshold = opts.threshold,
        "operands ready"
    );

    let factory = DefaultFactory::with_options(opts);
    let mut multipliers = get_multipliers_to_run(&config.algo, &factory)?;
    if config.verify && !multipliers.iter().any(|m| m.name() == "Classical") {
        multipliers.push(factory.get("classical")?);
    }

    let results = execute_multiplications(&multipliers, &a, &b);

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    for result in &results {
        match &result.outcome {
            Ok(product) => presenter.present_result(&result.algorithm, product, result.duration),
            Err(e) => presenter.present_error(&e.to_string()),
        }
    }
    if results.len() > 1 {
        presenter.present_comparison(&results);
        analyze_comparison_results(&results)?;
    }

    if config.identity {
        let reproduces_a = results
            .iter()
            .filter_map(|r| r.outcome.as_ref().ok())
            .all(|product| product == &a);
        if !reproduces_a {
            return Err(MatrixError::Mismatch.into());
        }
    }

    // a single failed run surfaces its own error
    if let Some(err) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(err.clone().into());
    }
    Ok(())
}

fn run_calibration(config: &AppConfig) -> Result<()> {
    let mode = if config.quick {
        CalibrationMode::Quick
    } else {
        CalibrationMode::Full
    };

    let quiet = config.quiet;
    let engine = CalibrationEngine::new(mode).with_progress(Box::new(move |p| {
        if !quiet {
            eprintln!("[{}/{}] {}", p.current, p.total, p.step);
        }
    }));
    let profile = engine.calibrate()?;

    println!("Strassen threshold: {}", profile.strassen_threshold);
    println!("Parallel threshold: {}", profile.parallel_threshold);
    println!("Cores: {}", profile.num_cores);

    let path = config
        .profile
        .clone()
        .unwrap_or_else(profile_io::default_profile_path);
    profile_io::save_profile(&profile, &path)
        .with_context(|| format!("failed to save profile to {}", path.display()))?;
    if !quiet {
        println!("Profile saved to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use strassen_calibration::CalibrationProfile;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("strassen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn run_small_all() {
        assert!(run(&config(&["--size", "9", "--algo", "all", "-q"])).is_ok());
    }

    #[test]
    fn run_identity_rectangular_a() {
        let cfg = config(&["--rows", "5", "--inner", "70", "--cols", "70", "--identity", "-q"]);
        assert!(run(&cfg).is_ok());
    }

    #[test]
    fn identity_needs_square_b() {
        let cfg = config(&["--inner", "3", "--cols", "4", "--identity", "-q"]);
        let err = run(&cfg).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrixError>(),
            Some(MatrixError::Config(_))
        ));
    }

    #[test]
    fn unknown_algorithm_is_config_error() {
        let err = run(&config(&["--size", "4", "--algo", "bogus"])).unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), 4);
    }

    #[test]
    fn zero_dimension_fails() {
        assert!(run(&config(&["--size", "0", "-q"])).is_err());
    }

    #[test]
    fn profile_thresholds_are_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let profile = CalibrationProfile {
            strassen_threshold: 16,
            parallel_threshold: 32,
            ..CalibrationProfile::default()
        };
        profile_io::save_profile(&profile, &path).unwrap();

        let cfg = config(&["--profile", path.to_str().unwrap()]);
        let opts = resolve_options(&cfg);
        assert_eq!(opts.threshold, 16);
        assert_eq!(opts.parallel_threshold, 32);

        let cfg = config(&["--profile", path.to_str().unwrap(), "--threshold", "8"]);
        let opts = resolve_options(&cfg);
        assert_eq!(opts.threshold, 8);
        assert_eq!(opts.parallel_threshold, 32);
    }

    #[test]
    fn missing_profile_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let cfg = config(&["--profile", path.to_str().unwrap(), "--threads", "3"]);
        let opts = resolve_options(&cfg);
        assert_eq!(opts, Options { num_threads: 3, ..Options::default() });
    }

    #[test]
    fn quick_calibration_writes_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibrated.json");
        let cfg = config(&["--calibrate", "--quick", "-q", "--profile", path.to_str().unwrap()]);
        run(&cfg).unwrap();
        assert!(profile_io::load_validated_profile(&path).is_some());
    }
}
