//! Golden file integration tests.
//!
//! Reads tests/testdata/golden_products.json and verifies every multiplier
//! reproduces the known products, directly and through the orchestrator.

use std::sync::Arc;

use strassen_core::{
    ClassicalMultiplier, DefaultFactory, Matrix, Multiplier, MultiplierFactory,
    StrassenMultiplier,
};
use strassen_orchestration::{analyze_comparison_results, execute_multiplications};
use strassen_tests::{load_golden_data, GoldenCase};

fn operands(case: &GoldenCase) -> (Matrix, Matrix, Matrix) {
    (
        Matrix::from_rows(case.a.clone()).unwrap(),
        Matrix::from_rows(case.b.clone()).unwrap(),
        Matrix::from_rows(case.product.clone()).unwrap(),
    )
}

fn check_all(multiplier: &dyn Multiplier) {
    let data = load_golden_data().expect("failed to load golden file");
    assert!(!data.cases.is_empty());
    for case in &data.cases {
        let (a, b, expected) = operands(case);
        let product = multiplier.multiply(&a, &b).unwrap();
        assert_eq!(
            product,
            expected,
            "{} mismatch on {}",
            multiplier.name(),
            case.name
        );
    }
}

// ---------------------------------------------------------------------------
// Golden: every strategy
// ---------------------------------------------------------------------------

#[test]
fn golden_classical() {
    check_all(&ClassicalMultiplier);
}

#[test]
fn golden_sequential_strassen() {
    check_all(&StrassenMultiplier::sequential(64).unwrap());
}

#[test]
fn golden_parallel_strassen() {
    check_all(&StrassenMultiplier::parallel(64, 128).unwrap());
}

#[test]
fn golden_threshold_one_recurses_to_scalars() {
    check_all(&StrassenMultiplier::sequential(1).unwrap());
    check_all(&StrassenMultiplier::parallel(1, 1).unwrap());
}

// ---------------------------------------------------------------------------
// Golden: through the orchestrator
// ---------------------------------------------------------------------------

#[test]
fn golden_orchestrated_comparison() {
    let factory = DefaultFactory::new();
    let multipliers: Vec<Arc<dyn Multiplier>> = factory
        .available()
        .into_iter()
        .map(|name| factory.get(name).unwrap())
        .collect();

    let data = load_golden_data().unwrap();
    for case in &data.cases {
        let (a, b, expected) = operands(case);
        let results = execute_multiplications(&multipliers, &a, &b);
        assert_eq!(results.len(), 3);
        analyze_comparison_results(&results).unwrap();
        assert_eq!(results[0].outcome.as_ref().unwrap(), &expected, "{}", case.name);
    }
}

#[test]
fn golden_file_shapes_are_consistent() {
    let data = load_golden_data().unwrap();
    assert!(!data.description.is_empty());
    for case in &data.cases {
        let (a, b, expected) = operands(case);
        assert_eq!(a.columns(), b.rows(), "{}", case.name);
        assert_eq!(expected.shape(), (a.rows(), b.columns()), "{}", case.name);
    }
}
