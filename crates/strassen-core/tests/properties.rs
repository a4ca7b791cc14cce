//! Property-based and boundary tests for the multiplication engines.
//!
//! These exercise the public API the way callers do: build operands,
//! multiply with Strassen, and check against the classical oracle.

use proptest::prelude::*;

use strassen_core::generate::{random_matrix, random_square};
use strassen_core::{
    multiply, usual_multiply, ExecutionMode, Matrix, MatrixError, Options, StrassenEngine,
};

fn engine(threshold: usize, mode: ExecutionMode) -> StrassenEngine {
    StrassenEngine::new(Options {
        threshold,
        parallel_threshold: threshold * 2,
        mode,
        num_threads: 0,
    })
    .unwrap()
}

#[test]
fn strassen_matches_classical_around_threshold() {
    for (seed, n) in [1usize, 63, 64, 65, 127, 128, 129, 300].into_iter().enumerate() {
        let a = random_square(n, seed as u64 * 2).unwrap();
        let b = random_square(n, seed as u64 * 2 + 1).unwrap();
        assert_eq!(
            multiply(&a, &b).unwrap(),
            usual_multiply(&a, &b).unwrap(),
            "mismatch at n={n}"
        );
    }
}

#[test]
fn concrete_four_by_four() {
    let a = Matrix::from_rows(vec![
        vec![4, 1, 4, 5],
        vec![6, 5, 4, 2],
        vec![5, 1, 1, 1],
        vec![6, 6, 1, 4],
    ])
    .unwrap();
    let b = Matrix::from_rows(vec![
        vec![2, 4, 2, 6],
        vec![5, 4, 1, 1],
        vec![1, 2, 1, 5],
        vec![2, 1, 2, 1],
    ])
    .unwrap();
    let c = Matrix::from_rows(vec![
        vec![27, 33, 23, 50],
        vec![45, 54, 25, 63],
        vec![18, 27, 14, 37],
        vec![51, 54, 27, 51],
    ])
    .unwrap();
    assert_eq!(usual_multiply(&a, &b).unwrap(), c);
    assert_eq!(multiply(&a, &b).unwrap(), c);
    assert_eq!(engine(1, ExecutionMode::Parallel).multiply(&a, &b).unwrap(), c);
}

#[test]
fn large_identity_squared() {
    let id = Matrix::identity(1000).unwrap();
    assert_eq!(multiply(&id, &id).unwrap(), id);
}

#[test]
fn ragged_rows_never_coerced() {
    assert!(matches!(
        Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5]]),
        Err(MatrixError::Shape(_))
    ));
    assert!(matches!(Matrix::from_rows(vec![]), Err(MatrixError::Shape(_))));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Strassen equals the classical oracle for arbitrary compatible shapes.
    #[test]
    fn equivalence_with_classical(
        rows in 1usize..40,
        inner in 1usize..40,
        cols in 1usize..40,
        seed in any::<u64>(),
    ) {
        let a = random_matrix(rows, inner, -1000..1000, seed).unwrap();
        let b = random_matrix(inner, cols, -1000..1000, seed.wrapping_add(1)).unwrap();
        let expected = usual_multiply(&a, &b).unwrap();
        let got = engine(4, ExecutionMode::Parallel).multiply(&a, &b).unwrap();
        prop_assert_eq!(got.shape(), (rows, cols));
        prop_assert_eq!(got, expected);
    }

    /// Multiplying by the identity leaves a square matrix unchanged.
    #[test]
    fn identity_is_neutral(n in 1usize..50, seed in any::<u64>()) {
        let a = random_square(n, seed).unwrap();
        let id = Matrix::identity(n).unwrap();
        prop_assert_eq!(engine(2, ExecutionMode::Sequential).multiply(&a, &id).unwrap(), a);
    }

    /// Incompatible inner dimensions are always rejected.
    #[test]
    fn dimension_mismatch_rejected(
        rows in 1usize..20,
        inner in 1usize..20,
        other in 1usize..20,
        cols in 1usize..20,
    ) {
        prop_assume!(inner != other);
        let a = Matrix::zeros(rows, inner).unwrap();
        let b = Matrix::zeros(other, cols).unwrap();
        let is_mismatch = matches!(
            engine(2, ExecutionMode::Parallel).multiply(&a, &b),
            Err(MatrixError::DimensionMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    /// Parallel and sequential execution produce bit-identical results.
    #[test]
    fn parallel_equals_sequential(n in 1usize..48, seed in any::<u64>()) {
        let a = random_matrix(n, n, i64::MIN..i64::MAX, seed).unwrap();
        let b = random_matrix(n, n, i64::MIN..i64::MAX, !seed).unwrap();
        let seq = engine(2, ExecutionMode::Sequential).multiply(&a, &b).unwrap();
        let par = engine(2, ExecutionMode::Parallel).multiply(&a, &b).unwrap();
        prop_assert_eq!(seq, par);
    }

    /// Ragged row data never builds a matrix.
    #[test]
    fn ragged_rows_fail(first in 1usize..10, second in 1usize..10) {
        prop_assume!(first != second);
        let rows = vec![vec![0; first], vec![0; second]];
        let is_shape = matches!(Matrix::from_rows(rows), Err(MatrixError::Shape(_)));
        prop_assert!(is_shape);
    }
}
