//! Property-based tests for the Gaussian elimination suite
//!
//! Random systems are made strictly diagonally dominant, which
//! guarantees non-singularity, so every solve and inversion must
//! succeed and reproduce the inputs within tolerance.

use numerik::gauss::pivoted::{self, PivotStrategy};
use numerik::gauss::{basic, invert};
use numerik::matrix::Matrix;
use proptest::prelude::*;

/// Strategy for matrix entries away from overflow territory
fn entry_strategy() -> impl Strategy<Value = f64> {
    -10.0..10.0f64
}

/// Strategy for strictly diagonally dominant square matrices of size `n`
fn diag_dominant_matrix(n: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(proptest::collection::vec(entry_strategy(), n), n).prop_map(
        move |mut rows| {
            for i in 0..n {
                let off_diagonal: f64 = rows[i]
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, v)| v.abs())
                    .sum();
                rows[i][i] = off_diagonal + 1.0;
            }
            Matrix::from_rows(&rows).unwrap()
        },
    )
}

/// Strategy for right-hand-side vectors of length `n`
fn rhs_strategy(n: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(entry_strategy(), n)
}

/// Reference determinant by the rule of Sarrus
fn det3_reference(a: &Matrix) -> f64 {
    a.at(0, 0) * (a.at(1, 1) * a.at(2, 2) - a.at(1, 2) * a.at(2, 1))
        - a.at(0, 1) * (a.at(1, 0) * a.at(2, 2) - a.at(1, 2) * a.at(2, 0))
        + a.at(0, 2) * (a.at(1, 0) * a.at(2, 1) - a.at(1, 1) * a.at(2, 0))
}

fn max_residual(a: &Matrix, x: &Matrix, b: &Matrix) -> f64 {
    a.matmul(x).unwrap().sub(b).unwrap().norm_max()
}

proptest! {
    /// Both solvers reproduce the right-hand side of a non-singular system
    #[test]
    fn solvers_satisfy_system(
        a in diag_dominant_matrix(4),
        b in rhs_strategy(4)
    ) {
        let rhs = Matrix::column_vector(&b);

        let x = basic::solve(&a, &rhs).unwrap();
        prop_assert!(max_residual(&a, &x, &rhs) < 1e-8);

        for strategy in [PivotStrategy::Partial, PivotStrategy::Full] {
            let x = pivoted::solve(&a, &rhs, strategy).unwrap();
            prop_assert!(max_residual(&a, &x, &rhs) < 1e-8);
        }
    }

    /// Partial and full pivoting agree on the solution
    #[test]
    fn pivot_strategies_agree(
        a in diag_dominant_matrix(3),
        b in rhs_strategy(3)
    ) {
        let rhs = Matrix::column_vector(&b);

        let partial = pivoted::solve(&a, &rhs, PivotStrategy::Partial).unwrap();
        let full = pivoted::solve(&a, &rhs, PivotStrategy::Full).unwrap();
        prop_assert!(partial.sub(&full).unwrap().norm_max() < 1e-8);
    }

    /// Multiple right-hand sides solve columnwise
    #[test]
    fn multiple_rhs_solve_columnwise(
        a in diag_dominant_matrix(3),
        b1 in rhs_strategy(3),
        b2 in rhs_strategy(3)
    ) {
        let rhs = Matrix::column_vector(&b1).hstack(&Matrix::column_vector(&b2)).unwrap();

        let x = pivoted::solve(&a, &rhs, PivotStrategy::Partial).unwrap();
        prop_assert_eq!(x.cols, 2);
        prop_assert!(max_residual(&a, &x, &rhs) < 1e-8);
    }

    /// The inverse multiplies back to the identity from both sides
    #[test]
    fn inverse_roundtrip(a in diag_dominant_matrix(4)) {
        let result = invert(&a).unwrap();
        prop_assert!(!result.is_singular());

        let inverse = result.inverse().unwrap();
        let identity = Matrix::identity(4);
        prop_assert!(a.matmul(inverse).unwrap().sub(&identity).unwrap().norm_max() < 1e-8);
        prop_assert!(inverse.matmul(&a).unwrap().sub(&identity).unwrap().norm_max() < 1e-8);
    }

    /// A diagonally dominant matrix never needs a pivot swap, so L*U
    /// reconstructs it directly
    #[test]
    fn lu_reconstructs_unswapped_input(a in diag_dominant_matrix(4)) {
        let result = invert(&a).unwrap();

        let lu = result.lower().unwrap().matmul(result.upper().unwrap()).unwrap();
        prop_assert!(lu.sub(&a).unwrap().norm_max() < 1e-8);
    }

    /// The pivot-product determinant matches the cofactor expansion
    #[test]
    fn determinant_matches_reference(a in diag_dominant_matrix(3)) {
        let result = invert(&a).unwrap();
        let reference = det3_reference(&a);

        prop_assert!((result.determinant() - reference).abs() <= 1e-6 * reference.abs());
    }
}
