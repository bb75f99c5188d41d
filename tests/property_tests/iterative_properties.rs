//! Property-based tests for the iterative solvers
//!
//! Strict diagonal dominance guarantees both Jacobi and Gauss-Seidel
//! converge, so the iterates must reach the direct solution.

use numerik::gauss::basic;
use numerik::iterative::{gauss_seidel, jacobi, IterationConfig};
use numerik::matrix::Matrix;
use proptest::prelude::*;

fn entry_strategy() -> impl Strategy<Value = f64> {
    -5.0..5.0f64
}

/// Strongly diagonally dominant matrices keep the iteration count low
fn dominant_matrix(n: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(proptest::collection::vec(entry_strategy(), n), n).prop_map(
        move |mut rows| {
            for i in 0..n {
                let off_diagonal: f64 = rows[i]
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, v)| v.abs())
                    .sum();
                rows[i][i] = 2.0 * off_diagonal + 1.0;
            }
            Matrix::from_rows(&rows).unwrap()
        },
    )
}

proptest! {
    /// Jacobi converges to the direct solution
    #[test]
    fn jacobi_matches_direct(
        a in dominant_matrix(3),
        b in proptest::collection::vec(entry_strategy(), 3)
    ) {
        let config = IterationConfig { tolerance: 1e-10, ..Default::default() };
        let outcome = jacobi(&a, &b, &config).unwrap();
        prop_assert!(outcome.converged);

        let direct = basic::solve(&a, &Matrix::column_vector(&b)).unwrap();
        for i in 0..3 {
            prop_assert!((outcome.x[i] - direct.at(i, 0)).abs() < 1e-6);
        }
    }

    /// Gauss-Seidel converges to the direct solution
    #[test]
    fn gauss_seidel_matches_direct(
        a in dominant_matrix(3),
        b in proptest::collection::vec(entry_strategy(), 3)
    ) {
        let config = IterationConfig { tolerance: 1e-10, ..Default::default() };

        let gs = gauss_seidel(&a, &b, &config).unwrap();
        prop_assert!(gs.converged);

        let direct = basic::solve(&a, &Matrix::column_vector(&b)).unwrap();
        for i in 0..3 {
            prop_assert!((gs.x[i] - direct.at(i, 0)).abs() < 1e-6);
        }
    }

    /// The residual history is monotone enough to end below the start
    #[test]
    fn residual_shrinks_overall(
        a in dominant_matrix(3),
        b in proptest::collection::vec(1.0..5.0f64, 3)
    ) {
        let config = IterationConfig { tolerance: 1e-10, ..Default::default() };
        let outcome = jacobi(&a, &b, &config).unwrap();

        if outcome.residual_history.len() >= 2 {
            let first = outcome.residual_history[0];
            let last = *outcome.residual_history.last().unwrap();
            prop_assert!(last <= first + 1e-12);
        }
    }
}
