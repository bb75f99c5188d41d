//! Gaussian Elimination With Pivoting.
//!
//! At every elimination step the pivot is the maximum-magnitude candidate:
//! partial pivoting scans the current column only, full pivoting scans the
//! whole remaining submatrix. Partial pivoting escalates to full pivoting
//! automatically when its column scan finds nothing usable, which both
//! rescues exactly-zero columns and improves stability when the leading
//! column is orders of magnitude smaller than the rest of the submatrix.
//!
//! Row and column swaps are tracked in per-call permutation vectors; only
//! the column permutation has to be undone on the solution, since
//! elimination and back-substitution already operate consistently in
//! row-permuted space.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{SolveError, SolveResult};
use crate::gauss::{back_substitute, eliminate_below};
use crate::matrix::Matrix;
use crate::NEGLIGIBLE;

/// Pivot search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PivotStrategy {
    /// Search the current column only (rows at or below the step)
    #[default]
    Partial,
    /// Search the entire remaining submatrix (rows and columns)
    Full,
}

/// Counters and flags describing one elimination run
#[derive(Debug, Clone, Default)]
pub struct EliminationStats {
    /// Pivot steps performed
    pub pivot_steps: usize,
    /// Row swaps performed
    pub row_swaps: usize,
    /// Column swaps performed (full pivoting only)
    pub col_swaps: usize,
    /// Whether partial pivoting escalated to full pivoting
    pub escalated: bool,
    /// Whether the system was treated as underdetermined
    pub underdetermined: bool,
}

/// Gaussian elimination engine with selectable pivoting strategy.
pub struct PivotedEliminator {
    /// Initial pivot strategy
    strategy: PivotStrategy,
    /// Statistics of the last solve
    stats: EliminationStats,
}

impl PivotedEliminator {
    /// Create an eliminator with the given initial strategy.
    pub fn new(strategy: PivotStrategy) -> Self {
        Self {
            strategy,
            stats: EliminationStats::default(),
        }
    }

    /// Statistics of the most recent [`solve`](Self::solve) call.
    pub fn stats(&self) -> &EliminationStats {
        &self.stats
    }

    /// Solve `A * X = B` with pivoted Gaussian elimination.
    ///
    /// `B` may carry several right-hand-side columns. A partial-pivoting
    /// run escalates to full pivoting when the column scan dead-ends; the
    /// escalation is recorded in [`stats`](Self::stats) and reported once
    /// as a non-fatal notice.
    pub fn solve(&mut self, a: &Matrix, b: &Matrix) -> SolveResult<Matrix> {
        self.stats = EliminationStats::default();

        let (n, m) = (a.rows, a.cols);
        let k = b.cols;

        if n != b.rows {
            return Err(SolveError::DimensionMismatch {
                expected: n,
                got: b.rows,
            });
        }

        if m > n {
            return Err(SolveError::Shape(format!(
                "matrix has more columns than rows ({m} > {n}), system is underdetermined"
            )));
        }

        let mut aug = a.hstack(b)?;

        let mut row_perm: SmallVec<[usize; 8]> = (0..n).collect();
        let mut col_perm: SmallVec<[usize; 8]> = (0..m).collect();
        let mut partial = self.strategy == PivotStrategy::Partial;
        let mut escalated = false;

        // Forward elimination with pivoting
        for i in 0..n.min(m) {
            self.stats.pivot_steps += 1;

            let mut max_val = 0.0;
            let mut max_row = i;
            let mut max_col = i;

            if partial && !escalated {
                for r in i..n {
                    let v = aug.at(r, i).abs();
                    if v > max_val {
                        max_val = v;
                        max_row = r;
                    }
                }

                // Column scan dead-ended: escalate to full pivoting
                if max_val < NEGLIGIBLE {
                    tracing::warn!(step = i, "partial pivoting stuck, switching to full pivoting");
                    partial = false;
                    escalated = true;
                    self.stats.escalated = true;
                }
            }

            if !partial || escalated {
                for r in i..n {
                    for c in i..m {
                        let v = aug.at(r, c).abs();
                        if v > max_val {
                            max_val = v;
                            max_row = r;
                            max_col = c;
                        }
                    }
                }
            }

            if max_val < NEGLIGIBLE {
                if i == n - 1 {
                    tracing::warn!("system is underdetermined, providing a base solution");
                    self.stats.underdetermined = true;
                    break;
                }
                return Err(SolveError::Singular(
                    "no usable pivot in the remaining submatrix".into(),
                ));
            }

            if max_row != i {
                aug.swap_rows(i, max_row);
                row_perm.swap(i, max_row);
                self.stats.row_swaps += 1;
            }

            // Column swaps only ever happen in full-pivoting mode
            if max_col != i && (!partial || escalated) {
                aug.swap_cols(i, max_col);
                col_perm.swap(i, max_col);
                self.stats.col_swaps += 1;
            }

            eliminate_below(&mut aug, i);
        }

        if escalated {
            tracing::info!("full pivoting was used instead of partial pivoting");
        }

        if m < n && !self.stats.underdetermined {
            tracing::warn!("system is underdetermined, providing a base solution");
            self.stats.underdetermined = true;
        }

        // Back-substitute in the permuted column space, then scatter each
        // working row back to its original unknown
        let x_work = back_substitute(&aug, n, m, k);

        let mut x = Matrix::zeros(m, k);
        for i in 0..m {
            for col in 0..k {
                x.set(col_perm[i], col, x_work.at(i, col));
            }
        }

        Ok(x)
    }
}

/// Solve `A * X = B` with the given pivoting strategy.
///
/// Convenience wrapper constructing a throwaway [`PivotedEliminator`].
pub fn solve(a: &Matrix, b: &Matrix, strategy: PivotStrategy) -> SolveResult<Matrix> {
    PivotedEliminator::new(strategy).solve(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(a: &Matrix, x: &Matrix, b: &Matrix) -> f64 {
        a.matmul(x).unwrap().sub(b).unwrap().norm_max()
    }

    fn pivot_matrix() -> (Matrix, Matrix) {
        let a = Matrix::from_rows(&[
            vec![0.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 0.0],
        ])
        .unwrap();
        let b = Matrix::column_vector(&[13.0, 32.0, 23.0]);
        (a, b)
    }

    #[test]
    fn test_partial_pivoting() {
        let (a, b) = pivot_matrix();

        let mut eliminator = PivotedEliminator::new(PivotStrategy::Partial);
        let x = eliminator.solve(&a, &b).unwrap();

        let expected = [1.0, 2.0, 3.0];
        for (i, e) in expected.iter().enumerate() {
            assert!((x.at(i, 0) - e).abs() < 1e-10, "x[{i}] = {}", x.at(i, 0));
        }
        assert!(eliminator.stats().row_swaps >= 1);
        assert!(!eliminator.stats().escalated);
    }

    #[test]
    fn test_full_pivoting() {
        let (a, b) = pivot_matrix();

        let mut eliminator = PivotedEliminator::new(PivotStrategy::Full);
        let x = eliminator.solve(&a, &b).unwrap();

        assert!(residual(&a, &x, &b) < 1e-10);
        assert!(eliminator.stats().col_swaps >= 1);
    }

    #[test]
    fn test_zero_leading_pivot() {
        let a = Matrix::from_rows(&[
            vec![0.0, 2.0, 1.0],
            vec![1.0, -1.0, 3.0],
            vec![2.0, 1.0, -1.0],
        ])
        .unwrap();
        let b = Matrix::column_vector(&[1.0, 8.0, 1.0]);

        for strategy in [PivotStrategy::Partial, PivotStrategy::Full] {
            let x = solve(&a, &b, strategy).unwrap();
            assert!(residual(&a, &x, &b) < 1e-10);
        }
    }

    #[test]
    fn test_escalation_to_full_pivoting() {
        // Column 1 is negligible below the first pivot, so the partial
        // scan dead-ends and the full scan must take over.
        let a = Matrix::from_rows(&[
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1e-30, 2.0],
            vec![0.0, 1e-30, 3.0],
        ])
        .unwrap();
        let b = Matrix::column_vector(&[1.0, 2.0, 3.0]);

        let mut eliminator = PivotedEliminator::new(PivotStrategy::Partial);
        let x = eliminator.solve(&a, &b).unwrap();

        assert!(eliminator.stats().escalated);
        assert_eq!(eliminator.stats().col_swaps, 1);
        assert!(residual(&a, &x, &b) < 1e-8);
    }

    #[test]
    fn test_multiple_rhs() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[vec![5.0, 1.0], vec![11.0, 2.0]]).unwrap();

        let x = solve(&a, &b, PivotStrategy::Partial).unwrap();
        assert_eq!(x.rows, 2);
        assert_eq!(x.cols, 2);
        assert!(residual(&a, &x, &b) < 1e-10);
    }

    #[test]
    fn test_singular_before_last_row() {
        let a = Matrix::from_rows(&[
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        let b = Matrix::column_vector(&[1.0, 0.0, 0.0]);

        assert!(matches!(
            solve(&a, &b, PivotStrategy::Partial),
            Err(SolveError::Singular(_))
        ));
    }

    #[test]
    fn test_singular_last_row_degrades_to_base_solution() {
        // Rank-deficient in the final step only: the eliminator stops
        // early and leaves the free unknown at zero.
        let a = Matrix::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();
        let b = Matrix::column_vector(&[6.0, 15.0, 24.0]);

        let mut eliminator = PivotedEliminator::new(PivotStrategy::Partial);
        let x = eliminator.solve(&a, &b).unwrap();

        assert!(eliminator.stats().underdetermined);
        assert!(residual(&a, &x, &b) < 1e-8);
    }

    #[test]
    fn test_incompatible_dimensions() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::column_vector(&[1.0, 2.0, 3.0]);

        assert!(matches!(
            solve(&a, &b, PivotStrategy::Partial),
            Err(SolveError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_wide_matrix_rejected() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::column_vector(&[1.0, 2.0]);

        assert!(matches!(
            solve(&a, &b, PivotStrategy::Full),
            Err(SolveError::Shape(_))
        ));
    }

    #[test]
    fn test_ill_scaled_column_stability() {
        // The leading column is tiny but non-negligible; full pivoting
        // picks a well-scaled pivot from elsewhere in the submatrix.
        let a = Matrix::from_rows(&[vec![1e-8, 1.0], vec![1.0, 1.0]]).unwrap();
        let b = Matrix::column_vector(&[1.0, 2.0]);

        let x = solve(&a, &b, PivotStrategy::Full).unwrap();
        assert!(residual(&a, &x, &b) < 1e-8);
    }
}
