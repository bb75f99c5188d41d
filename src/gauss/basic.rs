//! Gaussian Elimination Without Pivoting.
//!
//! Solves `A * X = B` by forward elimination and back-substitution. The
//! only reordering performed is a naive row swap when a diagonal entry is
//! (near-)zero: the first lower row with a usable entry in that column is
//! swapped in. When no such row exists the system is reported singular;
//! use [`crate::gauss::pivoted`] for anything numerically delicate.

use crate::error::{SolveError, SolveResult};
use crate::gauss::{back_substitute, eliminate_below};
use crate::matrix::Matrix;
use crate::NEGLIGIBLE;

/// Solve `A * X = B` by Gaussian elimination without pivoting.
///
/// `B` may carry several right-hand-side columns; the solution has one
/// column per right-hand side. Systems with fewer unknowns than
/// equations are solved best-effort with a non-fatal warning; systems
/// with more unknowns than equations are rejected.
pub fn solve(a: &Matrix, b: &Matrix) -> SolveResult<Matrix> {
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

    // Forward elimination
    for i in 0..n.min(m) {
        if aug.at(i, i).abs() < NEGLIGIBLE {
            for r in i + 1..n {
                if aug.at(r, i).abs() > NEGLIGIBLE {
                    aug.swap_rows(i, r);
                    break;
                }
            }

            if aug.at(i, i).abs() < NEGLIGIBLE {
                return Err(SolveError::Singular(
                    "elimination cannot proceed without pivoting".into(),
                ));
            }
        }

        eliminate_below(&mut aug, i);
    }

    if m < n {
        tracing::warn!("system is underdetermined, providing a base solution");
    }

    // No pivot diagonal may have collapsed to zero
    for i in 0..n.min(m) {
        if aug.at(i, i).abs() < NEGLIGIBLE {
            return Err(SolveError::Singular("matrix is singular".into()));
        }
    }

    Ok(back_substitute(&aug, n, m, k))
}
