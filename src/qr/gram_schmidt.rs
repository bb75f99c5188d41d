//! QR Decomposition via Modified Gram-Schmidt.
//!
//! The modified variant orthogonalizes the remaining columns against
//! each finished one immediately, which loses less orthogonality to
//! rounding than the classical textbook formulation.

use crate::error::{SolveError, SolveResult};
use crate::matrix::{euclidean_norm, Matrix};
use crate::NEGLIGIBLE;

/// QR-decompose a square matrix with modified Gram-Schmidt.
///
/// Returns `(Q, R)` with `Q` orthogonal and `R` upper triangular such
/// that `Q * R` reconstructs the input. Linearly dependent columns are
/// detected when a column collapses to zero during orthogonalization.
pub fn gram_schmidt(a: &Matrix) -> SolveResult<(Matrix, Matrix)> {
    if !a.is_square() {
        return Err(SolveError::Shape(format!(
            "expected a square matrix, got {}x{}",
            a.rows, a.cols
        )));
    }

    let n = a.rows;
    let mut q = a.clone();
    let mut r = Matrix::zeros(n, n);

    for j in 0..n {
        let norm = euclidean_norm(&q.col(j));
        if norm < NEGLIGIBLE {
            return Err(SolveError::Singular(format!(
                "column {j} becomes zero during orthogonalization, columns are linearly dependent"
            )));
        }

        r.set(j, j, norm);
        for i in 0..n {
            let v = q.at(i, j) / norm;
            q.set(i, j, v);
        }

        // Remove the finished direction from every remaining column
        for k in j + 1..n {
            let mut proj = 0.0;
            for i in 0..n {
                proj += q.at(i, j) * q.at(i, k);
            }
            r.set(j, k, proj);
            for i in 0..n {
                let v = q.at(i, k) - proj * q.at(i, j);
                q.set(i, k, v);
            }
        }
    }

    Ok((q, r))
}
