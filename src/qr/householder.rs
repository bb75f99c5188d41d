//! Householder Reflections and Householder QR.
//!
//! A Householder reflection `H = I - 2 v v^T / (v^T v)` mirrors points
//! across the hyperplane orthogonal to `v`; it is symmetric, orthogonal,
//! and its own inverse. Zeroing the below-diagonal part of one column at
//! a time with such reflections yields a QR decomposition that is more
//! robust than Gram-Schmidt on ill-conditioned input.

use crate::error::{SolveError, SolveResult};
use crate::matrix::{euclidean_norm, Matrix};

/// Below-diagonal entries smaller than this are zeroed after the sweep
const CLEANUP_THRESHOLD: f64 = 1e-10;

/// Build the Householder matrix reflecting `p` onto `p_prime`.
///
/// Returns the identity when the two points coincide within a tolerance
/// scaled to their magnitudes. The result `H` satisfies `H p = p_prime`
/// and `H p_prime = p`.
pub fn householder_reflection(p: &[f64], p_prime: &[f64]) -> SolveResult<Matrix> {
    if p.len() != p_prime.len() {
        return Err(SolveError::DimensionMismatch {
            expected: p.len(),
            got: p_prime.len(),
        });
    }

    let n = p.len();
    let v: Vec<f64> = p.iter().zip(p_prime).map(|(&a, &b)| a - b).collect();

    let tol = f64::EPSILON
        * euclidean_norm(p)
            .max(euclidean_norm(p_prime))
            .max(1.0);
    let v_norm = euclidean_norm(&v);
    if v_norm < tol {
        return Ok(Matrix::identity(n));
    }

    let v_dot: f64 = v.iter().map(|&x| x * x).sum();
    let mut h = Matrix::identity(n);
    for i in 0..n {
        for j in 0..n {
            let val = h.at(i, j) - 2.0 * v[i] * v[j] / v_dot;
            h.set(i, j, val);
        }
    }

    Ok(h)
}

/// QR-decompose a square matrix with Householder reflections.
///
/// For each column the reflection maps the below-diagonal subvector onto
/// a multiple of the first basis vector, using the `-sign(x[0]) * ||x||`
/// convention to avoid cancellation. `Q` accumulates the product of the
/// reflections; near-zero below-diagonal residue in `R` is cleaned up at
/// the end.
pub fn householder_qr(a: &Matrix) -> SolveResult<(Matrix, Matrix)> {
    if !a.is_square() {
        return Err(SolveError::Shape(format!(
            "expected a square matrix, got {}x{}",
            a.rows, a.cols
        )));
    }

    let n = a.rows;
    let mut r = a.clone();
    let mut q = Matrix::identity(n);

    for k in 0..n.saturating_sub(1) {
        let x: Vec<f64> = (k..n).map(|i| r.at(i, k)).collect();
        let x_norm = euclidean_norm(&x);

        if x_norm < f64::EPSILON {
            // Column already zero below the diagonal
            continue;
        }

        let sigma = if x[0] >= 0.0 { -x_norm } else { x_norm };

        // Householder vector v = x - sigma * e1
        let mut v = x;
        v[0] -= sigma;

        let v_norm_sq: f64 = v.iter().map(|&x| x * x).sum();
        if v_norm_sq < f64::EPSILON {
            continue;
        }

        // Full-size reflector acting on the trailing subspace
        let mut h = Matrix::identity(n);
        for i in 0..v.len() {
            for j in 0..v.len() {
                let val = h.at(k + i, k + j) - 2.0 * v[i] * v[j] / v_norm_sq;
                h.set(k + i, k + j, val);
            }
        }

        r = h.matmul(&r)?;
        q = q.matmul(&h)?;
    }

    for i in 0..n {
        for j in 0..i {
            if r.at(i, j).abs() < CLEANUP_THRESHOLD {
                r.set(i, j, 0.0);
            }
        }
    }

    Ok((q, r))
}
