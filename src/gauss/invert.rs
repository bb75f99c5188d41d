//! Matrix Inversion, Determinant, and LU Decomposition.
//!
//! The inverse is obtained by solving `A * X = I` with the full-pivoting
//! eliminator; the determinant and the `L`/`U` factors come from an
//! independent partial-pivoted elimination sweep over a fresh copy of the
//! input. The two runs compute related quantities but share no pivot
//! state.
//!
//! Singularity is not an error here: a singular input produces the
//! [`Inversion::Singular`] outcome with determinant exactly `0.0`, so
//! callers branch on the result instead of catching anything. Only a
//! malformed input (non-square, empty) is rejected.

use serde::{Deserialize, Serialize};

use crate::error::{SolveError, SolveResult};
use crate::gauss::pivoted::{self, PivotStrategy};
use crate::matrix::Matrix;
use crate::NEGLIGIBLE;

/// Outcome of a matrix inversion.
///
/// When the input is invertible, `L * U` reconstructs the input with its
/// rows in the order actually pivoted during the decomposition sweep
/// (row swaps are absorbed into both factors; column swaps never occur
/// on this path).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inversion {
    /// The matrix is invertible
    Invertible {
        /// Inverse of the input
        inverse: Matrix,
        /// Determinant, the running product of pivots
        determinant: f64,
        /// Unit-lower-triangular factor
        lower: Matrix,
        /// Upper-triangular factor
        upper: Matrix,
    },
    /// The matrix is (numerically) singular
    Singular,
}

impl Inversion {
    /// Whether the input was judged singular.
    pub fn is_singular(&self) -> bool {
        matches!(self, Inversion::Singular)
    }

    /// Determinant; exactly `0.0` for the singular outcome.
    pub fn determinant(&self) -> f64 {
        match self {
            Inversion::Invertible { determinant, .. } => *determinant,
            Inversion::Singular => 0.0,
        }
    }

    /// The inverse, if the matrix was invertible.
    pub fn inverse(&self) -> Option<&Matrix> {
        match self {
            Inversion::Invertible { inverse, .. } => Some(inverse),
            Inversion::Singular => None,
        }
    }

    /// The unit-lower-triangular factor, if the matrix was invertible.
    pub fn lower(&self) -> Option<&Matrix> {
        match self {
            Inversion::Invertible { lower, .. } => Some(lower),
            Inversion::Singular => None,
        }
    }

    /// The upper-triangular factor, if the matrix was invertible.
    pub fn upper(&self) -> Option<&Matrix> {
        match self {
            Inversion::Invertible { upper, .. } => Some(upper),
            Inversion::Singular => None,
        }
    }
}

/// Compute the inverse, determinant, and LU decomposition of a square
/// matrix.
///
/// Errors only on malformed input: [`SolveError::Shape`] for a
/// non-square matrix, [`SolveError::EmptyInput`] for a zero-sized one.
/// Every singularity outcome, including unexpected solver failures, maps
/// to [`Inversion::Singular`].
pub fn invert(a: &Matrix) -> SolveResult<Inversion> {
    if !a.is_square() {
        return Err(SolveError::Shape(format!(
            "expected a square matrix, got {}x{}",
            a.rows, a.cols
        )));
    }

    if a.is_empty() {
        return Err(SolveError::EmptyInput);
    }

    let n = a.rows;

    // Inverse via solve-against-identity, full pivoting for robustness.
    // Any failure inside the solver means the matrix is singular.
    let identity = Matrix::identity(n);
    let inverse = match pivoted::solve(a, &identity, PivotStrategy::Full) {
        Ok(x) => x,
        Err(_) => {
            tracing::warn!("matrix is singular, inverse does not exist");
            return Ok(Inversion::Singular);
        }
    };

    // Independent partial-pivoted sweep for L, U, and the determinant
    let mut lower = Matrix::identity(n);
    let mut upper = a.clone();
    let mut determinant = 1.0;

    for i in 0..n - 1 {
        if upper.at(i, i).abs() < NEGLIGIBLE {
            let mut found = false;
            for r in i + 1..n {
                if upper.at(r, i).abs() > NEGLIGIBLE {
                    upper.swap_rows(i, r);
                    // Only the already-filled multiplier columns of L
                    // move with the rows
                    for c in 0..i {
                        lower.data.swap(i * n + c, r * n + c);
                    }
                    determinant = -determinant;
                    found = true;
                    break;
                }
            }

            if !found {
                tracing::warn!("matrix is singular, inverse does not exist");
                return Ok(Inversion::Singular);
            }
        }

        determinant *= upper.at(i, i);

        for j in i + 1..n {
            if upper.at(j, i).abs() > NEGLIGIBLE {
                let factor = upper.at(j, i) / upper.at(i, i);
                lower.set(j, i, factor);
                for c in 0..n {
                    let v = upper.at(j, c) - factor * upper.at(i, c);
                    upper.set(j, c, v);
                }
            }
        }
    }

    determinant *= upper.at(n - 1, n - 1);

    // A vanishing pivot product is singular even when every individual
    // pivot search succeeded
    if determinant.abs() < NEGLIGIBLE {
        tracing::warn!("matrix is singular, inverse does not exist");
        return Ok(Inversion::Singular);
    }

    Ok(Inversion::Invertible {
        inverse,
        determinant,
        lower,
        upper,
    })
}
