//! Iterative Linear-System Solvers.
//!
//! Fixed-point iterations for `A * x = b` based on matrix splittings:
//! - [`jacobi`]: splitting `A = D - R`, all components updated from the
//!   previous iterate
//! - [`gauss_seidel`]: splitting `A = (D + L) - U`, components updated
//!   in place within each sweep
//! - [`relaxation`]: spectral-radius analysis of the weighted Jacobi
//!   iteration to pick the relaxation parameter
//!
//! Both solvers converge for strictly diagonally dominant systems;
//! Gauss-Seidel additionally for symmetric positive definite ones, and
//! typically faster than Jacobi on the same system. Non-convergence is
//! not an error: the last iterate is returned with `converged: false`
//! and a non-fatal warning.

pub mod gauss_seidel;
pub mod jacobi;
pub mod relaxation;

pub use gauss_seidel::gauss_seidel;
pub use jacobi::jacobi;
pub use relaxation::{analyze_relaxation, spectral_radius, OmegaAnalysis, RelaxationConfig};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SolveError, SolveResult};
use crate::matrix::Matrix;
use crate::NEGLIGIBLE;

/// Configuration for the fixed-point iterations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationConfig {
    /// Convergence tolerance on the infinity norm of the iterate difference
    pub tolerance: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Starting iterate; the zero vector when absent
    pub initial_guess: Option<Vec<f64>>,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 1000,
            initial_guess: None,
        }
    }
}

/// Result of an iterative solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationOutcome {
    /// Final iterate
    pub x: Vec<f64>,
    /// Whether the tolerance was reached within the iteration limit
    pub converged: bool,
    /// Iterations performed
    pub iterations: usize,
    /// Final residual norm `||A x - b||`
    pub residual_norm: f64,
    /// Residual norm after each iteration
    pub residual_history: Vec<f64>,
}

impl fmt::Display for IterationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.converged {
            "Converged"
        } else {
            "Did not converge"
        };
        write!(
            f,
            "{status} in {} iterations, final residual norm {:.6e}",
            self.iterations, self.residual_norm
        )
    }
}

/// Validate the inputs shared by the iterative solvers and produce the
/// starting iterate.
pub(crate) fn prepare_iteration(
    a: &Matrix,
    b: &[f64],
    config: &IterationConfig,
) -> SolveResult<Vec<f64>> {
    if !a.is_square() {
        return Err(SolveError::Shape(format!(
            "expected a square matrix, got {}x{}",
            a.rows, a.cols
        )));
    }

    let n = a.rows;
    if b.len() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    for i in 0..n {
        if a.at(i, i).abs() < NEGLIGIBLE {
            return Err(SolveError::ZeroDiagonal { row: i });
        }
    }

    match &config.initial_guess {
        Some(x0) => {
            if x0.len() != n {
                return Err(SolveError::DimensionMismatch {
                    expected: n,
                    got: x0.len(),
                });
            }
            Ok(x0.clone())
        }
        None => Ok(vec![0.0; n]),
    }
}

/// Residual norm `||A x - b||` in the Euclidean norm.
pub(crate) fn residual_norm(a: &Matrix, x: &[f64], b: &[f64]) -> f64 {
    let mut sum = 0.0;
    for i in 0..a.rows {
        let mut acc = 0.0;
        for j in 0..a.cols {
            acc += a.at(i, j) * x[j];
        }
        let r = acc - b[i];
        sum += r * r;
    }
    sum.sqrt()
}
