//! Gauss-Seidel Iteration.
//!
//! Uses the splitting `A = (D + L) - U` where `D` is the diagonal, `L`
//! the strictly lower and `U` the strictly upper triangle. Each sweep
//! solves `(D + L) x' = b - U x` by forward substitution, so freshly
//! updated components are used immediately within the sweep.

use crate::error::SolveResult;
use crate::iterative::{prepare_iteration, residual_norm, IterationConfig, IterationOutcome};
use crate::matrix::{inf_norm_diff, Matrix};

/// Solve `A * x = b` by Gauss-Seidel iteration.
///
/// Same contract as the Jacobi solver: square matrix, non-zero
/// diagonal, non-convergence reported in the outcome rather than as an
/// error.
pub fn gauss_seidel(
    a: &Matrix,
    b: &[f64],
    config: &IterationConfig,
) -> SolveResult<IterationOutcome> {
    let mut x = prepare_iteration(a, b, config)?;
    let n = a.rows;

    let mut residual_history = Vec::new();

    for iteration in 1..=config.max_iterations {
        let mut x_new = x.clone();
        for i in 0..n {
            let mut acc = b[i];
            for j in 0..i {
                acc -= a.at(i, j) * x_new[j];
            }
            for j in i + 1..n {
                acc -= a.at(i, j) * x[j];
            }
            x_new[i] = acc / a.at(i, i);
        }

        residual_history.push(residual_norm(a, &x_new, b));

        if inf_norm_diff(&x_new, &x) < config.tolerance {
            tracing::debug!(iterations = iteration, "gauss-seidel converged");
            let final_residual = residual_norm(a, &x_new, b);
            return Ok(IterationOutcome {
                x: x_new,
                converged: true,
                iterations: iteration,
                residual_norm: final_residual,
                residual_history,
            });
        }

        x = x_new;
    }

    tracing::warn!(
        max_iterations = config.max_iterations,
        "gauss-seidel did not converge within the iteration limit"
    );
    let final_residual = residual_norm(a, &x, b);
    Ok(IterationOutcome {
        x,
        converged: false,
        iterations: config.max_iterations,
        residual_norm: final_residual,
        residual_history,
    })
}
