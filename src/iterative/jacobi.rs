//! Jacobi Iteration.
//!
//! Uses the splitting `A = D - R` where `D` is the diagonal of `A`. Each
//! sweep computes `x' = D^-1 (b - R x)` from the previous iterate only,
//! so the components of a sweep are independent of each other.

use crate::error::SolveResult;
use crate::iterative::{prepare_iteration, residual_norm, IterationConfig, IterationOutcome};
use crate::matrix::{inf_norm_diff, Matrix};

/// Solve `A * x = b` by Jacobi iteration.
///
/// Requires a square matrix with a non-zero diagonal. Convergence is
/// tested on the infinity norm of the iterate difference; when the
/// iteration limit is hit without converging, the last iterate is
/// returned with `converged: false` and a warning is emitted.
pub fn jacobi(a: &Matrix, b: &[f64], config: &IterationConfig) -> SolveResult<IterationOutcome> {
    let mut x = prepare_iteration(a, b, config)?;
    let n = a.rows;

    let mut residual_history = Vec::new();

    for iteration in 1..=config.max_iterations {
        let mut x_new = vec![0.0; n];
        for i in 0..n {
            let mut acc = b[i];
            for j in 0..n {
                if j != i {
                    acc -= a.at(i, j) * x[j];
                }
            }
            x_new[i] = acc / a.at(i, i);
        }

        residual_history.push(residual_norm(a, &x_new, b));

        if inf_norm_diff(&x_new, &x) < config.tolerance {
            tracing::debug!(iterations = iteration, "jacobi converged");
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
        "jacobi did not converge within the iteration limit"
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
