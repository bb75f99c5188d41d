//! Gaussian Elimination: Direct Solvers, Inversion, LU.
//!
//! The direct-solver family is layered:
//! - [`basic`]: elimination without pivoting, naive row swap only on an
//!   exact zero pivot
//! - [`pivoted`]: selectable partial (row-only) or full (row + column)
//!   pivoting, with automatic escalation from partial to full when the
//!   column scan dead-ends; supports multiple right-hand-side columns
//! - [`invert`]: matrix inverse, determinant, and a partial-pivoted LU
//!   decomposition built on top of the pivoted eliminator
//!
//! All three share one notion of "negligible" ([`crate::NEGLIGIBLE`]) so
//! their singularity judgments agree.

pub mod basic;
pub mod invert;
pub mod pivoted;

pub use invert::{invert, Inversion};
pub use pivoted::{EliminationStats, PivotStrategy, PivotedEliminator};

use crate::matrix::Matrix;
use crate::NEGLIGIBLE;

/// Subtract multiples of pivot row `i` from every lower row of the
/// augmented matrix, zeroing column `i` below the diagonal.
pub(crate) fn eliminate_below(aug: &mut Matrix, i: usize) {
    let pivot = aug.at(i, i);
    for j in i + 1..aug.rows {
        if aug.at(j, i).abs() > NEGLIGIBLE {
            let factor = aug.at(j, i) / pivot;
            for c in 0..aug.cols {
                let v = aug.at(j, c) - factor * aug.at(i, c);
                aug.set(j, c, v);
            }
        }
    }
}

/// Back-substitute each right-hand-side column of a forward-eliminated
/// augmented matrix, bottom-up. Positions with a negligible diagonal are
/// left at zero (free variables of an underdetermined system).
pub(crate) fn back_substitute(aug: &Matrix, n: usize, m: usize, k: usize) -> Matrix {
    let mut x = Matrix::zeros(m, k);

    for col in 0..k {
        for i in (0..n.min(m)).rev() {
            if aug.at(i, i).abs() < NEGLIGIBLE {
                continue;
            }

            let mut acc = aug.at(i, m + col);
            for j in i + 1..m {
                acc -= aug.at(i, j) * x.at(j, col);
            }
            x.set(i, col, acc / aug.at(i, i));
        }
    }

    x
}
