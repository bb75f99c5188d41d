//! Numerik: Classical Numerical-Analysis Routines
//!
//! This crate collects self-contained implementations of the classical
//! numerical-analysis toolbox:
//! - **Gaussian elimination**: direct linear solvers with partial/full
//!   pivoting, matrix inversion, LU decomposition, determinants
//! - **Iterative solvers**: Jacobi and Gauss-Seidel iteration, plus
//!   relaxation-parameter analysis for the weighted Jacobi method
//! - **QR factorization**: modified Gram-Schmidt and Householder
//!   reflections
//! - **Root finding**: bisection, secant, and Newton-Raphson methods
//! - **Machine numbers**: a toy floating-point model for teaching how
//!   finite mantissas shape the representable number line
//!
//! # Architecture
//!
//! Each routine is independent: it takes its inputs, works on private
//! copies, and returns fresh outputs. There is no shared runtime and no
//! state carried between calls, so concurrent use needs no locking.
//!
//! The direct-solver family is layered: [`gauss::basic`] performs plain
//! elimination with naive row swaps, [`gauss::pivoted`] adds partial and
//! full pivoting with automatic escalation, and [`gauss::invert`] builds
//! inversion, determinants, and LU decomposition on top of the pivoted
//! eliminator.
//!
//! # Examples
//!
//! ```rust
//! use numerik::matrix::Matrix;
//! use numerik::gauss::{basic, invert};
//!
//! let a = Matrix::from_rows(&[
//!     vec![2.0, 1.0, -1.0],
//!     vec![-3.0, -1.0, 2.0],
//!     vec![-2.0, 1.0, 2.0],
//! ]).unwrap();
//! let b = Matrix::column_vector(&[8.0, -11.0, -3.0]);
//!
//! let x = basic::solve(&a, &b).unwrap();
//! assert!((x.at(0, 0) - 2.0).abs() < 1e-10);
//!
//! let result = invert::invert(&a).unwrap();
//! assert!(!result.is_singular());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

/// Dense matrix storage and arithmetic
pub mod matrix;

/// Error types shared by the linear-algebra routines
pub mod error;

/// Gaussian elimination: direct solvers, inversion, LU
pub mod gauss;

/// Iterative linear-system solvers
pub mod iterative;

/// QR factorization
pub mod qr;

/// Root finding for nonlinear equations
pub mod roots;

/// Toy machine-number model
pub mod machine;

// Re-export commonly used types
pub use error::{SolveError, SolveResult};
pub use gauss::invert::{invert, Inversion};
pub use gauss::pivoted::{EliminationStats, PivotStrategy, PivotedEliminator};
pub use iterative::{gauss_seidel, jacobi, IterationConfig, IterationOutcome};
pub use matrix::Matrix;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Magnitude below which an entry is treated as zero.
///
/// Shared by every component that makes a singularity judgment (pivot
/// selection, post-elimination checks, diagonal validation) so the
/// components agree on what counts as negligible.
pub const NEGLIGIBLE: f64 = 1e-12;
