//! Error Types for the Linear-Algebra Routines.
//!
//! One shared error enum covers the dense solvers, the inverter, the
//! iterative methods, and QR factorization, so callers handle the whole
//! family uniformly. Root finding and the machine-number model carry
//! their own error types in their modules.

/// Errors raised by the dense linear-algebra routines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// Row or length counts of two operands disagree
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        got: usize,
    },

    /// Input violates a shape contract (non-square, more unknowns than equations)
    #[error("invalid shape: {0}")]
    Shape(String),

    /// Zero-sized matrix where a non-empty one is required
    #[error("empty input provided")]
    EmptyInput,

    /// Elimination could not find a usable pivot
    #[error("singular matrix: {0}")]
    Singular(String),

    /// A matrix splitting requires a non-zero diagonal
    #[error("zero diagonal element at row {row}")]
    ZeroDiagonal {
        /// Row index of the offending diagonal entry
        row: usize,
    },

    /// Configuration values are unusable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for the linear-algebra routines
pub type SolveResult<T> = Result<T, SolveError>;
