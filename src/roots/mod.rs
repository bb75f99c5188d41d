//! Root Finding for Nonlinear Equations.
//!
//! Three classical one-dimensional methods, generic over the float type:
//! - [`bisect`]: interval halving, robust whenever a sign change brackets
//!   the root
//! - [`secant`]: chords through the two most recent iterates, no
//!   derivative needed
//! - [`newton`]: tangent steps from an explicit derivative, with
//!   [`newton_numeric`] substituting a central finite difference
//!
//! Symbolic differentiation is deliberately out of scope; the numeric
//! Newton variant uses a central difference with step `eps.sqrt()`.

pub mod bisect;
pub mod newton;
pub mod secant;

pub use bisect::{bisect, Bracket};
pub use newton::{newton, newton_numeric};
pub use secant::secant;

/// Errors raised by the root-finding methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RootError {
    /// The starting interval does not bracket a sign change
    #[error("no sign change in the starting interval, cannot guarantee a root exists")]
    NoSignChange,

    /// The function values at the starting points coincide
    #[error("function values at the starting points are equal, secant step undefined")]
    FlatSecant,
}

/// Result type for the root-finding methods
pub type RootResult<T> = Result<T, RootError>;
