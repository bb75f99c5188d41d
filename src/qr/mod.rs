//! QR Factorization.
//!
//! Two routes to `A = Q * R` with `Q` orthogonal and `R` upper
//! triangular:
//! - [`gram_schmidt`]: modified Gram-Schmidt, orthogonalizing the
//!   columns in place
//! - [`householder_qr`]: a sequence of Householder reflections zeroing
//!   the below-diagonal entries column by column, the more stable choice
//!   for ill-conditioned input
//!
//! The standalone reflector [`householder_reflection`] builds the
//! symmetric orthogonal matrix mapping one point onto another.

pub mod gram_schmidt;
pub mod householder;

pub use gram_schmidt::gram_schmidt;
pub use householder::{householder_qr, householder_reflection};
