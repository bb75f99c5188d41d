//! Property-based tests for numerik
//!
//! This module contains property tests for:
//! - Gaussian elimination, inversion, and LU consistency
//! - Iterative solver convergence on diagonally dominant systems
//! - Root-finding correctness

mod gauss_properties;
mod iterative_properties;
mod roots_properties;
