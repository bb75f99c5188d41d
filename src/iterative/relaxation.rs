//! Weighted-Jacobi Relaxation Parameter Analysis.
//!
//! The weighted (damped) Jacobi iteration
//! `x' = (1 - w) x + w D^-1 (b - R x)` has iteration matrix
//! `T_w = I - w D^-1 A`; it converges exactly when the spectral radius
//! of `T_w` is below one, and converges fastest at the omega minimizing
//! that radius. This module scans an omega range, computes the spectral
//! radius at each point, and reports the optimum together with the
//! convergence interval.
//!
//! Spectral radii are obtained by unshifted QR iteration on top of
//! [`crate::qr::householder_qr`], reading eigenvalue magnitudes off the
//! quasi-triangular limit (2x2 bumps on the diagonal cover complex
//! conjugate pairs). Adequate for the small dense systems this crate
//! targets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SolveError, SolveResult};
use crate::matrix::Matrix;
use crate::qr::householder_qr;
use crate::NEGLIGIBLE;

/// QR-iteration sweeps used per spectral-radius evaluation
const QR_SWEEPS: usize = 150;

/// Subdiagonal entries above this magnitude mark an unconverged 2x2 block
const BLOCK_THRESHOLD: f64 = 1e-9;

/// Omega scan range for the relaxation analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelaxationConfig {
    /// First omega to test
    pub omega_start: f64,
    /// Last omega to test (inclusive up to rounding)
    pub omega_end: f64,
    /// Scan step
    pub omega_step: f64,
}

impl Default for RelaxationConfig {
    fn default() -> Self {
        Self {
            omega_start: 0.0,
            omega_end: 2.0,
            omega_step: 0.01,
        }
    }
}

/// Result of the omega scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmegaAnalysis {
    /// Omega with the smallest spectral radius
    pub omega_opt: f64,
    /// Spectral radius at `omega_opt`
    pub rho_opt: f64,
    /// First and last scanned omega with spectral radius below one
    pub convergence_interval: Option<(f64, f64)>,
    /// Omegas tested
    pub omega_values: Vec<f64>,
    /// Spectral radius per tested omega
    pub rho_values: Vec<f64>,
}

impl fmt::Display for OmegaAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weighted Jacobi parameter analysis")?;
        writeln!(f, "  optimal omega:        {:.6}", self.omega_opt)?;
        writeln!(f, "  optimal rho:          {:.6}", self.rho_opt)?;
        match self.convergence_interval {
            Some((lo, hi)) => write!(f, "  convergence interval: [{lo:.6}, {hi:.6}]"),
            None => write!(f, "  convergence interval: none"),
        }
    }
}

/// Scan the omega range and report the spectral radius of the weighted
/// Jacobi iteration matrix at each point.
///
/// Requires a square matrix with non-zero diagonal. Emits a non-fatal
/// warning when no omega in the range converges.
pub fn analyze_relaxation(a: &Matrix, config: &RelaxationConfig) -> SolveResult<OmegaAnalysis> {
    if !a.is_square() {
        return Err(SolveError::Shape(format!(
            "expected a square matrix, got {}x{}",
            a.rows, a.cols
        )));
    }

    if !(config.omega_step > 0.0) || config.omega_end < config.omega_start {
        return Err(SolveError::InvalidConfig(
            "omega scan range must be non-empty with a positive step".into(),
        ));
    }

    let n = a.rows;
    for i in 0..n {
        if a.at(i, i).abs() < NEGLIGIBLE {
            return Err(SolveError::ZeroDiagonal { row: i });
        }
    }

    // D^-1 A, rows scaled by the reciprocal diagonal
    let mut d_inv_a = a.clone();
    for i in 0..n {
        let d = a.at(i, i);
        for j in 0..n {
            let v = d_inv_a.at(i, j) / d;
            d_inv_a.set(i, j, v);
        }
    }

    let steps = ((config.omega_end - config.omega_start) / config.omega_step).round() as usize;
    let mut omega_values = Vec::with_capacity(steps + 1);
    let mut rho_values = Vec::with_capacity(steps + 1);

    for s in 0..=steps {
        let omega = config.omega_start + s as f64 * config.omega_step;

        // T_w = I - w * D^-1 A
        let mut t = d_inv_a.scale(-omega);
        for i in 0..n {
            let v = t.at(i, i) + 1.0;
            t.set(i, i, v);
        }

        omega_values.push(omega);
        rho_values.push(spectral_radius(&t)?);
    }

    let mut idx_opt = 0;
    for (i, &rho) in rho_values.iter().enumerate() {
        if rho < rho_values[idx_opt] {
            idx_opt = i;
        }
    }

    let converging: Vec<usize> = (0..rho_values.len())
        .filter(|&i| rho_values[i] < 1.0)
        .collect();
    let convergence_interval = match (converging.first(), converging.last()) {
        (Some(&first), Some(&last)) => Some((omega_values[first], omega_values[last])),
        _ => {
            tracing::warn!("no convergence interval found in the scanned omega range");
            None
        }
    };

    Ok(OmegaAnalysis {
        omega_opt: omega_values[idx_opt],
        rho_opt: rho_values[idx_opt],
        convergence_interval,
        omega_values,
        rho_values,
    })
}

/// Spectral radius of a square matrix via unshifted QR iteration.
pub fn spectral_radius(m: &Matrix) -> SolveResult<f64> {
    if !m.is_square() {
        return Err(SolveError::Shape(format!(
            "expected a square matrix, got {}x{}",
            m.rows, m.cols
        )));
    }

    let n = m.rows;
    if n == 0 {
        return Ok(0.0);
    }

    let mut a = m.clone();
    for _ in 0..QR_SWEEPS {
        let (q, r) = householder_qr(&a)?;
        a = r.matmul(&q)?;
    }

    // Read eigenvalue magnitudes off the quasi-triangular limit
    let mut rho: f64 = 0.0;
    let mut i = 0;
    while i < n {
        if i + 1 < n && a.at(i + 1, i).abs() > BLOCK_THRESHOLD {
            // Unreduced 2x2 block, possibly a complex conjugate pair
            let tr = a.at(i, i) + a.at(i + 1, i + 1);
            let det = a.at(i, i) * a.at(i + 1, i + 1) - a.at(i, i + 1) * a.at(i + 1, i);
            let disc = tr * tr / 4.0 - det;
            if disc >= 0.0 {
                let sq = disc.sqrt();
                rho = rho.max((tr / 2.0 + sq).abs()).max((tr / 2.0 - sq).abs());
            } else {
                rho = rho.max(det.abs().sqrt());
            }
            i += 2;
        } else {
            rho = rho.max(a.at(i, i).abs());
            i += 1;
        }
    }

    Ok(rho)
}
