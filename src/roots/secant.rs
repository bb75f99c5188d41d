//! Secant Method.
//!
//! Replaces Newton's tangent by the chord through the two most recent
//! iterates, trading some convergence speed for derivative-free steps.
//! Unlike bisection the starting points need not bracket the root, so a
//! missing sign change only warrants a warning.

use num_traits::Float;

use crate::roots::{RootError, RootResult};

/// Find a root of `f` starting from the points `a` and `b`.
///
/// Iterates `x' = x1 - f(x1) (x1 - x0) / (f(x1) - f(x0))`, stopping
/// early when the residual drops below `eps.sqrt()` or the chord becomes
/// flat mid-iteration. Equal function values at the starting points are
/// an error; a missing sign change only triggers a warning.
pub fn secant<T, F>(f: F, a: T, b: T, iterations: usize) -> RootResult<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let fa = f(a);
    let fb = f(b);

    if fa == fb {
        return Err(RootError::FlatSecant);
    }

    if fa * fb > T::zero() {
        tracing::warn!("no sign change between the starting points, a root may not exist there");
    }

    let mut x0 = a;
    let mut x1 = b;
    let mut f0 = fa;
    let mut f1 = fb;

    for _ in 0..iterations {
        if f1 == f0 {
            tracing::warn!("secant step degenerated to a flat chord, stopping early");
            break;
        }

        let x_new = x1 - f1 * (x1 - x0) / (f1 - f0);
        let f_new = f(x_new);

        x0 = x1;
        f0 = f1;
        x1 = x_new;
        f1 = f_new;

        if f_new.abs() < T::epsilon().sqrt() {
            break;
        }
    }

    Ok(x1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secant_cubic() {
        // x^3 - 2x - 5 has its real root near 2.0945514815
        let root = secant(|x: f64| x * x * x - 2.0 * x - 5.0, 2.0, 3.0, 20).unwrap();
        assert!((root - 2.094_551_481_5).abs() < 1e-8);
    }

    #[test]
    fn test_secant_without_bracket_still_converges() {
        // Both starting values on the same side of the root
        let root = secant(|x: f64| x * x - 4.0, 3.0, 5.0, 40).unwrap();
        assert!((root - 2.0).abs() < 1e-8);
    }

    #[test]
    fn test_secant_flat_start_rejected() {
        let result = secant(|x: f64| x * x, -1.0, 1.0, 10);
        assert_eq!(result, Err(RootError::FlatSecant));
    }

    #[test]
    fn test_secant_linear_converges_immediately() {
        let root = secant(|x: f64| 2.0 * x - 6.0, 0.0, 1.0, 5).unwrap();
        assert!((root - 3.0).abs() < 1e-12);
    }
}
