//! Property-based tests for the root-finding methods

use numerik::roots::{bisect, newton, secant};
use proptest::prelude::*;

proptest! {
    /// Bisection pins the root of a shifted identity to the bracket width
    #[test]
    fn bisect_finds_linear_root(r in -100.0..100.0f64) {
        let result = bisect(|x: f64| x - r, r - 1.5, r + 2.5, 50).unwrap();
        prop_assert!((result.root - r).abs() < 1e-9);
    }

    /// Bisection error estimate is an actual bound on the error
    #[test]
    fn bisect_error_estimate_bounds_error(
        c in 1.0..50.0f64,
        iterations in 5usize..30
    ) {
        let result = bisect(|x: f64| x * x - c, 0.0, c.max(1.0) + 1.0, iterations).unwrap();
        prop_assert!((result.root - c.sqrt()).abs() <= result.error_estimate + 1e-12);
    }

    /// The secant method solves linear equations essentially exactly
    #[test]
    fn secant_solves_linear(
        m in 0.5..10.0f64,
        c in -20.0..20.0f64
    ) {
        let root = secant(|x: f64| m * x + c, -30.0, 40.0, 20).unwrap();
        prop_assert!((root - (-c / m)).abs() < 1e-7);
    }

    /// Newton converges to the square root from above
    #[test]
    fn newton_computes_square_roots(c in 0.5..100.0f64) {
        let root = newton(|x: f64| x * x - c, |x| 2.0 * x, c + 1.0, 60);
        prop_assert!((root - c.sqrt()).abs() < 1e-8);
    }
}
