//! Newton-Raphson Method.
//!
//! Tangent-line iteration `x' = x - f(x) / f'(x)`. Quadratically
//! convergent near a simple root, but requires the derivative and stalls
//! where it vanishes; the iteration stops with a warning in that case
//! rather than dividing by a near-zero slope.

use num_traits::Float;

/// Find a root of `f` from the starting point `x0`, using the explicit
/// derivative `df`.
///
/// Runs at most `iterations` steps, stopping early when the step size
/// drops below `eps.sqrt()` or the derivative becomes negligible. The
/// last iterate is returned either way; callers judge quality by
/// `f(result)`.
pub fn newton<T, F, D>(f: F, df: D, x0: T, iterations: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    let mut x = x0;

    for _ in 0..iterations {
        let fx = f(x);
        let dfx = df(x);

        if dfx.abs() < T::epsilon() {
            tracing::warn!("derivative near zero, stopping Newton iteration");
            break;
        }

        let x_new = x - fx / dfx;

        if (x_new - x).abs() < T::epsilon().sqrt() {
            x = x_new;
            break;
        }

        x = x_new;
    }

    x
}

/// Newton-Raphson with a central-difference derivative.
///
/// Approximates `f'(x)` by `(f(x + h) - f(x - h)) / (2h)` with
/// `h = eps.sqrt()`, then iterates exactly like [`newton`].
pub fn newton_numeric<T, F>(f: F, x0: T, iterations: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let h = T::epsilon().sqrt();
    let two = T::one() + T::one();

    newton(&f, |x| (f(x + h) - f(x - h)) / (two * h), x0, iterations)
}
