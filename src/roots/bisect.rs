//! Bisection Method.
//!
//! Repeatedly halves an interval known to contain a root (by the
//! intermediate value theorem) and keeps the half where the sign change
//! persists. Slow but unconditionally convergent once the bracket is
//! established.

use num_traits::Float;

use crate::roots::{RootError, RootResult};

/// A root approximation with its interval-derived error bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    /// Approximate root (midpoint of the final interval)
    pub root: T,
    /// Error estimate (half-width of the final interval)
    pub error_estimate: T,
}

/// Find a root of `f` in `[a, b]` by bisection.
///
/// Requires `f(a)` and `f(b)` to have opposite signs. An exact zero at
/// an endpoint or midpoint is returned immediately with a zero error
/// estimate; otherwise the interval is halved `iterations` times.
pub fn bisect<T, F>(f: F, a: T, b: T, iterations: usize) -> RootResult<Bracket<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    let fa = f(a);
    let fb = f(b);

    if fa * fb > T::zero() {
        return Err(RootError::NoSignChange);
    }

    if fa == T::zero() {
        return Ok(Bracket {
            root: a,
            error_estimate: T::zero(),
        });
    }
    if fb == T::zero() {
        return Ok(Bracket {
            root: b,
            error_estimate: T::zero(),
        });
    }

    let two = T::one() + T::one();
    let mut lo = a;
    let mut hi = b;
    let mut f_lo = fa;

    for _ in 0..iterations {
        let mid = (lo + hi) / two;
        let f_mid = f(mid);

        if f_mid == T::zero() {
            return Ok(Bracket {
                root: mid,
                error_estimate: T::zero(),
            });
        }

        if f_lo * f_mid < T::zero() {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    Ok(Bracket {
        root: (lo + hi) / two,
        error_estimate: (hi - lo) / two,
    })
}
