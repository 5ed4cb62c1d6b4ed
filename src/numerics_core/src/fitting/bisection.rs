//! # Bisection
//!
//! Linear root finding by repeated halving of a bracket.
//
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::fmt::Debug;

use tracing::debug;

use super::{ConvergenceError, FittingResult};
use crate::special::sign;

/// Bisection stops once the half width of the bracket falls below this value.
pub const BISECT_TOLERANCE: f64 = 1e-11;

/// Maximum number of halvings performed by [`bisect`].
pub const BISECT_MAX_ITERATIONS: usize = 100;

/// Find a root of `func` by bisection of the bracket `[a, b]`.
///
/// Every round evaluates `func` at the midpoint `c`. The midpoint is returned as soon
/// as `func(c)` is exactly zero or the half width of the bracket is below
/// [`BISECT_TOLERANCE`]. Otherwise the bound with the same sign as the midpoint moves
/// to `c`, where `func(a)` is evaluated again every round. Zero is its own sign.
///
/// Float types with less precision than `f64` cannot resolve [`BISECT_TOLERANCE`]
/// away from zero. For those the tolerance is raised to one machine epsilon relative
/// to the larger bound, which ends the search once the bracket is a single float
/// wide. `f64` always uses [`BISECT_TOLERANCE`] as is.
///
/// The bracket is not checked: if `func(a)` and `func(b)` do not have opposite signs
/// the result is deterministic but meaningless.
///
/// Returns NaN if the bracket did not shrink enough within
/// [`BISECT_MAX_ITERATIONS`] rounds.
///
/// ```
///     use numerics_core::fitting::bisect;
///     let root = bisect(|x: f64| x * x - 612.0, 1.0, 50.0);
///     assert!((root * root - 612.0).abs() < 1e-9);
/// ```
#[allow(
    clippy::missing_panics_doc,
    reason = "By construction this cannot panic."
)]
pub fn bisect<T>(func: impl Fn(T) -> T, a: T, b: T) -> T
where
    T: num_traits::Float + Debug,
{
    let tolerance = T::from(BISECT_TOLERANCE).unwrap();
    let two = T::from(2.0).unwrap();
    let coarse = T::epsilon() > T::from(f64::EPSILON).unwrap();

    let (mut a, mut b) = (a, b);
    for _ in 0..BISECT_MAX_ITERATIONS {
        let c = (a + b) / two;

        let limit = if coarse {
            tolerance.max(T::epsilon() * a.abs().max(b.abs()))
        } else {
            tolerance
        };

        let f_eval = func(c);
        if f_eval == T::zero() || (b - a) / two < limit {
            return c;
        }

        if sign(f_eval) == sign(func(a)) {
            a = c;
        } else {
            b = c;
        }
    }

    debug!(?a, ?b, "bisection did not converge");
    T::nan()
}

/// Find a root of `func` by bisection of the bracket `[a, b]`.
///
/// Same as [`bisect`], but failure to converge is reported as an error.
///
/// # Errors
///
/// [`ConvergenceError::Iterations`] if no root was found within
/// [`BISECT_MAX_ITERATIONS`] rounds.
pub fn try_bisect<T>(func: impl Fn(T) -> T, a: T, b: T) -> FittingResult<T>
where
    T: num_traits::Float + Debug,
{
    let root = bisect(func, a, b);
    if root.is_nan() {
        Err(ConvergenceError::Iterations)?;
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::{bisect, try_bisect};
    use crate::fitting::ConvergenceError;

    #[test]
    fn test_square_root() {
        let f = |x: f64| x * x - 612.0;
        let root = bisect(f, 1.0, 50.0);
        assert!(f(root).abs() < 1e-9);
        assert!((root - 24.738_633_753_705_96).abs() < 1e-10);
    }

    #[test]
    fn test_cosine_equation() {
        let f = |x: f64| x.cos() - x * x * x;
        let root = bisect(f, 0.1, 1.0);
        assert!(f(root).abs() < 1e-9);
        assert!((root - 0.865_474_033_1).abs() < 1e-9);
    }

    #[test]
    fn test_decreasing_function() {
        let f = |x: f64| 3.0 - x;
        let root = bisect(f, 0.0, 10.0);
        assert!((root - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_exact_midpoint() {
        // f(0) is exactly zero at the first midpoint
        let root = bisect(|x: f64| x, -1.0, 1.0);
        assert_eq!(root, 0.0);
    }

    #[test]
    fn test_invalid_bracket_is_deterministic() {
        // no sign change, the bracket collapses onto one end without an error
        let f = |x: f64| x * x + 1.0;
        let first = bisect(f, -1.0, 2.0);
        let second = bisect(f, -1.0, 2.0);
        assert!(first.is_finite());
        assert_eq!(first, second);

        // reversed bounds are not rejected either
        assert_eq!(bisect(|x: f64| x - 3.0, 10.0, 0.0), 5.0);
    }

    #[test]
    fn test_iteration_limit() {
        // the root is never hit exactly and the bracket cannot get narrower than
        // the spacing of floats around 1e6
        let f = |x: f64| x - 1e6 - 1e-9;
        assert!(bisect(f, 0.0, 1e7).is_nan());
        assert_eq!(try_bisect(f, 0.0, 1e7), Err(ConvergenceError::Iterations));
    }

    #[test]
    fn test_try_bisect() {
        let root = try_bisect(|x: f64| x + 5.0, -10.0, 0.0).unwrap();
        assert!((root + 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_f32() {
        // exact root on a representable midpoint
        let root = bisect(|x: f32| x - 2.5, 0.0_f32, 10.0);
        assert_eq!(root, 2.5);

        let root = bisect(|x: f32| x * x - 2.0, 0.0_f32, 2.0);
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-6);

        let root = try_bisect(|x: f32| x * x - 612.0, 1.0_f32, 50.0).unwrap();
        assert!((root - 24.738_634).abs() < 1e-5);
    }
}
