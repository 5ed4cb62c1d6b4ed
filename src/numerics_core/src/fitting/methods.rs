//! # Stepping methods
//!
//! A stepping method computes the next iterate of a non-linear root search from the
//! current iterate, the function, and its derivative. Methods carry no state between
//! steps, the [`Finder`](super::Finder) owns everything else.
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

/// A single step of an iterative root finding method.
///
/// Implementations must be pure: the returned iterate depends only on `x`, `func` and
/// `der`. Non-finite results are allowed, they are handled by the [`Finder`]
/// (NaN aborts the search, infinities may be recovered by heuristics).
///
/// New methods are added by implementing this trait and selecting them through
/// [`FinderConfig::with_method`] or [`FinderOption::method`].
///
/// ```
///     use numerics_core::fitting::{FinderOption, Method, find};
///
///     /// Damped Newton step.
///     #[derive(Debug)]
///     struct Damped;
///
///     impl Method<f64> for Damped {
///         fn step(&self, x: f64, func: &dyn Fn(f64) -> f64, der: &dyn Fn(f64) -> f64) -> f64 {
///             x - 0.5 * func(x) / der(x)
///         }
///     }
///
///     let root = find(
///         |x: f64| x * x - 2.0,
///         |x| 2.0 * x,
///         1.0,
///         [FinderOption::method(Damped), FinderOption::MaxIterations(100)],
///     );
///     assert!((root - 2_f64.sqrt()).abs() < 1e-9);
/// ```
///
/// [`Finder`]: super::Finder
/// [`FinderConfig::with_method`]: super::FinderConfig::with_method
/// [`FinderOption::method`]: super::FinderOption::method
pub trait Method<T>: Debug + Send + Sync {
    /// Compute the next iterate starting from `x`.
    fn step(&self, x: T, func: &dyn Fn(T) -> T, der: &dyn Fn(T) -> T) -> T;

    /// Name of the method, used in diagnostics.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// The classic Newton-Raphson step.
///
/// `x' = x - f(x) / f'(x)`
///
/// A vanishing derivative produces an infinite step, a NaN in either evaluation
/// produces NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewtonRaphson;

impl<T> Method<T> for NewtonRaphson
where
    T: num_traits::Float,
{
    #[inline(always)]
    fn step(&self, x: T, func: &dyn Fn(T) -> T, der: &dyn Fn(T) -> T) -> T {
        x - func(x) / der(x)
    }

    fn name(&self) -> &'static str {
        "newton_raphson"
    }
}

/// Modified Newton method with cubic convergence.
///
/// The derivative is evaluated at the half Newton step instead of at `x`:
///
/// `x' = x - f(x) / f'(x - f(x) / (2 f'(x)))`
///
/// See "A modified Newton method for rootfinding with cubic convergence",
/// H.H.H. Homeier, Journal of Computational and Applied Mathematics 157 (2003)
/// 227-230, doi:10.1016/S0377-0427(03)00391-1
///
/// Failure modes are those of [`NewtonRaphson`], at either evaluation point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Homeier;

impl<T> Method<T> for Homeier
where
    T: num_traits::Float,
{
    #[inline(always)]
    #[allow(
        clippy::missing_panics_doc,
        reason = "By construction this cannot panic."
    )]
    fn step(&self, x: T, func: &dyn Fn(T) -> T, der: &dyn Fn(T) -> T) -> T {
        let half = T::from(0.5).unwrap();
        let f_eval = func(x);
        x - f_eval / der(x - half * f_eval / der(x))
    }

    fn name(&self) -> &'static str {
        "homeier"
    }
}

#[cfg(test)]
mod tests {
    use super::{Homeier, Method, NewtonRaphson};

    #[test]
    fn test_newton_raphson_step() {
        let f = |x: f64| x * x - 612.0;
        let d = |x: f64| 2.0 * x;
        assert_eq!(NewtonRaphson.step(10.0, &f, &d), 35.6);
    }

    #[test]
    fn test_homeier_step() {
        let f = |x: f64| x * x - 612.0;
        let d = |x: f64| 2.0 * x;

        // midpoint is 10 + 0.5 * 512 / 20 = 22.8
        let expected = 10.0 + 512.0 / (2.0 * 22.8);
        assert!((Homeier.step(10.0, &f, &d) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_derivative() {
        let f = |x: f64| 1.0 - x * x;
        let d = |x: f64| -2.0 * x;

        // f'(0) == -0.0, so the step is pushed to +inf
        assert_eq!(NewtonRaphson.step(0.0, &f, &d), f64::INFINITY);

        // the half step is infinite, f'(inf) is -inf and the full step vanishes
        assert_eq!(Homeier.step(0.0, &f, &d), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let f = |_: f64| f64::NAN;
        let d = |_: f64| 1.0;
        assert!(NewtonRaphson.step(1.0, &f, &d).is_nan());
        assert!(Homeier.step(1.0, &f, &d).is_nan());
    }

    #[test]
    fn test_names() {
        assert_eq!(Method::<f64>::name(&NewtonRaphson), "newton_raphson");
        assert_eq!(Method::<f32>::name(&Homeier), "homeier");
    }

    #[test]
    fn test_f32() {
        let f = |x: f32| x * x - 4.0;
        let d = |x: f32| 2.0 * x;
        assert_eq!(NewtonRaphson.step(1.0_f32, &f, &d), 2.5);
    }
}
