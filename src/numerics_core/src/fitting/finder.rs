//! # Iterative root finding
//!
//! [`Finder`] drives a stepping [`Method`](super::Method) until the function value is
//! within the target precision, or the iteration budget is spent.
//!
//! Every round the stepping method proposes a candidate, which is then checked in
//! this exact order:
//!
//! 1. Candidate beyond a limit: step half way from the current value to the limit,
//!    then retry.
//! 2. Candidate is NaN: the search is aborted and NaN returned, heuristics or not.
//! 3. Heuristics, when enabled:
//!    - infinite candidate: nudge the current value away from the stationary
//!      tangent, then retry.
//!    - candidate already produced during this search (a cycle): retry from the
//!      midpoint of the candidate and the current value, or nudge if both are the
//!      same value.
//! 4. The candidate is accepted and counts as one iteration.
//!
//! Retries do not count as iterations. The limits on the number of iterations
//! therefore bound the number of accepted steps only.
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

use rayon::prelude::*;
use tracing::{debug, trace};

use super::{ConvergenceError, FinderConfig, FinderOption, FittingResult};

/// Steps smaller than this are not checked for cycles.
const NEGLIGIBLE_STEP: f64 = 1e-15;

/// Non-linear iterative root finder of a function with a known derivative.
///
/// A finder holds the function, its derivative and the [`FinderConfig`]. It holds no
/// state between solves, a single finder may be used for any number of
/// [`Finder::solve`] calls, including concurrent ones.
pub struct Finder<T, F, D> {
    func: F,
    der: D,
    config: FinderConfig<T>,
}

impl<T, F, D> Debug for Finder<T, F, D>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Finder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T, F, D> Finder<T, F, D>
where
    T: num_traits::Float + num_traits::NumAssignOps + Debug,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    /// Construct a new finder from a function, its derivative, and a configuration.
    pub fn new(func: F, der: D, config: FinderConfig<T>) -> Self {
        Self { func, der, config }
    }

    /// Configuration of this finder.
    pub fn config(&self) -> &FinderConfig<T> {
        &self.config
    }

    /// Search for a root starting at `start`.
    ///
    /// Returns the last accepted iterate once at least `min_iterations` steps were
    /// accepted and either `|f(x)|` is below the target precision or `max_iterations`
    /// steps were accepted. The latter is a best effort value which is not
    /// necessarily a root.
    ///
    /// Returns NaN if the stepping method produced NaN. Without heuristics infinite
    /// steps are accepted, which typically ends in NaN or runs to `max_iterations`.
    ///
    /// There is no limit on the number of retries.
    #[allow(
        clippy::missing_panics_doc,
        reason = "By construction this cannot panic."
    )]
    pub fn solve(&self, start: T) -> T {
        let config = &self.config;
        let half = T::from(0.5).unwrap();
        let tenth = T::from(0.1).unwrap();
        let negligible = T::from(NEGLIGIBLE_STEP).unwrap();

        let mut x = start;
        let mut n_iter: usize = 0;
        let mut retries: usize = 0;

        // Candidates produced during this search, compared by exact equality.
        let mut seen: Vec<T> = Vec::new();

        loop {
            let next = config.method.step(x, &self.func, &self.der);

            if !next.is_infinite() {
                if next > config.x_max {
                    trace!(?x, ?next, "upper limit exceeded");
                    x = half * (x + config.x_max);
                    retries += 1;
                    continue;
                } else if next < config.x_min {
                    trace!(?x, ?next, "lower limit exceeded");
                    x = half * (x + config.x_min);
                    retries += 1;
                    continue;
                }
            }

            if next.is_nan() {
                debug!(
                    ?x,
                    iterations = n_iter,
                    retries,
                    method = config.method.name(),
                    "step is NaN, aborting"
                );
                return T::nan();
            }

            if config.use_heuristics {
                if next.is_infinite() {
                    trace!(?x, ?next, "infinite step");
                    if next.is_sign_positive() {
                        x += tenth * x + tenth;
                    } else {
                        x -= tenth * x - tenth;
                    }
                    retries += 1;
                    continue;
                }

                if (next - x).abs() > negligible {
                    if seen.contains(&next) {
                        trace!(?x, ?next, "cycle detected");
                        if next == x {
                            x += tenth * x + tenth;
                        } else {
                            x = half * (next + x);
                        }
                        retries += 1;
                        continue;
                    }
                    seen.push(next);
                }
            }

            x = next;
            n_iter += 1;

            if n_iter >= config.min_iterations
                && ((self.func)(x).abs() < config.target_precision
                    || n_iter >= config.max_iterations)
            {
                break;
            }
        }

        debug!(
            ?x,
            iterations = n_iter,
            retries,
            method = config.method.name(),
            "root search finished"
        );
        x
    }

    /// Search for a root starting at `start`, see [`Finder::solve`].
    ///
    /// # Errors
    ///
    /// [`ConvergenceError`] may be returned in the following cases:
    ///     - The search ended on a non-finite value.
    ///     - The iteration limit was reached before the target precision.
    pub fn try_solve(&self, start: T) -> FittingResult<T> {
        let root = self.solve(start);
        if !root.is_finite() {
            Err(ConvergenceError::NonFinite)?;
        }

        let residual = (self.func)(root).abs();
        if residual.is_nan() || residual >= self.config.target_precision {
            Err(ConvergenceError::Iterations)?;
        }
        Ok(root)
    }
}

impl<T, F, D> Finder<T, F, D>
where
    T: num_traits::Float + num_traits::NumAssignOps + Debug + Send + Sync,
    F: Fn(T) -> T + Sync,
    D: Fn(T) -> T + Sync,
{
    /// Solve from many starting values in parallel.
    ///
    /// Each search is independent, the result is identical to calling
    /// [`Finder::solve`] on every value in order.
    pub fn solve_many(&self, starts: &[T]) -> Vec<T> {
        starts.par_iter().map(|&start| self.solve(start)).collect()
    }
}

/// Find a root of `func` starting at `start` with the given options.
///
/// `options` are applied in order on top of the [`FinderConfig`] defaults, see
/// [`FinderConfig::from_options`] and [`Finder::solve`].
///
/// ```
///     use numerics_core::fitting::{FinderOption, Homeier, find};
///     let f = |x: f64| x * x - 612.0;
///     let d = |x| 2.0 * x;
///
///     let root = find(f, d, 10.0, []);
///     assert!(f(root).abs() < 1e-9);
///
///     let root = find(
///         f,
///         d,
///         10.0,
///         [FinderOption::method(Homeier), FinderOption::Heuristics],
///     );
///     assert!(f(root).abs() < 1e-9);
/// ```
pub fn find<T, F, D>(
    func: F,
    der: D,
    start: T,
    options: impl IntoIterator<Item = FinderOption<T>>,
) -> T
where
    T: num_traits::Float + num_traits::NumAssignOps + Debug + 'static,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    Finder::new(func, der, FinderConfig::from_options(options)).solve(start)
}

/// Find a root of `func` starting at `start` with the given options.
///
/// Same as [`find`], with failures reported as errors.
///
/// # Errors
///
/// See [`Finder::try_solve`].
pub fn try_find<T, F, D>(
    func: F,
    der: D,
    start: T,
    options: impl IntoIterator<Item = FinderOption<T>>,
) -> FittingResult<T>
where
    T: num_traits::Float + num_traits::NumAssignOps + Debug + 'static,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    Finder::new(func, der, FinderConfig::from_options(options)).try_solve(start)
}
