//! # Finder configuration
//!
//! [`FinderConfig`] is the full parameter record of a [`Finder`](super::Finder).
//! It may be built directly, through the `with_*` builder methods, or by applying an
//! ordered list of [`FinderOption`] to the defaults.
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

use std::sync::Arc;

use super::methods::{Method, NewtonRaphson};

/// Default minimum number of accepted iterations.
pub const DEFAULT_MIN_ITERATIONS: usize = 5;

/// Default maximum number of accepted iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 25;

/// Default threshold on `|f(x)|`.
pub const DEFAULT_TARGET_PRECISION: f64 = 1e-9;

/// Parameters of an iterative root search.
///
/// No cross-field validation is performed, for example nothing prevents
/// `min_iterations > max_iterations`, in which case `min_iterations` steps are always
/// performed.
#[derive(Debug, Clone)]
pub struct FinderConfig<T> {
    /// Stepping method applied every round.
    pub method: Arc<dyn Method<T>>,

    /// Lower limit for accepted iterates.
    pub x_min: T,

    /// Upper limit for accepted iterates.
    pub x_max: T,

    /// Convergence is not tested before this many accepted steps.
    pub min_iterations: usize,

    /// The search stops after this many accepted steps, converged or not.
    pub max_iterations: usize,

    /// Convergence threshold on `|f(x)|`, not on the step size.
    pub target_precision: T,

    /// Enable recovery from infinite steps, stationary points and cycles.
    pub use_heuristics: bool,
}

impl<T> Default for FinderConfig<T>
where
    T: num_traits::Float + 'static,
{
    #[allow(
        clippy::missing_panics_doc,
        reason = "By construction this cannot panic."
    )]
    fn default() -> Self {
        Self {
            method: Arc::new(NewtonRaphson),
            x_min: -T::max_value(),
            x_max: T::max_value(),
            min_iterations: DEFAULT_MIN_ITERATIONS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            target_precision: T::from(DEFAULT_TARGET_PRECISION).unwrap(),
            use_heuristics: false,
        }
    }
}

impl<T> FinderConfig<T>
where
    T: num_traits::Float + 'static,
{
    /// Build a configuration by applying `options` to the defaults, in order.
    ///
    /// Later options overwrite earlier ones touching the same field.
    ///
    /// ```
    ///     use numerics_core::fitting::{FinderConfig, FinderOption};
    ///     let config = FinderConfig::<f64>::from_options([
    ///         FinderOption::MaxIterations(10),
    ///         FinderOption::Heuristics,
    ///         FinderOption::MaxIterations(50),
    ///     ]);
    ///     assert_eq!(config.max_iterations, 50);
    ///     assert_eq!(config.min_iterations, 5);
    ///     assert!(config.use_heuristics);
    /// ```
    pub fn from_options(options: impl IntoIterator<Item = FinderOption<T>>) -> Self {
        let mut config = Self::default();
        for option in options {
            config.apply(option);
        }
        config
    }

    /// Apply a single option, overwriting the field it touches.
    pub fn apply(&mut self, option: FinderOption<T>) {
        match option {
            FinderOption::MinIterations(n) => self.min_iterations = n,
            FinderOption::MaxIterations(n) => self.max_iterations = n,
            FinderOption::TargetPrecision(precision) => self.target_precision = precision,
            FinderOption::Method(method) => self.method = method,
            FinderOption::Limits(x_min, x_max) => {
                self.x_min = x_min;
                self.x_max = x_max;
            }
            FinderOption::Heuristics => self.use_heuristics = true,
        }
    }

    /// Set the minimum number of accepted iterations.
    #[must_use]
    pub fn with_min_iterations(mut self, n: usize) -> Self {
        self.min_iterations = n;
        self
    }

    /// Set the maximum number of accepted iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Set the convergence threshold on `|f(x)|`.
    #[must_use]
    pub fn with_target_precision(mut self, precision: T) -> Self {
        self.target_precision = precision;
        self
    }

    /// Select the stepping method.
    #[must_use]
    pub fn with_method(mut self, method: impl Method<T> + 'static) -> Self {
        self.method = Arc::new(method);
        self
    }

    /// Restrict accepted iterates to `[x_min, x_max]`.
    #[must_use]
    pub fn with_limits(mut self, x_min: T, x_max: T) -> Self {
        self.x_min = x_min;
        self.x_max = x_max;
        self
    }

    /// Enable the heuristics, see [`Finder`](super::Finder).
    #[must_use]
    pub fn with_heuristics(mut self) -> Self {
        self.use_heuristics = true;
        self
    }
}

/// A single modification of a [`FinderConfig`].
#[derive(Debug, Clone)]
pub enum FinderOption<T> {
    /// Minimum number of accepted iterations.
    MinIterations(usize),

    /// Maximum number of accepted iterations.
    MaxIterations(usize),

    /// Convergence threshold on `|f(x)|`.
    TargetPrecision(T),

    /// Stepping method.
    Method(Arc<dyn Method<T>>),

    /// Lower and upper limits for accepted iterates.
    Limits(T, T),

    /// Enable heuristics.
    Heuristics,
}

impl<T> FinderOption<T> {
    /// Select a stepping method by value.
    pub fn method(method: impl Method<T> + 'static) -> Self {
        Self::Method(Arc::new(method))
    }
}

#[cfg(test)]
mod tests {
    use super::{FinderConfig, FinderOption};
    use crate::fitting::{Homeier, NewtonRaphson};

    #[test]
    fn test_defaults() {
        let config = FinderConfig::<f64>::default();
        assert_eq!(config.method.name(), "newton_raphson");
        assert_eq!(config.x_min, -f64::MAX);
        assert_eq!(config.x_max, f64::MAX);
        assert_eq!(config.min_iterations, 5);
        assert_eq!(config.max_iterations, 25);
        assert_eq!(config.target_precision, 1e-9);
        assert!(!config.use_heuristics);
    }

    #[test]
    fn test_options_in_order() {
        let config = FinderConfig::<f64>::from_options([
            FinderOption::method(Homeier),
            FinderOption::Limits(-1.0, 1.0),
            FinderOption::TargetPrecision(1e-6),
            FinderOption::Limits(-2.0, 3.0),
            FinderOption::method(NewtonRaphson),
            FinderOption::MinIterations(7),
        ]);
        assert_eq!(config.method.name(), "newton_raphson");
        assert_eq!((config.x_min, config.x_max), (-2.0, 3.0));
        assert_eq!(config.target_precision, 1e-6);
        assert_eq!(config.min_iterations, 7);
        assert_eq!(config.max_iterations, 25);
        assert!(!config.use_heuristics);
    }

    #[test]
    fn test_no_cross_validation() {
        let config = FinderConfig::<f32>::from_options([
            FinderOption::MinIterations(30),
            FinderOption::MaxIterations(3),
            FinderOption::Limits(1.0, -1.0),
        ]);
        assert_eq!(config.min_iterations, 30);
        assert_eq!(config.max_iterations, 3);
        assert_eq!((config.x_min, config.x_max), (1.0, -1.0));
    }

    #[test]
    fn test_builder_matches_options() {
        let built = FinderConfig::<f64>::default()
            .with_method(Homeier)
            .with_min_iterations(2)
            .with_max_iterations(40)
            .with_target_precision(1e-12)
            .with_limits(0.0, 10.0)
            .with_heuristics();
        let applied = FinderConfig::<f64>::from_options([
            FinderOption::method(Homeier),
            FinderOption::MinIterations(2),
            FinderOption::MaxIterations(40),
            FinderOption::TargetPrecision(1e-12),
            FinderOption::Limits(0.0, 10.0),
            FinderOption::Heuristics,
        ]);
        assert_eq!(built.method.name(), applied.method.name());
        assert_eq!(built.min_iterations, applied.min_iterations);
        assert_eq!(built.max_iterations, applied.max_iterations);
        assert_eq!(built.target_precision, applied.target_precision);
        assert_eq!((built.x_min, built.x_max), (applied.x_min, applied.x_max));
        assert_eq!(built.use_heuristics, applied.use_heuristics);
    }
}
