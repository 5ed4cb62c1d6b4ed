//! # Fitting
//! Root finding of scalar functions.
//!
//! Two families of solvers are provided:
//!
//! - [`bisect`]: linear bracketing, no derivative required.
//! - [`find`] / [`Finder`]: iterative non-linear root finding driven by a pluggable
//!   stepping [`Method`], with optional bounds and heuristics which recover from
//!   stationary tangents, cycles and divergence to infinity.
//!
//! Both follow IEEE sentinel semantics: a failed solve evaluates to NaN. The `try_*`
//! variants turn those sentinels into a [`ConvergenceError`].
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

mod bisection;
mod config;
mod finder;
mod methods;

pub use self::bisection::{BISECT_MAX_ITERATIONS, BISECT_TOLERANCE, bisect, try_bisect};
pub use self::config::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_ITERATIONS, DEFAULT_TARGET_PRECISION, FinderConfig,
    FinderOption,
};
pub use self::finder::{Finder, find, try_find};
pub use self::methods::{Homeier, Method, NewtonRaphson};

/// Error type for fitting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvergenceError {
    /// Maximum number of iterations reached without convergence.
    #[error("Maximum number of iterations reached without convergence")]
    Iterations,

    /// Non-finite value encountered during evaluation.
    #[error("Non-finite value encountered during evaluation")]
    NonFinite,
}

/// Result type for fitting operations.
pub type FittingResult<T> = Result<T, ConvergenceError>;

#[cfg(feature = "pyo3")]
impl From<ConvergenceError> for pyo3::PyErr {
    fn from(err: ConvergenceError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
