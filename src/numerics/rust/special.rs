//! Special functions
use numerics_core::special;
use pyo3::pyfunction;

/// Natural log of the absolute value of the gamma function.
///
/// Parameters
/// ----------
/// x :
///     Input value, infinite at zero and the negative integers.
#[pyfunction]
#[pyo3(name = "ln_gamma")]
pub fn ln_gamma_py(x: f64) -> f64 {
    special::ln_gamma(x)
}

/// Complete beta function ``B(a, b)``.
#[pyfunction]
#[pyo3(name = "beta")]
pub fn beta_py(a: f64, b: f64) -> f64 {
    special::beta(a, b)
}

/// Regularized incomplete beta function ``I_x(a, b)``.
///
/// NaN if ``x`` is outside of ``[0, 1]``.
///
/// Parameters
/// ----------
/// x :
///     Upper limit of the integral, between 0 and 1.
/// a :
///     First shape parameter.
/// b :
///     Second shape parameter.
#[pyfunction]
#[pyo3(name = "beta_incomplete_regular")]
pub fn beta_incomplete_regular_py(x: f64, a: f64, b: f64) -> f64 {
    special::beta_incomplete_regular(x, a, b)
}

/// Incomplete beta function, ``I_x(a, b) B(a, b)``.
#[pyfunction]
#[pyo3(name = "beta_incomplete")]
pub fn beta_incomplete_py(x: f64, a: f64, b: f64) -> f64 {
    special::beta_incomplete(x, a, b)
}

/// Probability of ``k`` successes in ``n`` trials of probability ``x``, without the
/// binomial coefficient.
#[pyfunction]
#[pyo3(name = "binomial")]
pub fn binomial_py(x: f64, k: f64, n: f64) -> f64 {
    special::binomial(x, k, n)
}
