//! Python bindings to `numerics_core`.
//!
//! The functions here are thin wrappers, all numerical work is done in
//! `numerics_core`.
use pyo3::prelude::*;

pub mod fitting;
pub mod special;

/// Python module which exposes the root finders and special functions.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fitting::find_py, m)?)?;
    m.add_function(wrap_pyfunction!(fitting::bisect_py, m)?)?;

    m.add_function(wrap_pyfunction!(special::ln_gamma_py, m)?)?;
    m.add_function(wrap_pyfunction!(special::beta_py, m)?)?;
    m.add_function(wrap_pyfunction!(special::beta_incomplete_regular_py, m)?)?;
    m.add_function(wrap_pyfunction!(special::beta_incomplete_py, m)?)?;
    m.add_function(wrap_pyfunction!(special::binomial_py, m)?)?;

    Ok(())
}
