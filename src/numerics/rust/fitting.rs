//! Root finding
use std::cell::RefCell;

use numerics_core::fitting::{Finder, FinderConfig, Homeier, NewtonRaphson, bisect, try_bisect};
use pyo3::{exceptions::PyValueError, prelude::*};

/// A python callable used as a scalar function.
///
/// If the callable raises, or returns something which is not a float, the error is
/// kept and NaN is returned instead, which stops the solvers. All later evaluations
/// are NaN without calling back into python.
struct PyScalarFn<'py> {
    func: Bound<'py, PyAny>,
    error: RefCell<Option<PyErr>>,
}

impl<'py> PyScalarFn<'py> {
    fn new(func: Bound<'py, PyAny>) -> Self {
        Self {
            func,
            error: RefCell::new(None),
        }
    }

    fn call(&self, x: f64) -> f64 {
        if self.error.borrow().is_some() {
            return f64::NAN;
        }
        match self.func.call1((x,)).and_then(|val| val.extract::<f64>()) {
            Ok(val) => val,
            Err(err) => {
                *self.error.borrow_mut() = Some(err);
                f64::NAN
            }
        }
    }

    /// Raise the first error encountered, if any.
    fn finish(self) -> PyResult<()> {
        match self.error.into_inner() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Find a root of a function using an iterative non-linear method.
///
/// The search stops once at least ``min_iterations`` steps were taken and either
/// ``abs(func(x)) < target_precision`` or ``max_iterations`` steps were taken. In the
/// latter case the last value is returned even if it is not a root.
///
/// NaN is returned if the method produced an undefined step, such as from a
/// derivative which is NaN. With ``strict=True`` a ``ValueError`` is raised instead
/// whenever the result is not finite or does not meet ``target_precision``.
///
/// Exceptions raised by ``func`` or ``der`` stop the search and are raised again.
///
/// >>> round(numerics.find(lambda x: x**2 - 612, lambda x: 2 * x, 10.0), 6)
/// 24.738634
///
/// Parameters
/// ----------
/// func :
///     Function for which the root is desired.
/// der :
///     Derivative of the function.
/// start :
///     Initial guess for the root.
/// method :
///     Stepping method, either ``"newton_raphson"`` or ``"homeier"``.
/// min_iterations :
///     Minimum number of steps before convergence is tested.
/// max_iterations :
///     Maximum number of steps.
/// target_precision :
///     Convergence threshold on the absolute function value.
/// bounds :
///     Optional ``(lower, upper)`` limits of the search.
/// heuristics :
///     Recover from infinite steps, stationary points and cycles.
/// strict :
///     Raise a ``ValueError`` instead of returning a value which is not a root.
#[pyfunction]
#[pyo3(
    name = "find",
    signature = (
        func,
        der,
        start,
        method = "newton_raphson",
        min_iterations = 5,
        max_iterations = 25,
        target_precision = 1e-9,
        bounds = None,
        heuristics = false,
        strict = false,
    )
)]
pub fn find_py(
    func: Bound<'_, PyAny>,
    der: Bound<'_, PyAny>,
    start: f64,
    method: &str,
    min_iterations: usize,
    max_iterations: usize,
    target_precision: f64,
    bounds: Option<(f64, f64)>,
    heuristics: bool,
    strict: bool,
) -> PyResult<f64> {
    let config = FinderConfig::default()
        .with_min_iterations(min_iterations)
        .with_max_iterations(max_iterations)
        .with_target_precision(target_precision);

    let mut config = match method {
        "newton_raphson" => config.with_method(NewtonRaphson),
        "homeier" => config.with_method(Homeier),
        _ => {
            return Err(PyValueError::new_err(format!(
                "Unknown root finding method '{method}', expected 'newton_raphson' or 'homeier'."
            )));
        }
    };
    if let Some((x_min, x_max)) = bounds {
        config = config.with_limits(x_min, x_max);
    }
    config.use_heuristics = heuristics;

    let func = PyScalarFn::new(func);
    let der = PyScalarFn::new(der);
    let root = {
        let finder = Finder::new(|x| func.call(x), |x| der.call(x), config);
        if strict {
            finder.try_solve(start)
        } else {
            Ok(finder.solve(start))
        }
    };
    func.finish()?;
    der.finish()?;
    root.map_err(PyErr::from)
}

/// Find a root of a function by bisection of the interval ``[a, b]``.
///
/// The function values at ``a`` and ``b`` are expected to have opposite signs, this
/// is not checked. NaN is returned if the bisection did not converge within 100
/// halvings, or a ``ValueError`` is raised with ``strict=True``.
///
/// >>> round(numerics.bisect(lambda x: x**2 - 612, 1.0, 50.0), 6)
/// 24.738634
///
/// Parameters
/// ----------
/// func :
///     Function for which the root is desired.
/// a :
///     Lower end of the interval.
/// b :
///     Upper end of the interval.
/// strict :
///     Raise a ``ValueError`` if the bisection did not converge.
#[pyfunction]
#[pyo3(name = "bisect", signature = (func, a, b, strict = false))]
pub fn bisect_py(func: Bound<'_, PyAny>, a: f64, b: f64, strict: bool) -> PyResult<f64> {
    let func = PyScalarFn::new(func);
    let root = if strict {
        try_bisect(|x| func.call(x), a, b)
    } else {
        Ok(bisect(|x| func.call(x), a, b))
    };
    func.finish()?;
    root.map_err(PyErr::from)
}
