//! rust_streamflow — cumulative-to-instantaneous transforms for ensemble
//! series, with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the transforms to Python via the `_rust_streamflow` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing class, function and submodule used by the
//! `rust_streamflow` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`cumulative`) as the public crate
//!   surface.
//! - Define a `#[pyclass]` wrapper, a `#[pyfunction]` shortcut, and the
//!   `#[pymodule]` initializer for the `_rust_streamflow` Python extension.
//! - Register the `transforms` submodule in `sys.modules` as
//!   `rust_streamflow.transforms` so dotted imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in [`cumulative`]; this file performs only FFI
//!   glue, input conversion, and error mapping.
//! - Python inputs are 2-D `float64` arrays whose rows are time steps and
//!   whose columns are ensemble members, matching the Rust convention.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are [`cumulative::CumError`] values,
//!   converted to `ValueError` at the PyO3 boundary. Failed input extraction
//!   raises `TypeError`.
//! - Logging goes through the `log` facade; installing a logger is left to
//!   the host application.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`cumulative`] directly and can ignore
//!   the items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_rust_streamflow` and re-exports
//!   `transforms.cum2inst` / `transforms.Cum2Inst`.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in `cumulative` and by the
//!   integration tests under `tests/`.
//! - The PyO3 layer is exercised from Python.

pub mod cumulative;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2, ToPyArray};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    cumulative::cum2inst::{Cum2InstOutcome, cum2inst_with_options},
    utils::{extract_cum2inst_options, extract_f64_array2},
};

/// Cum2Inst — Python-facing result of a cumulative-to-instantaneous transform.
///
/// Purpose
/// -------
/// Run [`cum2inst_with_options`] from Python and keep the full outcome so the
/// instantaneous array and its negative-step diagnostics can be inspected.
///
/// Parameters
/// ----------
/// Constructed from Python via `Cum2Inst(data, /, negative=None)`:
/// - `data`: `&PyAny`
///   2-D `float64` array-like of shape `(T, E)`, `T ≥ 1`, `E ≥ 1`.
/// - `negative`: `Option<&str>`
///   One of `"clamp"` (default), `"keep"`, `"reject"`.
///
/// Notes
/// -----
/// - Native Rust code should call [`cum2inst_with_options`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_streamflow.transforms")]
pub struct Cum2Inst {
    inner: Cum2InstOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Cum2Inst {
    #[new]
    #[pyo3(text_signature = "(data, /, negative=None)", signature = (raw_data, negative = None))]
    pub fn new<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, negative: Option<&str>,
    ) -> PyResult<Cum2Inst> {
        let opts = extract_cum2inst_options(negative)?;
        let arr = extract_f64_array2(py, raw_data)?;
        let outcome = cum2inst_with_options(&arr.as_array(), &opts)?;
        Ok(Cum2Inst { inner: outcome })
    }

    /// Instantaneous values, same shape as the input.
    #[getter]
    pub fn instantaneous<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.instantaneous().to_pyarray(py)
    }

    /// Number of strictly negative first differences seen.
    #[getter]
    pub fn negative_steps(&self) -> usize {
        self.inner.negative_steps()
    }

    /// Largest negative difference magnitude, 0.0 when there were none.
    #[getter]
    pub fn largest_drop(&self) -> f64 {
        self.inner.largest_drop()
    }
}

/// Convert a cumulative `(T, E)` array into instantaneous values.
///
/// Python signature: `cum2inst(data, /, negative=None) -> numpy.ndarray`.
/// Returns only the array; use `Cum2Inst` for the diagnostics.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "cum2inst",
    text_signature = "(data, /, negative=None)",
    signature = (raw_data, negative = None)
)]
pub fn py_cum2inst<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, negative: Option<&str>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let opts = extract_cum2inst_options(negative)?;
    let arr = extract_f64_array2(py, raw_data)?;
    let outcome = cum2inst_with_options(&arr.as_array(), &opts)?;
    Ok(outcome.into_instantaneous().into_pyarray(py))
}

/// _rust_streamflow — PyO3 module initializer for the Python extension.
///
/// Creates the `transforms` submodule, attaches it to `_rust_streamflow`,
/// and registers it in `sys.modules` under `rust_streamflow.transforms`.
///
/// Errors
/// ------
/// - `PyErr` if creating the submodule or touching `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_streamflow<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let transforms_mod = PyModule::new(_py, "transforms")?;
    transforms(_py, m, &transforms_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_streamflow.transforms", transforms_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn transforms<'py>(
    _py: Python, rust_streamflow: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<Cum2Inst>()?;
    m.add_function(wrap_pyfunction!(py_cum2inst, m)?)?;
    rust_streamflow.add_submodule(m)?;
    Ok(())
}
