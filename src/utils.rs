#[cfg(feature = "python-bindings")]
use numpy::{
    PyArray2,
    PyArrayMethods, // .readonly()
    PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::IntoPyDict, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::cumulative::options::{Cum2InstOptions, NegativeIncrementPolicy};

/// Borrow or build a 2-D `float64` array from a Python object.
///
/// Accepts, in order of preference:
/// - a 2-D `numpy.ndarray` of `float64` (borrowed without copying, any
///   strides),
/// - anything with a `to_numpy(dtype=...)` method, e.g. a
///   `pandas.DataFrame` whose columns are ensemble members,
/// - a nested sequence of floats with equal-length rows.
///
/// Anything else, including 1-D arrays, raises `TypeError`. Ragged nested
/// sequences raise `ValueError`.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_array2<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray2<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro);
    }

    if raw_data.hasattr("to_numpy")? {
        let kwargs = [("dtype", "float64")].into_py_dict(py)?;
        if let Ok(obj) = raw_data.call_method("to_numpy", (), Some(&kwargs)) {
            if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
                return Ok(frame_ro);
            }
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64",
        )
    })?;
    let arr = PyArray2::from_vec2(py, &rows)?;
    Ok(arr.readonly())
}

/// Map the optional Python `negative` keyword onto [`Cum2InstOptions`].
///
/// `None` selects the default clamp-to-zero policy.
#[cfg(feature = "python-bindings")]
pub fn extract_cum2inst_options(negative: Option<&str>) -> PyResult<Cum2InstOptions> {
    let policy = match negative {
        Some(name) => name.parse::<NegativeIncrementPolicy>()?,
        None => NegativeIncrementPolicy::default(),
    };
    Ok(Cum2InstOptions::new(policy))
}
