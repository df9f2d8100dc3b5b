//! Python bindings for the intarray integer array type.
//!
//! This crate exposes [`intarray_core::IntArray`] as a Python extension
//! module, allowing you to:
//! - Construct fixed-size integer arrays from Python
//! - Read and write elements with bounds checking, via methods or subscripts
//! - Query the library version string

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use intarray_core::{IntArray, IntArrayError};

/// Map a core array error onto the matching Python exception type.
fn intarray_err(err: IntArrayError) -> PyErr {
    match err {
        IntArrayError::InvalidSize { .. } => PyValueError::new_err(err.to_string()),
        IntArrayError::IndexOutOfBounds { .. } => PyIndexError::new_err(err.to_string()),
    }
}

/// A fixed-size integer array accessible from Python.
///
/// Every element access is validated against `[0, size)`; out-of-range
/// indices raise `IndexError` in either direction, with no Python-style
/// negative-index wraparound.
#[pyclass(name = "IntArray")]
#[derive(Debug)]
pub struct PyIntArray {
    inner: IntArray,
}

#[pymethods]
impl PyIntArray {
    /// Create a new array with `size` zero-filled elements.
    ///
    /// # Arguments
    /// * `size` - The capacity, fixed for the lifetime of the array
    ///
    /// # Raises
    /// * `ValueError` - If `size` is not a positive integer
    #[new]
    pub fn new(size: i64) -> PyResult<Self> {
        let inner = IntArray::new(size).map_err(intarray_err)?;
        Ok(PyIntArray { inner })
    }

    /// Get the size of the array.
    pub fn get_size(&self) -> i64 {
        self.inner.size()
    }

    /// Get an array element.
    ///
    /// # Arguments
    /// * `index` - The slot to read
    ///
    /// # Raises
    /// * `IndexError` - If `index` falls outside `[0, size)`
    pub fn get(&self, index: i64) -> PyResult<i64> {
        self.inner.get(index).map_err(intarray_err)
    }

    /// Set an array element, overwriting the prior value.
    ///
    /// # Arguments
    /// * `index` - The slot to write
    /// * `value` - The integer to store
    ///
    /// # Raises
    /// * `IndexError` - If `index` falls outside `[0, size)`
    pub fn set(&mut self, index: i64, value: i64) -> PyResult<()> {
        self.inner.set(index, value).map_err(intarray_err)
    }

    /// Subscript read (`arr[i]`), forwarding to `get`.
    fn __getitem__(&self, index: i64) -> PyResult<i64> {
        self.get(index)
    }

    /// Subscript write (`arr[i] = v`), forwarding to `set`.
    fn __setitem__(&mut self, index: i64, value: i64) -> PyResult<()> {
        self.set(index, value)
    }

    /// Length protocol support (`len(arr)`).
    fn __len__(&self) -> usize {
        self.inner.size() as usize
    }

    /// String representation.
    fn __repr__(&self) -> String {
        format!("{}", self.inner)
    }
}

/// Get the version string.
///
/// A process-wide constant matching the distributed package's version
/// metadata.
#[pyfunction]
fn get_version() -> &'static str {
    intarray_core::version()
}

/// Python module definition.
#[pymodule]
pub fn intarray(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyIntArray>()?;
    m.add_function(wrap_pyfunction!(get_version, m)?)?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__doc__", "Defines the integer array class and some module methods")?;

    Ok(())
}
