//! Conversions and free functions at the FFI boundary
//!
//! Argument errors become `ValueError`, allocation failures `MemoryError`.

use pyo3::exceptions::{PyMemoryError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::NumericError;
use crate::correlated::{synthesize, CorrelationMethod};
use crate::density::estimate;
use crate::rng::SnapshotError;

pub(crate) fn numeric_err_to_py(err: NumericError) -> PyErr {
    match err {
        NumericError::InvalidArgument(kind) => PyValueError::new_err(kind.to_string()),
        NumericError::OutOfMemory { .. } => PyMemoryError::new_err(err.to_string()),
    }
}

pub(crate) fn snapshot_err_to_py(err: SnapshotError) -> PyErr {
    PyRuntimeError::new_err(format!("Failed to restore generator: {}", err))
}

/// Synthesize a correlated sequence.
///
/// # Arguments
///
/// * `method` - `"distance"` or `"fourier"`
/// * `alpha` - Correlation parameter (nonzero)
/// * `count` - Sequence length (>= 2)
/// * `seed` - Seed of the 64-bit generator
///
/// # Errors
///
/// Raises ValueError for an unknown method or a violated precondition.
#[pyfunction]
#[pyo3(name = "synthesize")]
pub fn py_synthesize(method: &str, alpha: f64, count: usize, seed: u64) -> PyResult<Vec<f64>> {
    let method: CorrelationMethod = method.parse().map_err(PyValueError::new_err)?;
    synthesize(method, alpha, count, seed).map_err(numeric_err_to_py)
}

/// Estimate the empirical PDF of `samples`.
///
/// Returns `(edges, densities)`, both of length `partitions`.
#[pyfunction]
#[pyo3(name = "estimate")]
pub fn py_estimate(samples: Vec<f64>, partitions: usize) -> PyResult<(Vec<f64>, Vec<f64>)> {
    let table = estimate(&samples, partitions).map_err(numeric_err_to_py)?;
    Ok((table.edges, table.densities))
}
