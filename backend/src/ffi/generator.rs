//! PyO3 wrapper for RngManager
//!
//! # Example (from Python)
//!
//! ```python
//! from correlated_noise_core_rs import Generator
//!
//! rng = Generator(64, 2)
//! u = rng.next()
//! block = rng.draw(1000)
//! ```

use pyo3::prelude::*;

use super::types::{numeric_err_to_py, snapshot_err_to_py};
use crate::core::try_zeroed;
use crate::rng::{RngManager, RngSnapshot, WordWidth, DEFAULT_SEED};

/// Python wrapper for the twisted-feedback generator
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: RngManager,
}

#[pymethods]
impl PyGenerator {
    /// Create a generator
    ///
    /// # Errors
    ///
    /// Raises ValueError if `width_bits` is not 32 or 64.
    #[new]
    #[pyo3(signature = (width_bits = 64, seed = DEFAULT_SEED))]
    fn new(width_bits: u32, seed: u64) -> PyResult<Self> {
        let width = WordWidth::from_bits(width_bits).map_err(numeric_err_to_py)?;
        Ok(Self {
            inner: RngManager::new(width, seed),
        })
    }

    /// Next uniform double in [0, 1)
    fn next(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// Next raw tempered word
    fn next_word(&mut self) -> u64 {
        self.inner.next_word()
    }

    /// `count` consecutive uniform doubles
    ///
    /// # Errors
    ///
    /// Raises MemoryError if the block cannot be allocated.
    fn draw(&mut self, count: usize) -> PyResult<Vec<f64>> {
        let mut out = try_zeroed(count).map_err(numeric_err_to_py)?;
        self.inner.fill_f64(&mut out);
        Ok(out)
    }

    fn width_bits(&self) -> u32 {
        self.inner.width().bits()
    }

    fn regenerations(&self) -> u64 {
        self.inner.regenerations()
    }

    /// Serialize the complete state as JSON
    fn snapshot_json(&self) -> PyResult<String> {
        self.inner.snapshot().to_json().map_err(snapshot_err_to_py)
    }

    /// Resume from a JSON snapshot
    #[staticmethod]
    fn from_snapshot_json(json: &str) -> PyResult<Self> {
        let snapshot = RngSnapshot::from_json(json).map_err(snapshot_err_to_py)?;
        let inner = RngManager::restore(&snapshot).map_err(snapshot_err_to_py)?;
        Ok(Self { inner })
    }
}
