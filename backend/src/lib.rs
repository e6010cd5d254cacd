//! Correlated Noise Toolkit - Rust Core
//!
//! Deterministic pseudorandom generation, correlated sequence synthesis and
//! empirical density estimation for physics and engineering simulation.
//!
//! # Architecture
//!
//! - **core**: Error types, sample moments, fallible buffers
//! - **rng**: Twisted-feedback generators (32- and 64-bit words)
//! - **correlated**: Distance-kernel and Fourier synthesizers
//! - **density**: Histogram PDF estimator
//! - **events**: Structured run log
//! - **runner**: Batch driver tying the pieces together
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded generators, bit-exact streams)
//! 2. Every produced array is owned by the caller
//! 3. Invalid arguments are reported, never undefined
//!
//! # Example
//!
//! ```
//! use correlated_noise_core_rs::{estimate, synthesize, CorrelationMethod};
//!
//! let values = synthesize(CorrelationMethod::Distance, 1.0, 512, 2).unwrap();
//! let table = estimate(&values, 32).unwrap();
//! assert!((table.integral() - 1.0).abs() < 1e-9);
//! ```

// Module declarations
pub mod core;
pub mod correlated;
pub mod density;
pub mod events;
pub mod rng;
pub mod runner;

// Re-exports for convenience
pub use crate::core::{InvalidArgument, Moments, NumericError};
pub use correlated::{synthesize, CorrelatedSample, CorrelationMethod, SynthesisConfig};
pub use density::{estimate, DensityTable};
pub use events::{Event, EventLog};
pub use rng::{RngManager, RngSnapshot, SnapshotError, TwistedEngine, WordWidth};
pub use runner::{JobConfig, JobResult, RunConfig, RunError, Runner, SampleSource};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn correlated_noise_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    m.add_function(wrap_pyfunction!(ffi::types::py_synthesize, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::types::py_estimate, m)?)?;
    Ok(())
}
