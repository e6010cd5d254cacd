//! Shared foundations: the crate error type, sample moments, and fallible
//! allocation of owned output buffers.

pub mod error;
pub mod moments;

pub use error::{InvalidArgument, NumericError};
pub use moments::Moments;

/// Allocate an empty `Vec<f64>` able to hold `len` values without
/// reallocating.
///
/// Allocation failure is reported as [`NumericError::OutOfMemory`] instead
/// of aborting the process.
pub(crate) fn try_alloc(len: usize) -> Result<Vec<f64>, NumericError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| NumericError::OutOfMemory {
            requested: len.saturating_mul(std::mem::size_of::<f64>()),
        })?;
    Ok(buffer)
}

/// Allocate a zero-filled `Vec<f64>` of length `len`.
pub(crate) fn try_zeroed(len: usize) -> Result<Vec<f64>, NumericError> {
    let mut buffer = try_alloc(len)?;
    buffer.resize(len, 0.0);
    Ok(buffer)
}
