//! Error types shared by the generator, synthesizers and estimator.

use thiserror::Error;

/// A violated input constraint.
///
/// Each variant names exactly one precondition so callers can tell them
/// apart without parsing messages.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum InvalidArgument {
    #[error("alpha must be nonzero")]
    ZeroAlpha,

    #[error("alpha must be finite")]
    NonFiniteAlpha,

    #[error("count must be >= 2 (got {count})")]
    CountTooSmall { count: usize },

    #[error("alpha = {alpha} puts a pole in the distance kernel (-alpha must not be an integer in 1..=count)")]
    KernelPole { alpha: f64 },

    #[error("word width must be 32 or 64 bits (got {bits})")]
    UnsupportedWordWidth { bits: u32 },

    #[error("partitions must be >= 1")]
    NoPartitions,

    #[error("samples must not be empty")]
    EmptySample,

    #[error("samples must be finite (non-finite value at index {index})")]
    NonFiniteSample { index: usize },

    #[error("samples must not all be equal")]
    DegenerateSample,

    #[error("sample range overflows f64")]
    RangeOverflow,
}

/// Errors produced by the numerical core.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NumericError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("out of memory: could not allocate {requested} bytes")]
    OutOfMemory { requested: usize },
}

impl NumericError {
    /// The violated constraint, if this is an argument error.
    pub fn invalid_argument(&self) -> Option<InvalidArgument> {
        match self {
            NumericError::InvalidArgument(kind) => Some(*kind),
            NumericError::OutOfMemory { .. } => None,
        }
    }
}
