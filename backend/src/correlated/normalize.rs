//! Bounding transform shared by every synthesizer.
//!
//! With `μ`, `σ`, `min`, `max` the raw sample statistics:
//!
//! ```text
//! lo = (μ - min) / σ
//! hi = (max - μ) / σ + lo
//! lo = lo / hi
//! v  = lo + (v - μ) / (σ · hi)
//! ```
//!
//! The raw minimum lands on 0 and the raw maximum on 1, and `v - lo` is the
//! zero-mean standardized sequence divided by `hi`. The arithmetic is kept
//! in exactly this order; the golden vectors depend on it.

use serde::{Deserialize, Serialize};

use crate::core::{InvalidArgument, Moments, NumericError};

/// Parameters of one normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    /// Statistics of the raw (pre-normalization) sequence.
    pub raw: Moments,
    /// `sqrt(raw.variance)`.
    pub deviation: f64,
    /// Value the raw mean is mapped to (`lo` above).
    pub offset: f64,
    /// Standardized range `(max - min) / σ` (`hi` above).
    pub scale: f64,
}

impl Normalization {
    /// Derive the transform from raw statistics.
    pub(crate) fn from_moments(raw: Moments) -> Result<Self, NumericError> {
        let deviation = raw.std_dev();
        // Also rejects NaN deviations from a slightly negative variance.
        if !(deviation > 0.0) || !(raw.max > raw.min) {
            return Err(InvalidArgument::DegenerateSample.into());
        }

        let lo = (raw.mean - raw.min) / deviation;
        let hi = (raw.max - raw.mean) / deviation + lo;

        Ok(Self {
            raw,
            deviation,
            offset: lo / hi,
            scale: hi,
        })
    }

    /// Apply the transform in place.
    pub(crate) fn apply(&self, values: &mut [f64]) {
        for v in values.iter_mut() {
            *v = self.offset + (*v - self.raw.mean) / (self.deviation * self.scale);
        }
    }
}
