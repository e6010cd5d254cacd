//! Single-pass sample moments.
//!
//! Mean and variance are accumulated as plain sums of `v` and `v²` and then
//! divided by the sample count, so the variance is the biased estimator
//! `E[v²] - E[v]²`. The normalization step of the synthesizers depends on
//! this exact accumulation order.

use serde::{Deserialize, Serialize};

/// Mean, biased variance and range of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
}

impl Moments {
    /// Moments of a whole slice, `None` if it is empty.
    ///
    /// # Example
    /// ```
    /// use correlated_noise_core_rs::core::Moments;
    ///
    /// let m = Moments::of(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(m.mean, 2.0);
    /// assert_eq!(m.min, 1.0);
    /// assert_eq!(m.max, 3.0);
    /// ```
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self::accumulate(values.iter().copied(), values.len()))
    }

    /// Accumulate over `values` but divide the sums by `divisor`.
    ///
    /// The distance-kernel synthesizer skips index 0 while still dividing by
    /// the full sequence length, hence the separate divisor.
    pub(crate) fn accumulate<I>(values: I, divisor: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut min = f64::MAX;
        let mut max = -f64::MAX;

        for v in values {
            sum += v;
            sum_sq += v * v;
            min = if min < v { min } else { v };
            max = if max > v { max } else { v };
        }

        let n = divisor as f64;
        let mean = sum / n;
        let mean_sq = sum_sq / n;

        Self {
            mean,
            variance: mean_sq - mean * mean,
            min,
            max,
        }
    }

    /// Standard deviation (square root of the biased variance).
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Width of the sample range.
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}
