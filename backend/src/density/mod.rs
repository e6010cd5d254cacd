//! Empirical probability density estimation.
//!
//! The sample range `[min, max]` is split into `partitions` equal bins.
//! Each sample adds `1 / (width · N)` to the first bin whose right edge is
//! greater than or equal to it, so the densities integrate to one over the
//! range.
//!
//! # Example
//!
//! ```
//! use correlated_noise_core_rs::density::estimate;
//!
//! let table = estimate(&[1.0, 2.0, 3.0, 4.0, 5.0], 5).unwrap();
//! assert_eq!(table.edges.last(), Some(&5.0));
//! assert!((table.densities[0] - 0.25).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{try_alloc, try_zeroed, InvalidArgument, Moments, NumericError};

/// Histogram-based PDF: right bin edges and densities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityTable {
    /// Right edge of each bin, ascending; `edges[i] = min + (i + 1)·width`.
    pub edges: Vec<f64>,
    /// Probability per unit of the sample variable, one per bin.
    pub densities: Vec<f64>,
    /// Smallest sample (left edge of bin 0).
    pub min: f64,
    pub bin_width: f64,
    /// Number of samples that went into the table.
    pub sample_count: usize,
}

impl DensityTable {
    pub fn partitions(&self) -> usize {
        self.edges.len()
    }

    /// `Σ density · width`; 1.0 up to rounding.
    pub fn integral(&self) -> f64 {
        self.densities.iter().map(|d| d * self.bin_width).sum()
    }

    /// `(edge, density)` pairs in bin order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.edges.iter().copied().zip(self.densities.iter().copied())
    }

    /// Index of the bin `value` falls into: the first bin whose right edge
    /// is `>= value`, or the last bin if every edge is smaller.
    pub fn bin_of(&self, value: f64) -> usize {
        locate(&self.edges, value)
    }
}

/// First index whose edge is `>= value`, clamped to the last bin.
///
/// Edges are non-decreasing, so a binary search gives the same answer as a
/// linear scan from the left, ties included.
fn locate(edges: &[f64], value: f64) -> usize {
    let last = edges.len().saturating_sub(1);
    edges.partition_point(|&edge| edge < value).min(last)
}

/// Estimate the PDF of `samples` over `partitions` equal-width bins.
///
/// # Errors
///
/// - `NoPartitions` if `partitions == 0`
/// - `EmptySample` if `samples` is empty
/// - `NonFiniteSample` if any value is NaN or infinite
/// - `RangeOverflow` if `max - min` (or `width · len`) is not representable
/// - `DegenerateSample` if all samples are equal
/// - `OutOfMemory` if the table cannot be allocated
pub fn estimate(samples: &[f64], partitions: usize) -> Result<DensityTable, NumericError> {
    if partitions == 0 {
        return Err(NumericError::from(InvalidArgument::NoPartitions));
    }
    if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
        return Err(InvalidArgument::NonFiniteSample { index }.into());
    }
    let range = Moments::of(samples).ok_or(InvalidArgument::EmptySample)?;

    let span = range.max - range.min;
    if !span.is_finite() {
        return Err(NumericError::from(InvalidArgument::RangeOverflow));
    }
    let bin_width = span / partitions as f64;
    if !(bin_width > 0.0) {
        return Err(NumericError::from(InvalidArgument::DegenerateSample));
    }

    let mut edges = try_alloc(partitions)?;
    edges.extend((0..partitions).map(|i| range.min + (i + 1) as f64 * bin_width));

    let mut densities = try_zeroed(partitions)?;
    let mass = bin_width * samples.len() as f64;
    if !mass.is_finite() {
        return Err(NumericError::from(InvalidArgument::RangeOverflow));
    }
    let increment = 1.0 / mass;
    for &value in samples {
        densities[locate(&edges, value)] += increment;
    }

    Ok(DensityTable {
        edges,
        densities,
        min: range.min,
        bin_width,
        sample_count: samples.len(),
    })
}
