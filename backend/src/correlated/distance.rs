//! Distance-kernel synthesis.
//!
//! Uniform phases `φ_j ∈ [-1, 1)` are smoothed by a kernel that decays with
//! the squared index distance:
//!
//! ```text
//! V_i = Σ_j φ_j / (|i - j + 1| / α + 1)²      for i = 1..N-1
//! ```
//!
//! Larger `α` widens the kernel and lengthens the correlation range.
//!
//! `V_0` is never summed: it stays 0.0 before normalization and is left out
//! of the minimum/maximum, while the mean and variance are still divided by
//! N. After normalization index 0 may therefore fall outside `[0, 1]`. This
//! matches the published sequences and is kept on purpose.

use super::{validate_parameters, CorrelatedSample, Normalization};
use crate::core::{try_alloc, try_zeroed, InvalidArgument, Moments, NumericError};
use crate::rng::{RngManager, WordWidth};

/// Synthesize `count` correlated values from the 64-bit generator seeded
/// with `seed`.
///
/// # Example
/// ```
/// use correlated_noise_core_rs::correlated::distance;
///
/// let sample = distance::synthesize(1.0, 64, 2).unwrap();
/// assert_eq!(sample.values.len(), 64);
/// ```
pub fn synthesize(alpha: f64, count: usize, seed: u64) -> Result<CorrelatedSample, NumericError> {
    let mut rng = RngManager::new(WordWidth::W64, seed);
    synthesize_with(&mut rng, alpha, count)
}

/// Reject an `α` that zeroes a kernel denominator.
///
/// The denominator `(d/α + 1)²` is evaluated for every index distance
/// `d` in `0..=N`, so it vanishes exactly when `-α` is an integer in
/// `1..=N`.
pub(crate) fn validate_kernel(alpha: f64, count: usize) -> Result<(), NumericError> {
    if alpha < 0.0 && alpha.fract() == 0.0 && -alpha <= count as f64 {
        return Err(InvalidArgument::KernelPole { alpha }.into());
    }
    Ok(())
}

/// Synthesize using uniforms drawn from `rng`.
pub fn synthesize_with(
    rng: &mut RngManager,
    alpha: f64,
    count: usize,
) -> Result<CorrelatedSample, NumericError> {
    validate_parameters(alpha, count)?;
    validate_kernel(alpha, count)?;

    let mut phase = try_alloc(count)?;
    phase.extend((0..count).map(|_| 2.0 * rng.next_f64() - 1.0));

    // Squared kernel denominators indexed by |i - j + 1|, which spans 0..=N.
    let mut denominator = try_alloc(count + 1)?;
    denominator.extend((0..=count).map(|d| {
        let x = d as f64 / alpha + 1.0;
        x * x
    }));

    let mut values = try_zeroed(count)?;
    for (i, slot) in values.iter_mut().enumerate().skip(1) {
        let mut sum = 0.0;
        for (j, &p) in phase.iter().enumerate() {
            sum += p / denominator[(i + 1).abs_diff(j)];
        }
        *slot = sum;
    }

    let raw = Moments::accumulate(values[1..].iter().copied(), count);
    let normalization = Normalization::from_moments(raw)?;
    normalization.apply(&mut values);

    Ok(CorrelatedSample {
        values,
        normalization,
    })
}
