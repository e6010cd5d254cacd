//! Fourier synthesis (fractional-Brownian-motion trace).
//!
//! ```text
//! V_i = Σ_{j=0}^{N/2-1} (j+1)^(-α/2) · cos(2π(i+1)(j+1)/N + Φ_j)
//! ```
//!
//! with `Φ_j` uniform in `[0, 2π)`. `α` sets the spectral decay: larger
//! values suppress high frequencies and give smoother, more strongly
//! correlated sequences.

use std::f64::consts::TAU;

use super::{validate_parameters, CorrelatedSample, Normalization};
use crate::core::{try_alloc, try_zeroed, Moments, NumericError};
use crate::rng::{RngManager, WordWidth};

/// Synthesize `count` correlated values from the 64-bit generator seeded
/// with `seed`.
pub fn synthesize(alpha: f64, count: usize, seed: u64) -> Result<CorrelatedSample, NumericError> {
    let mut rng = RngManager::new(WordWidth::W64, seed);
    synthesize_with(&mut rng, alpha, count)
}

/// Synthesize using uniforms drawn from `rng`.
pub fn synthesize_with(
    rng: &mut RngManager,
    alpha: f64,
    count: usize,
) -> Result<CorrelatedSample, NumericError> {
    validate_parameters(alpha, count)?;

    let half = count / 2;
    let mut phase = try_alloc(half)?;
    phase.extend((0..half).map(|_| TAU * rng.next_f64()));

    let half_alpha = 0.5 * alpha;
    let mut amplitude = try_alloc(half)?;
    amplitude.extend((0..half).map(|j| ((j + 1) as f64).powf(half_alpha)));

    let n = count as f64;
    let mut values = try_zeroed(count)?;
    for (i, slot) in values.iter_mut().enumerate() {
        let k = TAU * (i + 1) as f64 / n;
        let mut sum = 0.0;
        for (j, (&phi, &amp)) in phase.iter().zip(&amplitude).enumerate() {
            sum += (k * (j + 1) as f64 + phi).cos() / amp;
        }
        *slot = sum;
    }

    let raw = Moments::accumulate(values.iter().copied(), count);
    let normalization = Normalization::from_moments(raw)?;
    normalization.apply(&mut values);

    Ok(CorrelatedSample {
        values,
        normalization,
    })
}
