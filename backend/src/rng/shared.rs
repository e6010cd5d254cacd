//! Process-wide generator entry point.
//!
//! Call shape `generate(width, &mut handle) -> f64` with one
//! hidden state per word width, seeded from the handle on the first call
//! for that width and writing the raw tempered word back into the handle on
//! every call. Two callers using the same width share one stream no matter
//! which handle they pass.
//!
//! Prefer [`RngManager`](super::RngManager) for new code. The state here is
//! guarded by a mutex, so concurrent use is sound but still interleaves a
//! single sequence.

use std::sync::{Mutex, MutexGuard};

use super::{Mt19937_32, Mt19937_64, TwistedEngine, WordWidth};
use crate::core::NumericError;

static SHARED_32: Mutex<Option<Mt19937_32>> = Mutex::new(None);
static SHARED_64: Mutex<Option<Mt19937_64>> = Mutex::new(None);

fn lock<T>(slot: &Mutex<T>) -> MutexGuard<'_, T> {
    // The engines hold plain words; a panic elsewhere cannot leave them torn.
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Draw one uniform double from the shared generator of `width`.
///
/// On the first call for a width, `handle` is read as the seed (zero is
/// replaced by 1999; the 32-bit engine keeps the low 32 bits). On every
/// call it is overwritten with the raw tempered word just produced.
///
/// # Example
/// ```
/// use correlated_noise_core_rs::rng::{shared, WordWidth};
///
/// let mut handle = 2u64;
/// let u = shared::generate(WordWidth::W64, &mut handle);
/// assert!((0.0..1.0).contains(&u));
/// ```
pub fn generate(width: WordWidth, handle: &mut u64) -> f64 {
    match width {
        WordWidth::W32 => {
            let mut slot = lock(&SHARED_32);
            let engine = slot.get_or_insert_with(|| Mt19937_32::new(*handle as u32));
            let value = engine.next_f64();
            *handle = engine.last_word();
            value
        }
        WordWidth::W64 => {
            let mut slot = lock(&SHARED_64);
            let engine = slot.get_or_insert_with(|| Mt19937_64::new(*handle));
            let value = engine.next_f64();
            *handle = engine.last_word();
            value
        }
    }
}

/// [`generate`] with the width given as a bit count.
pub fn generate_bits(bits: u32, handle: &mut u64) -> Result<f64, NumericError> {
    let width = WordWidth::from_bits(bits)?;
    Ok(generate(width, handle))
}

/// Whether the shared generator of `width` has been seeded.
pub fn is_seeded(width: WordWidth) -> bool {
    match width {
        WordWidth::W32 => lock(&SHARED_32).is_some(),
        WordWidth::W64 => lock(&SHARED_64).is_some(),
    }
}

/// Drop the shared state of `width`; the next call seeds it again.
pub fn reset(width: WordWidth) {
    match width {
        WordWidth::W32 => *lock(&SHARED_32) = None,
        WordWidth::W64 => *lock(&SHARED_64) = None,
    }
}
