//! Deterministic random number generation
//!
//! Two twisted-feedback engines (32-bit and 64-bit words) behind one
//! [`TwistedEngine`] trait, selected at runtime through [`WordWidth`] and
//! wrapped by [`RngManager`].
//! CRITICAL: All randomness in the toolkit MUST go through this module.
//! Same width + same seed → bit-identical stream.

mod manager;
mod mt32;
mod mt64;
pub mod shared;
mod snapshot;

use serde::{Deserialize, Serialize};

use crate::core::{InvalidArgument, NumericError};

pub use manager::RngManager;
pub use mt32::Mt19937_32;
pub use mt64::Mt19937_64;
pub use snapshot::{RngSnapshot, SnapshotError};

/// Seed substituted for zero.
pub const DEFAULT_SEED: u64 = 1999;

/// Largest `f64` strictly below 1.0.
const LARGEST_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Word width of the generator state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordWidth {
    /// 624 × 32-bit words.
    W32,
    /// 312 × 64-bit words.
    #[default]
    W64,
}

impl WordWidth {
    /// Parse a bit count.
    ///
    /// # Example
    /// ```
    /// use correlated_noise_core_rs::rng::WordWidth;
    ///
    /// assert_eq!(WordWidth::from_bits(64).unwrap(), WordWidth::W64);
    /// assert!(WordWidth::from_bits(16).is_err());
    /// ```
    pub fn from_bits(bits: u32) -> Result<Self, NumericError> {
        match bits {
            32 => Ok(WordWidth::W32),
            64 => Ok(WordWidth::W64),
            _ => Err(InvalidArgument::UnsupportedWordWidth { bits }.into()),
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            WordWidth::W32 => 32,
            WordWidth::W64 => 64,
        }
    }

    /// Number of words in the generator state.
    pub fn state_words(self) -> usize {
        match self {
            WordWidth::W32 => Mt19937_32::STATE_WORDS,
            WordWidth::W64 => Mt19937_64::STATE_WORDS,
        }
    }
}

impl std::fmt::Display for WordWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// A twisted-feedback engine producing tempered words.
pub trait TwistedEngine {
    /// Number of words in the state vector.
    const STATE_WORDS: usize;

    fn width(&self) -> WordWidth;

    /// Next tempered word, zero-extended to 64 bits.
    fn next_word(&mut self) -> u64;

    /// Next uniform double in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// The most recently emitted tempered word (the seed before the first
    /// draw).
    fn last_word(&self) -> u64;

    /// Number of full-state regenerations performed so far.
    fn regenerations(&self) -> u64;

    /// Index of the next state word to temper.
    fn cursor(&self) -> usize;

    /// Copy of the raw state vector, zero-extended to 64 bits.
    fn words(&self) -> Vec<u64>;
}

/// Keep `word / MAX` inside `[0, 1)`.
///
/// The division rounds the topmost words to exactly 1.0; those are pulled
/// down to the largest double below one. Every other value passes through
/// unchanged.
#[inline]
fn to_unit_interval(value: f64) -> f64 {
    if value < 1.0 {
        value
    } else {
        LARGEST_BELOW_ONE
    }
}
