//! 64-bit twisted generalized feedback shift register.
//!
//! This is Nishimura's three-lag 64-bit variant (N = 312, lags 63/151/224),
//! seeded with the 64-bit LCG `x ← 2862933555777941757·x + 1` that builds
//! each state word from the high halves of two consecutive LCG states. It is
//! *not* the single-lag MT19937-64 found in most libraries, so its streams
//! differ from those.

use super::{to_unit_interval, TwistedEngine, WordWidth, DEFAULT_SEED};

/// State length in words.
pub const N: usize = 312;
const M0: usize = 63;
const M1: usize = 151;
const M2: usize = 224;

const MATRIX_A: u64 = 0xB381_5B62_4FC8_2E2F;
const UPPER_MASK: u64 = 0xffff_ffff_8000_0000;
const LOWER_MASK: u64 = 0x7fff_ffff;
const MAG01: [u64; 2] = [0, MATRIX_A];

const TEMPERING_MASK_B: u64 = 0x599C_FCBF_CA66_0000;
const TEMPERING_MASK_C: u64 = 0xFFFA_AFFE_0000_0000;
const TEMPERING_U: u32 = 26;
const TEMPERING_S: u32 = 17;
const TEMPERING_T: u32 = 33;
const TEMPERING_L: u32 = 39;

const SEED_MULTIPLIER: u64 = 2_862_933_555_777_941_757;

#[inline]
fn combine_bits(x: u64, y: u64) -> u64 {
    (x & UPPER_MASK) | (y & LOWER_MASK)
}

#[inline]
fn twist(combined: u64) -> u64 {
    (combined >> 1) ^ MAG01[(combined & 1) as usize]
}

#[inline]
fn temper(mut y: u64) -> u64 {
    y ^= y >> TEMPERING_U;
    y ^= (y << TEMPERING_S) & TEMPERING_MASK_B;
    y ^= (y << TEMPERING_T) & TEMPERING_MASK_C;
    y ^= y >> TEMPERING_L;
    y
}

/// Three-lag twisted generator with 64-bit words.
///
/// # Example
/// ```
/// use correlated_noise_core_rs::rng::{Mt19937_64, TwistedEngine};
///
/// let mut rng = Mt19937_64::new(2);
/// let u = rng.next_f64();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mt19937_64 {
    state: [u64; N],
    cursor: usize,
    last_word: u64,
    regenerations: u64,
}

impl Mt19937_64 {
    /// Seed a fresh generator. A zero seed is replaced by 1999.
    pub fn new(seed: u64) -> Self {
        let mut x = if seed == 0 { DEFAULT_SEED } else { seed };

        let mut state = [0u64; N];
        for word in state.iter_mut() {
            let upper = x & 0xFFFF_FFFF_0000_0000;
            x = SEED_MULTIPLIER.wrapping_mul(x).wrapping_add(1);
            let lower = x >> 32;
            x = SEED_MULTIPLIER.wrapping_mul(x).wrapping_add(1);
            *word = upper | lower;
        }

        Self {
            state,
            cursor: N,
            last_word: x,
            regenerations: 0,
        }
    }

    pub(crate) fn from_parts(
        words: &[u64],
        cursor: usize,
        last_word: u64,
        regenerations: u64,
    ) -> Option<Self> {
        if words.len() != N || cursor > N {
            return None;
        }
        let mut state = [0u64; N];
        state.copy_from_slice(words);
        Some(Self {
            state,
            cursor,
            last_word,
            regenerations,
        })
    }

    /// Regenerate all N words. The three lags wrap at different indices, so
    /// the pass is split into four ranges instead of reducing modulo N.
    fn regenerate(&mut self) {
        let mt = &mut self.state;
        let mut i = 0;

        while i < N - M2 {
            let y = combine_bits(mt[i], mt[i + 1]);
            mt[i] = twist(y) ^ mt[i + M0] ^ mt[i + M1] ^ mt[i + M2];
            i += 1;
        }
        while i < N - M1 {
            let y = combine_bits(mt[i], mt[i + 1]);
            mt[i] = twist(y) ^ mt[i + M0] ^ mt[i + M1] ^ mt[i + M2 - N];
            i += 1;
        }
        while i < N - M0 {
            let y = combine_bits(mt[i], mt[i + 1]);
            mt[i] = twist(y) ^ mt[i + M0] ^ mt[i + M1 - N] ^ mt[i + M2 - N];
            i += 1;
        }
        while i < N - 1 {
            let y = combine_bits(mt[i], mt[i + 1]);
            mt[i] = twist(y) ^ mt[i + M0 - N] ^ mt[i + M1 - N] ^ mt[i + M2 - N];
            i += 1;
        }
        let y = combine_bits(mt[N - 1], mt[0]);
        mt[N - 1] = twist(y) ^ mt[M0 - 1] ^ mt[M1 - 1] ^ mt[M2 - 1];

        self.cursor = 0;
        self.regenerations += 1;
    }

    /// Next tempered 64-bit word.
    pub fn next_u64(&mut self) -> u64 {
        if self.cursor >= N {
            self.regenerate();
        }
        let y = temper(self.state[self.cursor]);
        self.cursor += 1;
        self.last_word = y;
        y
    }
}

impl TwistedEngine for Mt19937_64 {
    const STATE_WORDS: usize = N;

    fn width(&self) -> WordWidth {
        WordWidth::W64
    }

    fn next_word(&mut self) -> u64 {
        self.next_u64()
    }

    fn next_f64(&mut self) -> f64 {
        let y = self.next_u64();
        to_unit_interval(y as f64 / u64::MAX as f64)
    }

    fn last_word(&self) -> u64 {
        self.last_word
    }

    fn regenerations(&self) -> u64 {
        self.regenerations
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn words(&self) -> Vec<u64> {
        self.state.to_vec()
    }
}
