//! 32-bit twisted generalized feedback shift register (MT19937).
//!
//! 624 words of state, one lag (M = 397). Seeding uses the multiplicative
//! congruential step `x ← 69069·x mod 2³²` from the 1998 paper, not the
//! later Knuth-style initializer, so streams differ from `init_genrand`.

use super::{to_unit_interval, TwistedEngine, WordWidth, DEFAULT_SEED};

/// State length in words.
pub const N: usize = 624;
/// Feedback lag.
const M: usize = 397;

const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const MAG01: [u32; 2] = [0, MATRIX_A];

const TEMPERING_MASK_B: u32 = 0x9d2c_5680;
const TEMPERING_MASK_C: u32 = 0xefc6_0000;
const TEMPERING_U: u32 = 11;
const TEMPERING_S: u32 = 7;
const TEMPERING_T: u32 = 15;
const TEMPERING_L: u32 = 18;

const SEED_MULTIPLIER: u32 = 69069;

/// Top bit of `x`, bottom 31 bits of `y`.
#[inline]
fn combine_bits(x: u32, y: u32) -> u32 {
    (x & UPPER_MASK) | (y & LOWER_MASK)
}

#[inline]
fn matrix_multiply(original: u32, combined: u32) -> u32 {
    original ^ (combined >> 1) ^ MAG01[(combined & 1) as usize]
}

#[inline]
fn temper(mut y: u32) -> u32 {
    y ^= y >> TEMPERING_U;
    y ^= (y << TEMPERING_S) & TEMPERING_MASK_B;
    y ^= (y << TEMPERING_T) & TEMPERING_MASK_C;
    y ^= y >> TEMPERING_L;
    y
}

/// MT19937 with 32-bit words.
///
/// # Example
/// ```
/// use correlated_noise_core_rs::rng::{Mt19937_32, TwistedEngine};
///
/// let mut a = Mt19937_32::new(1999);
/// let mut b = Mt19937_32::new(0); // zero is coerced to 1999
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mt19937_32 {
    state: [u32; N],
    /// Index of the next word to emit; `N` means a regeneration is due.
    cursor: usize,
    last_word: u32,
    regenerations: u64,
}

impl Mt19937_32 {
    /// Seed a fresh generator. A zero seed is replaced by 1999.
    pub fn new(seed: u32) -> Self {
        let seed = if seed == 0 { DEFAULT_SEED as u32 } else { seed };

        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            state[i] = SEED_MULTIPLIER.wrapping_mul(state[i - 1]);
        }

        Self {
            state,
            cursor: N,
            last_word: seed,
            regenerations: 0,
        }
    }

    /// Rebuild a generator from checkpointed parts.
    ///
    /// Returns `None` if the word count or cursor is out of range, or a word
    /// does not fit in 32 bits.
    pub(crate) fn from_parts(
        words: &[u64],
        cursor: usize,
        last_word: u64,
        regenerations: u64,
    ) -> Option<Self> {
        if words.len() != N || cursor > N {
            return None;
        }
        let mut state = [0u32; N];
        for (slot, &word) in state.iter_mut().zip(words) {
            *slot = u32::try_from(word).ok()?;
        }
        Some(Self {
            state,
            cursor,
            last_word: u32::try_from(last_word).ok()?,
            regenerations,
        })
    }

    /// Regenerate all N words in one pass.
    fn regenerate(&mut self) {
        let mt = &mut self.state;

        for i in 0..N - M {
            let y = combine_bits(mt[i], mt[i + 1]);
            mt[i] = matrix_multiply(mt[i + M], y);
        }
        for i in N - M..N - 1 {
            let y = combine_bits(mt[i], mt[i + 1]);
            mt[i] = matrix_multiply(mt[i + M - N], y);
        }
        let y = combine_bits(mt[N - 1], mt[0]);
        mt[N - 1] = matrix_multiply(mt[M - 1], y);

        self.cursor = 0;
        self.regenerations += 1;
    }

    /// Next tempered 32-bit word.
    pub fn next_u32(&mut self) -> u32 {
        if self.cursor >= N {
            self.regenerate();
        }
        let y = temper(self.state[self.cursor]);
        self.cursor += 1;
        self.last_word = y;
        y
    }
}

impl TwistedEngine for Mt19937_32 {
    const STATE_WORDS: usize = N;

    fn width(&self) -> WordWidth {
        WordWidth::W32
    }

    fn next_word(&mut self) -> u64 {
        u64::from(self.next_u32())
    }

    fn next_f64(&mut self) -> f64 {
        let y = self.next_u32();
        to_unit_interval(y as f64 / u32::MAX as f64)
    }

    fn last_word(&self) -> u64 {
        u64::from(self.last_word)
    }

    fn regenerations(&self) -> u64 {
        self.regenerations
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn words(&self) -> Vec<u64> {
        self.state.iter().map(|&w| u64::from(w)).collect()
    }
}
