//! xoshiro256++ generator
//!
//! 256 bits of state, 64-bit output. Passes every statistical test suite we
//! know of and is large enough for any single simulation stream.
//!
//! # Determinism
//!
//! Same seed → same sequence of values. Scalar seeds are spread over the four
//! state words by chained SplitMix64 expansion, so seed `0` is as valid as any.

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use super::{Engine, STATE_WORDS};
use crate::bits::{rotl64, set_high_half, set_low_half};
use crate::codec::{self, CodecError};
use crate::seed::{expand, SeedSource};

/// Built-in non-zero starting state used by [`Xoshiro256PlusPlus::new`].
pub const DEFAULT_STATE: [u64; STATE_WORDS] = [
    0x3d23_dce4_1c58_8f8c,
    0x10c7_70bb_8da0_27b0,
    0xc7a4_c5e8_7c63_ba25,
    0xa830_f832_3946_5a2e,
];

const OUTPUT_ROTATION: u32 = 23;
const SHIFT: u32 = 17;
const STATE_ROTATION: u32 = 45;

/// xoshiro256++ engine producing `u64` values.
///
/// # Example
/// ```
/// use xoshiro_engines::Xoshiro256PlusPlus;
///
/// let mut rng = Xoshiro256PlusPlus::from_u64(42);
/// assert_eq!(rng.next(), 0x03f3_9b78_be22_447f);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Xoshiro256PlusPlus {
    state: [u64; STATE_WORDS],
}

impl Default for Xoshiro256PlusPlus {
    fn default() -> Self {
        Self::new()
    }
}

impl Xoshiro256PlusPlus {
    /// Create an engine in the built-in default state.
    pub const fn new() -> Self {
        Self {
            state: DEFAULT_STATE,
        }
    }

    /// Create an engine seeded from a scalar.
    pub fn from_u64(seed: u64) -> Self {
        let mut rng = Self::new();
        rng.seed(seed);
        rng
    }

    /// Create an engine with exactly these state words.
    ///
    /// The caller must not pass an all-zero array.
    pub fn from_words(words: [u64; STATE_WORDS]) -> Self {
        let mut rng = Self::new();
        rng.seed_words(words);
        rng
    }

    /// Create an engine seeded from external seed material.
    pub fn from_source<S: SeedSource + ?Sized>(source: &mut S) -> Self {
        let mut rng = Self::new();
        rng.seed_from(source);
        rng
    }

    /// Reseed from a scalar.
    ///
    /// Never produces an all-zero state, whatever the seed.
    pub fn seed(&mut self, seed: u64) {
        self.state[0] = expand(expand(seed));
        for i in 1..STATE_WORDS {
            self.state[i] = expand(self.state[i - 1]);
        }
    }

    /// Reseed by copying raw state words.
    pub fn seed_words(&mut self, words: [u64; STATE_WORDS]) {
        if words.iter().all(|&w| w == 0) {
            warn!("xoshiro256++ seeded with an all-zero state; output will be constant zero");
        }
        self.state = words;
    }

    /// Reseed from eight 32-bit chunks of external seed material.
    ///
    /// Chunk `2i` fills the low half of word `i`, chunk `2i + 1` the high half.
    pub fn seed_from<S: SeedSource + ?Sized>(&mut self, source: &mut S) {
        let mut slots = [0u32; STATE_WORDS * 2];
        source.generate(&mut slots);
        for (word, pair) in self.state.iter_mut().zip(slots.chunks_exact(2)) {
            set_low_half(word, pair[0]);
            set_high_half(word, pair[1]);
        }
        trace!("xoshiro256++ reseeded from external source: {:016x?}", self.state);
    }

    /// Generate the next `u64` value.
    ///
    /// The value is scrambled from the current state, then the state advances.
    pub fn next(&mut self) -> u64 {
        let s = &mut self.state;
        let result = rotl64(s[0].wrapping_add(s[3]), OUTPUT_ROTATION).wrapping_add(s[0]);

        let t = s[1] << SHIFT;
        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = rotl64(s[3], STATE_ROTATION);

        result
    }

    /// Current state words (for checkpointing/replay).
    pub fn state(&self) -> [u64; STATE_WORDS] {
        self.state
    }

    /// Serialize the state with [`codec::encode`].
    pub fn to_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Restore an engine from bytes produced by [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::decode(bytes)
    }
}

impl Engine for Xoshiro256PlusPlus {
    type Output = u64;
    type Word = u64;

    const MIN: u64 = 0;
    const MAX: u64 = u64::MAX;

    fn next(&mut self) -> u64 {
        Xoshiro256PlusPlus::next(self)
    }

    fn state(&self) -> [u64; STATE_WORDS] {
        self.state
    }

    fn from_state(state: [u64; STATE_WORDS]) -> Self {
        Self { state }
    }
}
