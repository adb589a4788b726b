//! xoshiro128++ generator
//!
//! 128 bits of state, 32-bit output. Same structure as xoshiro256++ at half
//! width, with shift and rotation constants tuned for 32-bit words.

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use super::{Engine, STATE_WORDS};
use crate::bits::{high_half, low_half, rotl32, set_high_half, set_low_half};
use crate::codec::{self, CodecError};
use crate::seed::{expand, SeedSource};

/// Built-in non-zero starting state used by [`Xoshiro128PlusPlus::new`].
pub const DEFAULT_STATE: [u32; STATE_WORDS] = [0x1c58_8f8c, 0x3d23_dce4, 0x8da0_27b0, 0x10c7_70bb];

const OUTPUT_ROTATION: u32 = 7;
const SHIFT: u32 = 9;
const STATE_ROTATION: u32 = 11;

/// Expand a 32-bit value and keep the low 32 bits of the result.
#[inline]
fn expand_half(half: u32) -> u32 {
    low_half(expand(u64::from(half)))
}

/// xoshiro128++ engine producing `u32` values.
///
/// # Example
/// ```
/// use xoshiro_engines::Xoshiro128PlusPlus;
///
/// let mut rng = Xoshiro128PlusPlus::from_u64(42);
/// assert_eq!(rng.next(), 0xd08a_c74b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Xoshiro128PlusPlus {
    state: [u32; STATE_WORDS],
}

impl Default for Xoshiro128PlusPlus {
    fn default() -> Self {
        Self::new()
    }
}

impl Xoshiro128PlusPlus {
    /// Create an engine in the built-in default state.
    pub const fn new() -> Self {
        Self {
            state: DEFAULT_STATE,
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        let mut rng = Self::new();
        rng.seed(seed);
        rng
    }

    pub fn from_u32(seed: u32) -> Self {
        let mut rng = Self::new();
        rng.seed_u32(seed);
        rng
    }

    /// Create an engine with exactly these state words.
    ///
    /// The caller must not pass an all-zero array.
    pub fn from_words(words: [u32; STATE_WORDS]) -> Self {
        let mut rng = Self::new();
        rng.seed_words(words);
        rng
    }

    pub fn from_words_u64(words: [u64; 2]) -> Self {
        let mut rng = Self::new();
        rng.seed_words_u64(words);
        rng
    }

    pub fn from_source<S: SeedSource + ?Sized>(source: &mut S) -> Self {
        let mut rng = Self::new();
        rng.seed_from(source);
        rng
    }

    /// Reseed from a 64-bit scalar.
    ///
    /// Two chained expansions supply four halves; each half is expanded
    /// again and truncated to become one state word.
    pub fn seed(&mut self, seed: u64) {
        let t1 = expand(seed);
        let t2 = expand(t1);
        self.state = [
            expand_half(high_half(t1)),
            expand_half(low_half(t1)),
            expand_half(high_half(t2)),
            expand_half(low_half(t2)),
        ];
    }

    /// Reseed from a 32-bit scalar, widened to `(seed << 32) | seed`.
    pub fn seed_u32(&mut self, seed: u32) {
        let mut wide = 0u64;
        set_high_half(&mut wide, seed);
        set_low_half(&mut wide, seed);
        self.seed(wide);
    }

    /// Reseed by copying raw state words.
    pub fn seed_words(&mut self, words: [u32; STATE_WORDS]) {
        if words.iter().all(|&w| w == 0) {
            warn!("xoshiro128++ seeded with an all-zero state; output will be constant zero");
        }
        self.state = words;
    }

    /// Reseed from two 64-bit words, low half first.
    pub fn seed_words_u64(&mut self, words: [u64; 2]) {
        self.seed_words([
            low_half(words[0]),
            high_half(words[0]),
            low_half(words[1]),
            high_half(words[1]),
        ]);
    }

    /// Reseed from four 32-bit chunks of external seed material, in order.
    pub fn seed_from<S: SeedSource + ?Sized>(&mut self, source: &mut S) {
        source.generate(&mut self.state);
        trace!("xoshiro128++ reseeded from external source: {:08x?}", self.state);
    }

    /// Generate the next `u32` value.
    pub fn next(&mut self) -> u32 {
        let s = &mut self.state;
        let result = rotl32(s[0].wrapping_add(s[3]), OUTPUT_ROTATION).wrapping_add(s[0]);

        let t = s[1] << SHIFT;
        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = rotl32(s[3], STATE_ROTATION);

        result
    }

    pub fn state(&self) -> [u32; STATE_WORDS] {
        self.state
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::decode(bytes)
    }
}

impl Engine for Xoshiro128PlusPlus {
    type Output = u32;
    type Word = u32;

    const MIN: u32 = 0;
    const MAX: u32 = u32::MAX;

    fn next(&mut self) -> u32 {
        Xoshiro128PlusPlus::next(self)
    }

    fn state(&self) -> [u32; STATE_WORDS] {
        self.state
    }

    fn from_state(state: [u32; STATE_WORDS]) -> Self {
        Self { state }
    }
}
