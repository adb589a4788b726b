//! Fixed-increment SplitMix64 expansion
//!
//! The finalizer of Java 8's `SplittableRandom`, applied to `seed + gamma`.
//! Chaining `expand(expand(x))` yields a stream of well-mixed words from a
//! single scalar.

/// Odd increment added before mixing (2^64 / golden ratio).
pub const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

const MIX_MUL_1: u64 = 0xbf58_476d_1ce4_e5b9;
const MIX_MUL_2: u64 = 0x94d0_49bb_1331_11eb;

/// Expand one scalar into a decorrelated 64-bit word.
///
/// # Example
/// ```
/// use xoshiro_engines::expand;
///
/// assert_eq!(expand(0), 0xe220_a839_7b1d_cdaf);
/// ```
#[inline]
pub const fn expand(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(MIX_MUL_1);
    z = (z ^ (z >> 27)).wrapping_mul(MIX_MUL_2);
    z ^ (z >> 31)
}
