//! Bit rotation and width-splitting helpers
//!
//! Everything here is explicit shift/mask arithmetic. No value is ever
//! reinterpreted through memory, so results are identical on every target.

/// Rotate a 64-bit word left by `k` bits.
///
/// `k = 0` and `k = 64` both return `x` unchanged.
#[inline]
pub const fn rotl64(x: u64, k: u32) -> u64 {
    x.rotate_left(k)
}

/// Rotate a 32-bit word left by `k` bits.
#[inline]
pub const fn rotl32(x: u32, k: u32) -> u32 {
    x.rotate_left(k)
}

/// Upper 32 bits of `x`.
#[inline]
pub const fn high_half(x: u64) -> u32 {
    (x >> 32) as u32
}

/// Lower 32 bits of `x`.
#[inline]
pub const fn low_half(x: u64) -> u32 {
    x as u32
}

/// Pack two halves into one 64-bit word.
#[inline]
pub const fn join_halves(high: u32, low: u32) -> u64 {
    ((high as u64) << 32) | low as u64
}

/// Overwrite the upper 32 bits of `word`, leaving the lower half untouched.
///
/// # Example
/// ```
/// use xoshiro_engines::bits::set_high_half;
///
/// let mut word = 0x0000_0000_dead_beef_u64;
/// set_high_half(&mut word, 0xcafe_f00d);
/// assert_eq!(word, 0xcafe_f00d_dead_beef);
/// ```
#[inline]
pub fn set_high_half(word: &mut u64, half: u32) {
    *word = join_halves(half, low_half(*word));
}

/// Overwrite the lower 32 bits of `word`, leaving the upper half untouched.
#[inline]
pub fn set_low_half(word: &mut u64, half: u32) {
    *word = join_halves(high_half(*word), half);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotl64_identity_cases() {
        for &x in &[0u64, 1, 0x8000_0000_0000_0000, 0x0123_4567_89ab_cdef, u64::MAX] {
            assert_eq!(rotl64(x, 0), x);
            assert_eq!(rotl64(x, 64), x);
        }
    }

    #[test]
    fn test_rotl32_identity_cases() {
        for &x in &[0u32, 1, 0x8000_0000, 0x89ab_cdef, u32::MAX] {
            assert_eq!(rotl32(x, 0), x);
            assert_eq!(rotl32(x, 32), x);
        }
    }

    #[test]
    fn test_single_bit_moves_k_positions() {
        for k in 0..64 {
            assert_eq!(rotl64(1, k), 1u64 << k);
        }
        // Top bit wraps around to the bottom
        assert_eq!(rotl64(1 << 63, 1), 1);
        assert_eq!(rotl64(1 << 60, 23), 1 << 19);

        for k in 0..32 {
            assert_eq!(rotl32(1, k), 1u32 << k);
        }
        assert_eq!(rotl32(1 << 31, 1), 1);
        assert_eq!(rotl32(1 << 30, 7), 1 << 5);
    }

    #[test]
    fn test_halves() {
        let x = 0x0123_4567_89ab_cdef_u64;
        assert_eq!(high_half(x), 0x0123_4567);
        assert_eq!(low_half(x), 0x89ab_cdef);
        assert_eq!(join_halves(high_half(x), low_half(x)), x);
    }

    #[test]
    fn test_set_halves_mutate_caller_word() {
        let mut word = 0u64;
        set_high_half(&mut word, 7);
        set_low_half(&mut word, 7);
        assert_eq!(word, 0x0000_0007_0000_0007);

        set_low_half(&mut word, u32::MAX);
        assert_eq!(word, 0x0000_0007_ffff_ffff, "high half must be preserved");
    }
}
