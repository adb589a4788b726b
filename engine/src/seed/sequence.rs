//! Seed sequence mixing
//!
//! Spreads an arbitrary-length list of 32-bit entropy words over any number
//! of output slots, using the same mixing rounds as C++'s `std::seed_seq`.
//! Every entropy word influences every output slot.

use super::SeedSource;

const INIT_FILL: u32 = 0x8b8b_8b8b;
const FIRST_ROUND_MUL: u32 = 1_664_525;
const SECOND_ROUND_MUL: u32 = 1_566_083_941;

/// Seed material built from a list of 32-bit entropy words.
///
/// # Example
/// ```
/// use xoshiro_engines::{SeedSequence, Xoshiro256PlusPlus};
///
/// let mut seq = SeedSequence::new([0xdead_beef, 0x1234_5678]);
/// let mut rng = Xoshiro256PlusPlus::from_source(&mut seq);
/// let _ = rng.next();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSequence {
    entropy: Vec<u32>,
}

impl SeedSequence {
    pub fn new(entropy: impl IntoIterator<Item = u32>) -> Self {
        Self {
            entropy: entropy.into_iter().collect(),
        }
    }

    /// Number of stored entropy words.
    pub fn len(&self) -> usize {
        self.entropy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entropy.is_empty()
    }

    pub fn entropy(&self) -> &[u32] {
        &self.entropy
    }
}

impl FromIterator<u32> for SeedSequence {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[inline]
fn tangle(x: u32) -> u32 {
    x ^ (x >> 27)
}

impl SeedSource for SeedSequence {
    fn generate(&mut self, dest: &mut [u32]) {
        let n = dest.len();
        if n == 0 {
            return;
        }
        dest.fill(INIT_FILL);

        let t = match n {
            623.. => 11,
            68.. => 7,
            39.. => 5,
            7.. => 3,
            _ => (n - 1) / 2,
        };
        let p = (n - t) / 2;
        let q = p + t;
        let s = self.entropy.len();
        let m = (s + 1).max(n);

        for k in 0..m {
            let r1 = FIRST_ROUND_MUL
                .wrapping_mul(tangle(dest[k % n] ^ dest[(k + p) % n] ^ dest[(k + n - 1) % n]));
            let r2 = if k == 0 {
                r1.wrapping_add(s as u32)
            } else if k <= s {
                r1.wrapping_add((k % n) as u32)
                    .wrapping_add(self.entropy[k - 1])
            } else {
                r1.wrapping_add((k % n) as u32)
            };
            dest[(k + p) % n] = dest[(k + p) % n].wrapping_add(r1);
            dest[(k + q) % n] = dest[(k + q) % n].wrapping_add(r2);
            dest[k % n] = r2;
        }

        for k in m..m + n {
            let r3 = SECOND_ROUND_MUL.wrapping_mul(tangle(
                dest[k % n]
                    .wrapping_add(dest[(k + p) % n])
                    .wrapping_add(dest[(k + n - 1) % n]),
            ));
            let r4 = r3.wrapping_sub((k % n) as u32);
            dest[(k + p) % n] ^= r3;
            dest[(k + q) % n] ^= r4;
            dest[k % n] = r4;
        }
    }
}
