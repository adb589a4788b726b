//! Seed material for the engines
//!
//! Scalar seeds are spread over a full state vector with [`expand`]. Larger
//! amounts of entropy come in through [`SeedSource`], which hands out 32-bit
//! chunks on demand.

mod sequence;
mod splitmix;

pub use sequence::SeedSequence;
pub use splitmix::{expand, GOLDEN_GAMMA};

use rand_core::RngCore;

/// A provider of seed material in 32-bit chunks.
///
/// Engines ask for exactly as many chunks as their state has 32-bit slots
/// (eight for the 256-bit engine, four for the 128-bit one).
pub trait SeedSource {
    /// Fill every slot of `dest`.
    fn generate(&mut self, dest: &mut [u32]);
}

/// Any `rand_core` generator can seed an engine, one `next_u32` per slot.
impl<R: RngCore + ?Sized> SeedSource for R {
    fn generate(&mut self, dest: &mut [u32]) {
        for slot in dest.iter_mut() {
            *slot = self.next_u32();
        }
    }
}
