//! `rand_core` integration
//!
//! Lets the engines drive anything in the rand ecosystem (distributions,
//! shuffles) and be seeded through `SeedableRng`.

use rand_core::{impls, le, Error, RngCore, SeedableRng};

use super::{Xoshiro128PlusPlus, Xoshiro256PlusPlus};

impl RngCore for Xoshiro256PlusPlus {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // Upper bits are the strongest
        (self.next() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xoshiro256PlusPlus {
    type Seed = [u8; 32];

    /// Little-endian state words. An all-zero seed is replaced by `from_u64(0)`.
    fn from_seed(seed: [u8; 32]) -> Self {
        if seed.iter().all(|&b| b == 0) {
            return Self::from_u64(0);
        }
        let mut words = [0u64; 4];
        le::read_u64_into(&seed, &mut words);
        Self::from_words(words)
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::from_u64(state)
    }
}

impl RngCore for Xoshiro128PlusPlus {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xoshiro128PlusPlus {
    type Seed = [u8; 16];

    fn from_seed(seed: [u8; 16]) -> Self {
        if seed.iter().all(|&b| b == 0) {
            return Self::from_u64(0);
        }
        let mut words = [0u32; 4];
        le::read_u32_into(&seed, &mut words);
        Self::from_words(words)
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::from_u64(state)
    }
}
