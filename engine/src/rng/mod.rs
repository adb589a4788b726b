//! Deterministic bit generators
//!
//! Both engines are xoshiro "++" variants: a xor/shift/rotate transition over
//! four state words, scrambled by a rotate-and-add of the first and last word.
//! All randomness in a simulation should go through one of these engines so
//! that runs replay exactly from their seed.

mod rand_compat;
mod xoshiro128;
mod xoshiro256;

pub use xoshiro128::Xoshiro128PlusPlus;
pub use xoshiro256::Xoshiro256PlusPlus;

use crate::codec::StateWord;

/// Number of words in every engine's state vector.
pub const STATE_WORDS: usize = 4;

/// Uniform random bit generator contract shared by the engines.
///
/// Outputs cover the full range `MIN..=MAX` of the output type.
pub trait Engine: Clone {
    /// Type of one generated value.
    type Output: Copy;
    /// Type of one state word.
    type Word: StateWord;

    const MIN: Self::Output;
    const MAX: Self::Output;

    /// Return the output for the current state, then advance the state.
    fn next(&mut self) -> Self::Output;

    /// Advance `n` steps, discarding the outputs.
    ///
    /// Linear in `n`; there is no jump-ahead.
    fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.next();
        }
    }

    /// Copy of the state vector.
    fn state(&self) -> [Self::Word; STATE_WORDS];

    /// Rebuild an engine from a state vector, as-is.
    fn from_state(state: [Self::Word; STATE_WORDS]) -> Self;
}
