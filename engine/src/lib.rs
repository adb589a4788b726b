//! xoshiro-engines - deterministic bit generators for simulation code
//!
//! Two small, fast, non-cryptographic engines with a uniform-random-bit-generator
//! contract: fixed output range, deterministic seeding, advance-and-return.
//!
//! # Architecture
//!
//! - **bits**: rotations and 64/32-bit width splitting
//! - **seed**: SplitMix64 seed expansion and external seed sources
//! - **rng**: the `Engine` trait and the two generators
//! - **codec**: binary save/restore of generator state
//!
//! # Critical Invariants
//!
//! 1. Same seed produces the same sequence, on every run
//! 2. Outputs are computed from the state *before* it is advanced
//! 3. A state vector is never all-zero unless the caller seeds it that way
//!
//! # Example
//! ```
//! use xoshiro_engines::{Engine, Xoshiro256PlusPlus};
//!
//! let mut rng = Xoshiro256PlusPlus::from_u64(42);
//! let first = rng.next();
//!
//! let mut replay = Xoshiro256PlusPlus::from_u64(42);
//! assert_eq!(replay.next(), first);
//!
//! replay.discard(10);
//! let restored = Xoshiro256PlusPlus::from_bytes(&replay.to_bytes()).unwrap();
//! assert_eq!(restored, replay);
//! ```

// Module declarations
pub mod bits;
pub mod codec;
pub mod rng;
pub mod seed;

// Re-exports for convenience
pub use codec::{CodecError, StateWord};
pub use rng::{Engine, Xoshiro128PlusPlus, Xoshiro256PlusPlus};
pub use seed::{expand, SeedSequence, SeedSource};
