//! Binary save/restore of engine state
//!
//! A record is the engine's four state words, each written as a native-endian
//! block, with a single space byte between consecutive blocks:
//!
//! ```text
//! word0 ' ' word1 ' ' word2 ' ' word3
//! ```
//!
//! Decoding is strict: the record length and every separator are checked, and
//! a mismatch is reported instead of producing a corrupted engine.
//!
//! # Portability
//!
//! Word bytes follow the host byte order. Records are only portable between
//! hosts that share word width and endianness.

use std::io::{self, Read, Write};

use log::debug;
use thiserror::Error;

use crate::rng::{Engine, STATE_WORDS};

/// Byte written between consecutive state words.
pub const SEPARATOR: u8 = b' ';

/// Errors that can occur while decoding a state record
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid record length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid separator at byte {offset}: expected 0x20, found {found:#04x}")]
    InvalidSeparator { offset: usize, found: u8 },

    #[error("Truncated record: stream ended before {expected} bytes were read")]
    Truncated { expected: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A fixed-width unsigned word that can be stored in a state record.
pub trait StateWord: Copy + Default + Eq {
    /// Width of one word in bytes.
    const BYTES: usize;

    /// Append the native-endian bytes of `self`.
    fn put_ne(self, out: &mut Vec<u8>);

    /// Read one word from exactly [`Self::BYTES`] native-endian bytes.
    fn get_ne(bytes: &[u8]) -> Self;
}

impl StateWord for u32 {
    const BYTES: usize = 4;

    fn put_ne(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }

    fn get_ne(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(bytes);
        u32::from_ne_bytes(buf)
    }
}

impl StateWord for u64 {
    const BYTES: usize = 8;

    fn put_ne(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }

    fn get_ne(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        u64::from_ne_bytes(buf)
    }
}

/// Size in bytes of one record for engine `E`.
pub const fn encoded_len<E: Engine>() -> usize {
    STATE_WORDS * E::Word::BYTES + (STATE_WORDS - 1)
}

/// Encode the state of `engine` as one record.
///
/// # Example
/// ```
/// use xoshiro_engines::{codec, Xoshiro128PlusPlus};
///
/// let rng = Xoshiro128PlusPlus::from_u64(7);
/// let bytes = codec::encode(&rng);
/// assert_eq!(bytes.len(), 19);
/// assert_eq!(codec::decode::<Xoshiro128PlusPlus>(&bytes).unwrap(), rng);
/// ```
pub fn encode<E: Engine>(engine: &E) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len::<E>());
    for (i, word) in engine.state().into_iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        word.put_ne(&mut out);
    }
    out
}

/// Decode one record into an engine.
///
/// `bytes` must be exactly one record long.
pub fn decode<E: Engine>(bytes: &[u8]) -> Result<E, CodecError> {
    let expected = encoded_len::<E>();
    if bytes.len() != expected {
        debug!("rejecting state record of {} bytes (expected {})", bytes.len(), expected);
        return Err(CodecError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }

    let width = E::Word::BYTES;
    let mut state = [E::Word::default(); STATE_WORDS];
    for (i, word) in state.iter_mut().enumerate() {
        let start = i * (width + 1);
        if i > 0 {
            let offset = start - 1;
            let found = bytes[offset];
            if found != SEPARATOR {
                debug!("rejecting state record: separator byte {} is {:#04x}", offset, found);
                return Err(CodecError::InvalidSeparator { offset, found });
            }
        }
        *word = E::Word::get_ne(&bytes[start..start + width]);
    }
    Ok(E::from_state(state))
}

/// Write one record for `engine` to `writer`.
pub fn write_state<E: Engine, W: Write + ?Sized>(engine: &E, writer: &mut W) -> Result<(), CodecError> {
    writer.write_all(&encode(engine))?;
    Ok(())
}

/// Read exactly one record from `reader`.
///
/// Bytes after the record are left in the reader, so several engines can be
/// restored from one stream in sequence.
pub fn read_state<E: Engine, R: Read + ?Sized>(reader: &mut R) -> Result<E, CodecError> {
    let expected = encoded_len::<E>();
    let mut buf = vec![0u8; expected];
    match reader.read_exact(&mut buf) {
        Ok(()) => decode(&buf),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(CodecError::Truncated { expected }),
        Err(e) => Err(CodecError::Io(e)),
    }
}
