//! Tests for state save/restore
//!
//! A restored engine must continue the exact sequence of the original.

use std::io::Cursor;

use xoshiro_engines::codec::{self, CodecError, SEPARATOR};
use xoshiro_engines::{Engine, Xoshiro128PlusPlus, Xoshiro256PlusPlus};

#[test]
fn test_restore_continues_sequence() {
    let mut rng1 = Xoshiro256PlusPlus::from_u64(12345);

    // Generate some values
    for _ in 0..10 {
        rng1.next();
    }

    let checkpoint = rng1.to_bytes();

    // Generate more values from rng1
    let val1_a = rng1.next();
    let val1_b = rng1.next();

    // Restore from checkpoint
    let mut rng2 = Xoshiro256PlusPlus::from_bytes(&checkpoint).unwrap();

    assert_eq!(val1_a, rng2.next());
    assert_eq!(val1_b, rng2.next());
    assert_eq!(rng1, rng2);
}

#[test]
fn test_128_restore_continues_sequence() {
    let mut original = Xoshiro128PlusPlus::from_u32(77);
    original.discard(123);

    let mut restored = Xoshiro128PlusPlus::from_bytes(&original.to_bytes()).unwrap();
    assert_eq!(restored, original);

    for _ in 0..100 {
        assert_eq!(restored.next(), original.next());
    }
}

#[test]
fn test_stream_round_trip_of_several_engines() {
    let a = Xoshiro256PlusPlus::from_u64(1);
    let b = Xoshiro128PlusPlus::from_u64(2);
    let c = Xoshiro256PlusPlus::from_u64(3);

    let mut buf = Vec::new();
    codec::write_state(&a, &mut buf).unwrap();
    codec::write_state(&b, &mut buf).unwrap();
    codec::write_state(&c, &mut buf).unwrap();
    assert_eq!(buf.len(), 35 + 19 + 35);

    let mut reader = Cursor::new(buf);
    let a2: Xoshiro256PlusPlus = codec::read_state(&mut reader).unwrap();
    let b2: Xoshiro128PlusPlus = codec::read_state(&mut reader).unwrap();
    let c2: Xoshiro256PlusPlus = codec::read_state(&mut reader).unwrap();
    assert_eq!((a2, b2, c2), (a, b, c));

    // Stream is exhausted now
    assert!(matches!(
        codec::read_state::<Xoshiro128PlusPlus, _>(&mut reader),
        Err(CodecError::Truncated { expected: 19 })
    ));
}

#[test]
fn test_separator_positions() {
    let bytes = Xoshiro128PlusPlus::from_u64(4).to_bytes();
    assert_eq!(bytes.len(), 19);
    for i in [4usize, 9, 14] {
        assert_eq!(bytes[i], SEPARATOR, "byte {} should be a separator", i);
    }
    assert_eq!(&bytes[0..4], &Xoshiro128PlusPlus::from_u64(4).state()[0].to_ne_bytes());
}

#[test]
fn test_every_separator_is_checked() {
    let good = Xoshiro256PlusPlus::from_u64(8).to_bytes();
    for offset in [8usize, 17, 26] {
        let mut bad = good.clone();
        bad[offset] = 0;
        match Xoshiro256PlusPlus::from_bytes(&bad) {
            Err(CodecError::InvalidSeparator { offset: o, found }) => {
                assert_eq!(o, offset);
                assert_eq!(found, 0);
            }
            other => panic!("Expected InvalidSeparator at {}, got {:?}", offset, other),
        }
    }
}

#[test]
fn test_trailing_bytes_rejected() {
    let mut bytes = Xoshiro128PlusPlus::from_u64(8).to_bytes();
    bytes.push(SEPARATOR);
    let err = Xoshiro128PlusPlus::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, CodecError::InvalidLength { expected: 19, actual: 20 }));
    assert_eq!(err.to_string(), "Invalid record length: expected 19 bytes, got 20");
}

#[test]
fn test_empty_input_rejected() {
    assert!(matches!(
        Xoshiro256PlusPlus::from_bytes(&[]),
        Err(CodecError::InvalidLength { expected: 35, actual: 0 })
    ));
}

#[test]
fn test_serde_round_trip() {
    let mut rng = Xoshiro256PlusPlus::from_u64(2024);
    rng.discard(9);

    let json = serde_json::to_string(&rng).unwrap();
    let mut restored: Xoshiro256PlusPlus = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, rng);
    assert_eq!(restored.next(), rng.next());

    let small = Xoshiro128PlusPlus::from_words([1, 2, 3, 4]);
    let json = serde_json::to_string(&small).unwrap();
    assert_eq!(json, r#"{"state":[1,2,3,4]}"#);
}
