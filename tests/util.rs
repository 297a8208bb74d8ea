use std::collections::HashSet;

use cryptonite::BytesError;
use cryptonite::rng::SystemRandom;
use cryptonite::util::{
    DEFAULT_ALPHABET, from_hex, pad_zeros, random_bytes, random_string, timing_safe_eq, to_hex, xor,
    xor_in_place,
};

#[test]
fn test_timing_safe_eq() {
    assert!(timing_safe_eq(b"abc", b"abc"));
    assert!(!timing_safe_eq(b"abc", b"abd"));
    assert!(!timing_safe_eq(b"abc", b"abcd"));
    assert!(timing_safe_eq(b"", b""));
}

#[test]
fn test_xor() {
    assert_eq!(xor(&[0xf0, 0x0f], &[0xff, 0xff]), Ok(vec![0x0f, 0xf0]));
    assert_eq!(
        xor(&[1, 2, 3], &[1]),
        Err(BytesError::LengthMismatch { left: 3, right: 1 })
    );
}

#[test]
fn test_xor_in_place_twice_restores_input() {
    let original = b"hello world".to_vec();
    let mask = b"0123456789a";
    let mut data = original.clone();

    xor_in_place(&mut data, mask).unwrap();
    assert_ne!(data, original);

    xor_in_place(&mut data, mask).unwrap();
    assert_eq!(data, original);
}

#[test]
fn test_pad_zeros() {
    assert_eq!(pad_zeros(&[1, 2], 4, true), Ok(vec![0, 0, 1, 2]));
    assert_eq!(pad_zeros(&[1, 2], 4, false), Ok(vec![1, 2, 0, 0]));
    assert_eq!(pad_zeros(&[1, 2], 2, true), Ok(vec![1, 2]));
    assert_eq!(
        pad_zeros(&[1, 2, 3], 2, false),
        Err(BytesError::TooLong { actual: 3, target: 2 })
    );
}

#[test]
fn test_hex_helpers() {
    assert_eq!(to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    assert_eq!(from_hex("DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    assert!(from_hex("xyz").is_err());
}

#[test]
fn test_random_bytes() {
    let a = random_bytes(32).unwrap();
    let b = random_bytes(32).unwrap();

    assert_eq!(a.len(), 32);
    assert_ne!(a, b);
    assert!(random_bytes(0).unwrap().is_empty());
}

#[test]
fn test_random_string_uses_alphabet() {
    let text = random_string(&mut SystemRandom, 500, DEFAULT_ALPHABET).unwrap();

    assert_eq!(text.chars().count(), 500);
    assert!(text.chars().all(|c| DEFAULT_ALPHABET.contains(c)));

    let distinct: HashSet<char> = text.chars().collect();
    assert!(distinct.len() > 20, "500 draws should cover most of the alphabet");
}

#[test]
fn test_random_string_custom_alphabet() {
    let text = random_string(&mut SystemRandom, 64, "ab").unwrap();
    assert!(text.chars().all(|c| c == 'a' || c == 'b'));

    let single = random_string(&mut SystemRandom, 8, "é").unwrap();
    assert_eq!(single, "éééééééé");
}

#[test]
fn test_random_string_rejects_empty_alphabet() {
    assert_eq!(
        random_string(&mut SystemRandom, 4, ""),
        Err(BytesError::EmptyAlphabet)
    );
}
