use cryptonite::EcdhError;
use cryptonite::ecdh::{clamp, clamp_in_place, clamp_private_key};

use proptest::prelude::*;

#[test]
fn test_clamp_bit_pattern_on_all_ones() {
    let clamped = clamp(&[0xff; 32]);

    assert_eq!(clamped[0], 0xf8);
    assert_eq!(clamped[31], 0x7f);
    assert!(clamped[1..31].iter().all(|&b| b == 0xff));
}

#[test]
fn test_clamp_bit_pattern_on_all_zeros() {
    let clamped = clamp(&[0u8; 32]);

    assert_eq!(clamped[0], 0);
    assert_eq!(clamped[31], 0x40);
    assert!(clamped[1..31].iter().all(|&b| b == 0));
}

#[test]
fn test_clamp_in_place_matches_copy() {
    let mut scalar = [0xa5u8; 32];
    let expected = clamp(&scalar);

    clamp_in_place(&mut scalar);

    assert_eq!(scalar, expected);
}

#[test]
fn test_clamp_private_key_validates_length() {
    assert_eq!(
        clamp_private_key(Some(&[0u8; 31][..])),
        Err(EcdhError::InvalidKeyLength {
            name: "private key",
            expected: 32,
            actual: 31,
        })
    );
    assert_eq!(clamp_private_key(None), Err(EcdhError::NullInput("private key")));
    assert_eq!(clamp_private_key(Some(&[0xff; 32][..])), Ok(clamp(&[0xff; 32])));
}

proptest! {
    #[test]
    fn prop_clamp_is_idempotent(scalar in any::<[u8; 32]>()) {
        let once = clamp(&scalar);
        prop_assert_eq!(clamp(&once), once);
    }

    #[test]
    fn prop_clamp_sets_fixed_bits(scalar in any::<[u8; 32]>()) {
        let clamped = clamp(&scalar);

        prop_assert_eq!(clamped[0] & 0b0000_0111, 0);
        prop_assert_eq!(clamped[31] & 0b1000_0000, 0);
        prop_assert_eq!(clamped[31] & 0b0100_0000, 0b0100_0000);
        prop_assert_eq!(&clamped[1..31], &scalar[1..31]);
    }
}
