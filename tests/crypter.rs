use cryptonite::CrypterError;
use cryptonite::crypter::{
    Crypter, DEFAULT_ITERATIONS, DeriveParams, MemoryCrypter, pbkdf2_hmac_sha256,
    pbkdf2_hmac_sha256_vec,
};
use cryptonite::ecdh::SharedKey;

use proptest::prelude::*;

fn pbkdf2_hex(iterations: u32, len: usize) -> String {
    hex::encode(pbkdf2_hmac_sha256_vec(b"password", b"salt", iterations, len))
}

/// Cheap parameters so property tests stay fast.
fn fast_params() -> DeriveParams {
    DeriveParams::default().with_iterations(2)
}

#[test]
fn test_pbkdf2_sha256_vectors() {
    assert_eq!(
        pbkdf2_hex(1, 32),
        "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
    );
    assert_eq!(
        pbkdf2_hex(2, 32),
        "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43"
    );
    assert_eq!(
        pbkdf2_hex(4096, 32),
        "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a"
    );
}

#[test]
fn test_pbkdf2_output_prefixes_agree() {
    let long = pbkdf2_hmac_sha256_vec(b"password", b"salt", 3, 80);

    let mut short = [0u8; 20];
    pbkdf2_hmac_sha256(b"password", b"salt", 3, &mut short);

    assert_eq!(&long[..20], &short);
    assert_eq!(long.len(), 80);
}

#[test]
fn test_default_params() {
    let params = DeriveParams::default();

    assert_eq!(params.salt, vec![0u8]);
    assert_eq!(params.iterations, DEFAULT_ITERATIONS);
    assert_eq!(DEFAULT_ITERATIONS, 12_513);
    assert!(params.validate().is_ok());
}

#[test]
fn test_params_validation() {
    let zero_iterations = DeriveParams::default().with_iterations(0);
    let empty_salt = DeriveParams::default().with_salt(Vec::new());

    assert!(matches!(zero_iterations.validate(), Err(CrypterError::InvalidParams(_))));
    assert!(matches!(empty_salt.validate(), Err(CrypterError::InvalidParams(_))));
    assert!(matches!(
        MemoryCrypter::from_key(vec![1u8; 16], empty_salt),
        Err(CrypterError::InvalidParams(_))
    ));
}

#[test]
fn test_memory_crypter_rejects_empty_key() {
    assert!(matches!(
        MemoryCrypter::from_key(Vec::new(), fast_params()),
        Err(CrypterError::InvalidParams(_))
    ));
    assert!(matches!(
        MemoryCrypter::new(0, fast_params()),
        Err(CrypterError::InvalidParams(_))
    ));
}

#[test]
fn test_derive_is_key_xor_pbkdf2() {
    let key = vec![0x5au8; 40];
    let params = DeriveParams::default();
    let crypter = MemoryCrypter::from_key(key.clone(), params.clone()).unwrap();

    let mask = pbkdf2_hmac_sha256_vec(b"region", &params.salt, params.iterations, key.len());
    let expected: Vec<u8> = key.iter().zip(&mask).map(|(k, m)| k ^ m).collect();

    assert_eq!(crypter.derive(b"region"), expected);
    assert_eq!(crypter.derive_str("region"), expected);
}

#[test]
fn test_turn_is_data_xor_pbkdf2_of_key() {
    let key = vec![7u8; 32];
    let params = fast_params();
    let crypter = MemoryCrypter::from_key(key.clone(), params.clone()).unwrap();

    let data = b"attack at dawn".to_vec();
    let mask = pbkdf2_hmac_sha256_vec(&key, &params.salt, params.iterations, data.len());
    let expected: Vec<u8> = data.iter().zip(&mask).map(|(d, m)| d ^ m).collect();

    assert_eq!(crypter.turn(&data), expected);
}

#[test]
fn test_check_derive() {
    let crypter = MemoryCrypter::new(32, fast_params()).unwrap();
    let derived = crypter.derive(b"secret");

    assert!(crypter.check_derive(b"secret", &derived));
    assert!(!crypter.check_derive(b"Secret", &derived));
    assert!(!crypter.check_derive(b"secret", &derived[..31]));
}

#[test]
fn test_string_overloads_match_byte_forms() {
    let crypter = MemoryCrypter::new(32, fast_params()).unwrap();
    let derived = crypter.derive_str("région");

    assert!(crypter.check_derive_str("région", &derived));
    assert!(crypter.check_derive("région".as_bytes(), &derived));
    assert!(!crypter.check_derive_str("region", &derived));

    let turned = crypter.turn_str("attack at dawn");
    assert_eq!(turned, crypter.turn(b"attack at dawn"));
    assert_eq!(crypter.turn(&turned), b"attack at dawn");
}

#[test]
fn test_random_crypters_differ() {
    let a = MemoryCrypter::new(32, fast_params()).unwrap();
    let b = MemoryCrypter::new(32, fast_params()).unwrap();

    assert_eq!(a.key().len(), 32);
    assert_ne!(a.key(), b.key());
    assert_ne!(a.derive(b"x"), b.derive(b"x"));
}

#[test]
fn test_crypter_from_shared_key() {
    let shared = SharedKey::from_bytes(&[3u8; 32]).unwrap();
    let crypter = MemoryCrypter::from_shared_key(&shared, fast_params()).unwrap();

    assert_eq!(crypter.key(), shared.as_bytes());
}

#[test]
fn test_salt_changes_output() {
    let key = vec![1u8; 32];
    let a = MemoryCrypter::from_key(key.clone(), fast_params()).unwrap();
    let b = MemoryCrypter::from_key(key, fast_params().with_salt(b"other".to_vec())).unwrap();

    assert_ne!(a.derive(b"data"), b.derive(b"data"));
    assert_ne!(a.turn(b"data"), b.turn(b"data"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_turn_is_an_involution(
        key in proptest::collection::vec(any::<u8>(), 1..64),
        data in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let crypter = MemoryCrypter::from_key(key, fast_params()).unwrap();
        prop_assert_eq!(crypter.turn(&crypter.turn(&data)), data);
    }

    #[test]
    fn prop_derive_has_key_length(
        key in proptest::collection::vec(any::<u8>(), 1..100),
        data in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let len = key.len();
        let crypter = MemoryCrypter::from_key(key, fast_params()).unwrap();
        prop_assert_eq!(crypter.derive(&data).len(), len);
    }
}
