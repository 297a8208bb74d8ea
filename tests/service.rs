use std::time::{Duration, Instant};

use cryptonite::EcdhError;
use cryptonite::ecdh::{
    KEY_LENGTH, clamp, derive_public_key, derive_shared_secret, generate_random_private_key, x25519,
};
use cryptonite::rng::SystemRandom;

use proptest::prelude::*;
use rand_core::{CryptoRng, RngCore, impls};

/// Deterministic generator for reproducible key generation.
struct CounterRng(u64);

impl RngCore for CounterRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for CounterRng {}

#[test]
fn test_generated_private_key_is_clamped() {
    let key = generate_random_private_key(&mut SystemRandom);
    assert_eq!(key, clamp(&key));
}

#[test]
fn test_generated_private_keys_differ() {
    let a = generate_random_private_key(&mut SystemRandom);
    let b = generate_random_private_key(&mut SystemRandom);
    assert_ne!(a, b);
}

#[test]
fn test_generation_follows_injected_rng() {
    let a = generate_random_private_key(&mut CounterRng(7));
    let b = generate_random_private_key(&mut CounterRng(7));
    let c = generate_random_private_key(&mut CounterRng(8));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_public_key_is_deterministic() {
    let private = generate_random_private_key(&mut SystemRandom);

    let first = derive_public_key(Some(&private[..])).unwrap();
    let second = derive_public_key(Some(&private[..])).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_public_key_ignores_clamped_bits() {
    let raw = [0xffu8; 32];
    let clamped = clamp(&raw);

    assert_eq!(
        derive_public_key(Some(&raw[..])).unwrap(),
        derive_public_key(Some(&clamped[..])).unwrap()
    );
}

#[test]
fn test_public_key_rejects_bad_lengths() {
    for len in [0usize, 31, 33] {
        let buf = vec![1u8; len];
        assert_eq!(
            derive_public_key(Some(buf.as_slice())),
            Err(EcdhError::InvalidKeyLength {
                name: "private key",
                expected: KEY_LENGTH,
                actual: len,
            })
        );
    }
}

#[test]
fn test_public_key_rejects_missing_input() {
    assert_eq!(derive_public_key(None), Err(EcdhError::NullInput("private key")));
}

#[test]
fn test_shared_secret_rejects_bad_lengths() {
    let good = [9u8; 32];

    for len in [0usize, 31, 33] {
        let buf = vec![1u8; len];

        assert_eq!(
            derive_shared_secret(Some(buf.as_slice()), Some(&good[..])),
            Err(EcdhError::InvalidKeyLength {
                name: "peer public key",
                expected: KEY_LENGTH,
                actual: len,
            })
        );
        assert_eq!(
            derive_shared_secret(Some(&good[..]), Some(buf.as_slice())),
            Err(EcdhError::InvalidKeyLength {
                name: "private key",
                expected: KEY_LENGTH,
                actual: len,
            })
        );
    }
}

#[test]
fn test_shared_secret_rejects_missing_input() {
    let good = [9u8; 32];

    assert_eq!(
        derive_shared_secret(None, Some(&good[..])),
        Err(EcdhError::NullInput("peer public key"))
    );
    assert_eq!(
        derive_shared_secret(Some(&good[..]), None),
        Err(EcdhError::NullInput("private key"))
    );
    assert_eq!(
        derive_shared_secret(None, None),
        Err(EcdhError::NullInput("peer public key"))
    );
}

#[test]
fn test_shared_secret_is_never_zero_for_random_keys() {
    for _ in 0..16 {
        let a = generate_random_private_key(&mut SystemRandom);
        let b = generate_random_private_key(&mut SystemRandom);
        let b_public = derive_public_key(Some(&b[..])).unwrap();

        let shared = derive_shared_secret(Some(&b_public[..]), Some(&a[..])).unwrap();
        assert_ne!(shared, [0u8; 32]);
    }
}

/// Smoke check that ladder timing does not track the scalar's Hamming
/// weight. Uses the fastest of many runs to filter scheduler noise.
///
/// Wall-clock sensitive, so it only runs on request:
/// `cargo test --release --test service -- --ignored`.
#[test]
#[ignore = "timing-sensitive; run with --release -- --ignored"]
fn test_ladder_timing_does_not_depend_on_scalar() {
    fn fastest(scalar: &[u8; 32], u: &[u8; 32]) -> Duration {
        (0..25)
            .map(|_| {
                let start = Instant::now();
                std::hint::black_box(x25519(std::hint::black_box(scalar), u));
                start.elapsed()
            })
            .min()
            .unwrap()
    }

    let mut u = [0u8; 32];
    u[0] = 9;

    let sparse = clamp(&[0u8; 32]);
    let dense = clamp(&[0xffu8; 32]);

    let t_sparse = fastest(&sparse, &u).as_secs_f64();
    let t_dense = fastest(&dense, &u).as_secs_f64();
    let ratio = t_sparse.max(t_dense) / t_sparse.min(t_dense);

    assert!(ratio < 2.0, "ladder timing ratio {ratio:.2} between sparse and dense scalars");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_shared_secret_is_commutative(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let a_public = derive_public_key(Some(&a[..])).unwrap();
        let b_public = derive_public_key(Some(&b[..])).unwrap();

        let from_a = derive_shared_secret(Some(&b_public[..]), Some(&a[..])).unwrap();
        let from_b = derive_shared_secret(Some(&a_public[..]), Some(&b[..])).unwrap();

        prop_assert_eq!(from_a, from_b);
    }
}
