//! Byte-level key agreement operations.
//!
//! These functions take raw, possibly absent buffers and check them before
//! doing any arithmetic. The typed wrappers in [`super::keys`] are built on
//! top of them.

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::clamp::{clamp, clamp_in_place};
use super::edwards::scalar_mul_base;
use super::hsalsa20::whiten;
use super::montgomery::x25519;
use crate::error::EcdhError;

/// Length in bytes of private keys, public keys and shared keys.
pub const KEY_LENGTH: usize = 32;

/// Checks that `input` is present and exactly [`KEY_LENGTH`] bytes long.
fn require_key(input: Option<&[u8]>, name: &'static str) -> Result<[u8; KEY_LENGTH], EcdhError> {
    let bytes = input.ok_or(EcdhError::NullInput(name))?;

    bytes
        .try_into()
        .map_err(|_| EcdhError::InvalidKeyLength {
            name,
            expected: KEY_LENGTH,
            actual: bytes.len(),
        })
}

/// `clamp(scalar) · B`, as a Montgomery `u`-coordinate.
pub(crate) fn public_from_scalar(scalar: &[u8; KEY_LENGTH]) -> [u8; KEY_LENGTH] {
    let mut clamped = clamp(scalar);
    let public = scalar_mul_base(&clamped).to_montgomery_u();
    clamped.zeroize();
    public
}

/// `HSalsa20(X25519(scalar, peer), 0)`.
pub(crate) fn shared_from_scalar(
    scalar: &[u8; KEY_LENGTH],
    peer: &[u8; KEY_LENGTH],
) -> [u8; KEY_LENGTH] {
    let mut raw = x25519(scalar, peer);
    let shared = whiten(&raw);
    raw.zeroize();
    shared
}

/// Draws 32 bytes from `rng` and clamps them.
///
/// # Panics
/// Panics if `rng` cannot produce output, as [`RngCore::fill_bytes`] does.
pub fn generate_random_private_key<R>(rng: &mut R) -> [u8; KEY_LENGTH]
where
    R: RngCore + CryptoRng,
{
    let mut key = [0u8; KEY_LENGTH];
    rng.fill_bytes(&mut key);
    clamp_in_place(&mut key);
    key
}

/// Derives the public key (a Montgomery `u`-coordinate) of `private_key`.
///
/// The key is clamped on a copy before use, so clamped and unclamped
/// encodings of the same scalar give the same public key.
pub fn derive_public_key(private_key: Option<&[u8]>) -> Result<[u8; KEY_LENGTH], EcdhError> {
    let mut scalar = require_key(private_key, "private key")?;
    let public = public_from_scalar(&scalar);
    scalar.zeroize();

    Ok(public)
}

/// Computes the shared key between `private_key` and `peer_public_key`.
///
/// The raw X25519 output is never returned; it is passed through
/// HSalsa20 first. Both inputs are validated before the ladder runs.
pub fn derive_shared_secret(
    peer_public_key: Option<&[u8]>,
    private_key: Option<&[u8]>,
) -> Result<[u8; KEY_LENGTH], EcdhError> {
    let peer = require_key(peer_public_key, "peer public key")?;
    let mut scalar = require_key(private_key, "private key")?;
    let shared = shared_from_scalar(&scalar, &peer);
    scalar.zeroize();

    Ok(shared)
}

/// Clamped copy of `private_key`, for callers that want to store keys in
/// the form [`generate_random_private_key`] returns.
pub fn clamp_private_key(private_key: Option<&[u8]>) -> Result<[u8; KEY_LENGTH], EcdhError> {
    let mut scalar = require_key(private_key, "private key")?;
    let clamped = clamp(&scalar);
    scalar.zeroize();
    Ok(clamped)
}
