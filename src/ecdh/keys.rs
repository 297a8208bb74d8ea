//! Typed key material.
//!
//! [`PrivateKey`] and [`SharedKey`] are wiped when dropped. A private key
//! is stored exactly as given; clamping is applied whenever it is used.

use std::fmt;

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::service::{
    KEY_LENGTH, generate_random_private_key, public_from_scalar, shared_from_scalar,
};
use crate::ct::ConstantTimeEq;
use crate::error::EcdhError;
use crate::rng::SystemRandom;
use crate::util::to_hex;

fn key_from_slice(bytes: &[u8], name: &'static str) -> Result<[u8; KEY_LENGTH], EcdhError> {
    bytes
        .try_into()
        .map_err(|_| EcdhError::InvalidKeyLength {
            name,
            expected: KEY_LENGTH,
            actual: bytes.len(),
        })
}

/// A 32-byte X25519 private scalar.
#[derive(Clone)]
pub struct PrivateKey([u8; KEY_LENGTH]);

impl PrivateKey {
    /// Generates a fresh clamped key from the operating system.
    ///
    /// # Panics
    /// Panics if the operating system cannot supply entropy.
    pub fn generate() -> Self {
        Self::generate_with(&mut SystemRandom)
    }

    /// Generates a fresh clamped key from `rng`.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        PrivateKey(generate_random_private_key(rng))
    }

    /// Wraps existing key bytes. Any 32 bytes are accepted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EcdhError> {
        key_from_slice(bytes, "private key").map(PrivateKey)
    }

    /// The key bytes as stored, before clamping.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    /// Derives the matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(public_from_scalar(&self.0))
    }

    /// Agrees on a shared key with `peer`.
    pub fn shared_key(&self, peer: &PublicKey) -> SharedKey {
        SharedKey(shared_from_scalar(&self.0, &peer.0))
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = EcdhError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[PrivateKey]")
    }
}

/// A public key: the Montgomery `u`-coordinate of `clamp(k) · B`.
///
/// No validation is performed on decode. Bit 255 is carried along and
/// ignored when the key is used.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey([u8; KEY_LENGTH]);

impl PublicKey {
    /// Reads a 32-byte public key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EcdhError> {
        key_from_slice(bytes, "public key").map(PublicKey)
    }

    /// Same as [`PrivateKey::public_key`].
    pub fn from_private_key(private: &PrivateKey) -> Self {
        private.public_key()
    }

    /// The little-endian `u`-coordinate.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    /// Lowercase hex of [`PublicKey::as_bytes`].
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

impl From<[u8; KEY_LENGTH]> for PublicKey {
    fn from(bytes: [u8; KEY_LENGTH]) -> Self {
        PublicKey(bytes)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = EcdhError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl ConstantTimeEq for PublicKey {
    fn ct_eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[PublicKey 0x{}]", self.to_hex())
    }
}

/// A 32-byte shared key, already whitened with HSalsa20.
///
/// Equality is constant-time.
#[derive(Clone)]
pub struct SharedKey([u8; KEY_LENGTH]);

impl SharedKey {
    /// Wraps 32 bytes of existing shared key material.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EcdhError> {
        key_from_slice(bytes, "shared key").map(SharedKey)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    /// Lowercase hex of the key. Handle with the same care as the key.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

impl Drop for SharedKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl TryFrom<&[u8]> for SharedKey {
    type Error = EcdhError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl ConstantTimeEq for SharedKey {
    fn ct_eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for SharedKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other)
    }
}

impl Eq for SharedKey {}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedKey(..)")
    }
}

impl fmt::Display for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[SharedKey 0x{}]", self.to_hex())
    }
}

/// A private key together with its public key, computed once up front.
#[derive(Clone, Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generates a key pair from the operating system.
    ///
    /// # Panics
    /// Panics if the operating system cannot supply entropy.
    pub fn generate() -> Self {
        Self::from_private_key(PrivateKey::generate())
    }

    /// Generates a key pair from `rng`.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::from_private_key(PrivateKey::generate_with(rng))
    }

    /// Computes the public half of `private`.
    pub fn from_private_key(private: PrivateKey) -> Self {
        let public = private.public_key();
        KeyPair { private, public }
    }

    /// The private half.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// The public half, to be sent to the peer.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Agrees on a shared key with `peer`.
    pub fn shared_key(&self, peer: &PublicKey) -> SharedKey {
        self.private.shared_key(peer)
    }
}
