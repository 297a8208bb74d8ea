//! The [`Crypter`] trait and its provided derive and turn operations.

use zeroize::Zeroize;

use super::params::DeriveParams;
use super::pbkdf2::pbkdf2_hmac_sha256_vec;
use crate::util::timing_safe_eq;

/// A secret key combined with PBKDF2 settings.
///
/// Implementors only supply the key and the parameters; every operation is
/// provided. Outputs are fresh vectors and inputs are never modified.
pub trait Crypter {
    /// The secret key bytes.
    fn key(&self) -> &[u8];

    /// Settings used for every derivation.
    fn params(&self) -> &DeriveParams;

    /// Returns `key ⊕ PBKDF2(data, salt, iterations, key.len())`.
    ///
    /// `data` plays the password role, so the output is as long as the key
    /// and changes completely with either input.
    fn derive(&self, data: &[u8]) -> Vec<u8> {
        let key = self.key();
        let params = self.params();

        let mut out = pbkdf2_hmac_sha256_vec(data, &params.salt, params.iterations, key.len());
        out.iter_mut().zip(key).for_each(|(o, k)| *o ^= k);
        out
    }

    /// [`Crypter::derive`] over the UTF-8 bytes of `text`.
    fn derive_str(&self, text: &str) -> Vec<u8> {
        self.derive(text.as_bytes())
    }

    /// Recomputes `derive(data)` and compares it with `expected` in
    /// constant time.
    fn check_derive(&self, data: &[u8], expected: &[u8]) -> bool {
        let mut derived = self.derive(data);
        let matches = timing_safe_eq(&derived, expected);
        derived.zeroize();
        matches
    }

    /// [`Crypter::check_derive`] over the UTF-8 bytes of `text`.
    fn check_derive_str(&self, text: &str, expected: &[u8]) -> bool {
        self.check_derive(text.as_bytes(), expected)
    }

    /// Returns `data ⊕ PBKDF2(key, salt, iterations, data.len())`.
    ///
    /// The mask depends only on the key, the parameters and the length, so
    /// turning twice gives the input back.
    fn turn(&self, data: &[u8]) -> Vec<u8> {
        let params = self.params();

        let mut out = pbkdf2_hmac_sha256_vec(self.key(), &params.salt, params.iterations, data.len());
        out.iter_mut().zip(data).for_each(|(o, d)| *o ^= d);
        out
    }

    /// [`Crypter::turn`] over the UTF-8 bytes of `text`.
    fn turn_str(&self, text: &str) -> Vec<u8> {
        self.turn(text.as_bytes())
    }
}
