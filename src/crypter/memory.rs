//! In-memory crypter.

use std::fmt;

use zeroize::Zeroize;

use super::core::Crypter;
use super::params::DeriveParams;
use crate::ecdh::SharedKey;
use crate::error::CrypterError;
use crate::util::random_bytes;

/// Crypter whose key lives only in memory. Wiped on drop.
#[derive(Clone)]
pub struct MemoryCrypter {
    key: Vec<u8>,
    params: DeriveParams,
}

impl MemoryCrypter {
    /// Creates a crypter over `key_size` fresh random bytes.
    pub fn new(key_size: usize, params: DeriveParams) -> Result<Self, CrypterError> {
        if key_size == 0 {
            return Err(CrypterError::InvalidParams("key size must be at least 1"));
        }

        params.validate()?;
        let key = random_bytes(key_size)?;

        Ok(Self { key, params })
    }

    /// Creates a crypter over existing key bytes.
    pub fn from_key(key: impl Into<Vec<u8>>, params: DeriveParams) -> Result<Self, CrypterError> {
        let key = key.into();
        if key.is_empty() {
            return Err(CrypterError::InvalidParams("key must not be empty"));
        }

        params.validate()?;

        Ok(Self { key, params })
    }

    /// Uses an agreed X25519 shared key as the crypter key.
    pub fn from_shared_key(shared: &SharedKey, params: DeriveParams) -> Result<Self, CrypterError> {
        Self::from_key(shared.as_bytes().to_vec(), params)
    }
}

impl Crypter for MemoryCrypter {
    fn key(&self) -> &[u8] {
        &self.key
    }

    fn params(&self) -> &DeriveParams {
        &self.params
    }
}

impl Drop for MemoryCrypter {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl fmt::Debug for MemoryCrypter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCrypter")
            .field("key_len", &self.key.len())
            .field("params", &self.params)
            .finish()
    }
}
