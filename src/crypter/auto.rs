//! Crypters backed by a persisted per-region master key.

use std::fmt;

use tracing::debug;

use super::core::Crypter;
use super::memory::MemoryCrypter;
use super::params::DeriveParams;
use super::store::KeyStore;
use crate::error::CrypterError;

/// Crypter over a persisted per-region master key.
///
/// The master key is loaded from (or created in) a [`KeyStore`]. Narrower
/// crypters for sub-regions are derived from it with
/// [`AutoCrypter::crypter`], so only one key per region is ever stored.
pub struct AutoCrypter {
    region: String,
    inner: MemoryCrypter,
}

impl AutoCrypter {
    /// Loads the key for `region`, creating `key_size` random bytes on first
    /// use.
    pub fn open(
        store: &KeyStore,
        region: &str,
        key_size: usize,
        params: DeriveParams,
    ) -> Result<Self, CrypterError> {
        if key_size == 0 {
            return Err(CrypterError::InvalidParams("key size must be at least 1"));
        }

        params.validate()?;

        let key = store.load_or_create(region, key_size)?;

        Ok(Self {
            region: region.to_owned(),
            inner: MemoryCrypter::from_key(key, params)?,
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Crypter for `sub_region`, keyed with `derive(sub_region)` and using
    /// the same parameters.
    ///
    /// The result is deterministic: the same store, region and sub-region
    /// always give the same key.
    pub fn crypter(&self, sub_region: &str) -> Result<MemoryCrypter, CrypterError> {
        debug!(region = %self.region, sub_region, "deriving sub-region crypter");

        MemoryCrypter::from_key(self.derive_str(sub_region), self.inner.params().clone())
    }
}

impl Crypter for AutoCrypter {
    fn key(&self) -> &[u8] {
        self.inner.key()
    }

    fn params(&self) -> &DeriveParams {
        self.inner.params()
    }
}

impl fmt::Debug for AutoCrypter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoCrypter")
            .field("region", &self.region)
            .field("inner", &self.inner)
            .finish()
    }
}
