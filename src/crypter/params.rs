//! Parameters for PBKDF2-based derivation.

use crate::error::CrypterError;

/// Iteration count used when none is specified.
pub const DEFAULT_ITERATIONS: u32 = 12_513;

/// PBKDF2-HMAC-SHA256 settings shared by every crypter.
///
/// Both fields are public; call [`DeriveParams::validate`] after editing
/// them by hand. Constructors in this crate validate on entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeriveParams {
    /// Salt fed to every PBKDF2 call. Must not be empty.
    pub salt: Vec<u8>,
    /// PBKDF2 iteration count. Must be at least 1.
    pub iterations: u32,
}

impl DeriveParams {
    /// Replaces the salt, keeping the iteration count.
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Replaces the iteration count, keeping the salt.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn validate(&self) -> Result<(), CrypterError> {
        if self.iterations < 1 {
            return Err(CrypterError::InvalidParams("iterations must be at least 1"));
        }

        if self.salt.is_empty() {
            return Err(CrypterError::InvalidParams("salt must not be empty"));
        }

        Ok(())
    }
}

impl Default for DeriveParams {
    /// Single zero byte of salt, 12 513 iterations.
    fn default() -> Self {
        Self {
            salt: vec![0],
            iterations: DEFAULT_ITERATIONS,
        }
    }
}
