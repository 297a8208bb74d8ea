//! The operating system as a `rand_core` generator.

use rand_core::{CryptoRng, Error as RandError, RngCore, impls};

use crate::os::fill_random;

/// Cryptographically secure generator backed directly by the operating
/// system.
///
/// Holds no state: every call goes to the kernel (or the platform
/// equivalent), so copies can be shared freely between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRandom;

impl RngCore for SystemRandom {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    /// # Panics
    /// Panics if the operating system cannot supply entropy. Use
    /// [`RngCore::try_fill_bytes`] to handle that case instead.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = self.try_fill_bytes(dest) {
            panic!("system entropy source failed: {err}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        fill_random(dest).map_err(RandError::new)
    }
}

impl CryptoRng for SystemRandom {}
