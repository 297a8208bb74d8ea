//! Sources of randomness.
//!
//! Key generation takes any `rand_core::RngCore + CryptoRng`, so callers can
//! inject their own source. [`SystemRandom`] is the default and reads from
//! the operating system on every call.

mod system;

pub use system::SystemRandom;
