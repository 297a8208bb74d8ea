//! X25519 key agreement and NaCl-style key derivation.
//!
//! # Module overview
//!
//! - `ecdh`
//!   Curve25519 Diffie–Hellman. Field arithmetic modulo `2²⁵⁵ − 19`,
//!   fixed-base multiplication on the Edwards form for public keys, the
//!   RFC 7748 Montgomery ladder for shared secrets, scalar clamping, and
//!   HSalsa20 whitening of the raw ladder output. Byte-level operations
//!   validate their inputs and return [`EcdhError`]; typed wrappers
//!   ([`ecdh::PrivateKey`], [`ecdh::PublicKey`], [`ecdh::SharedKey`],
//!   [`ecdh::KeyPair`]) sit on top.
//!
//! - `crypter`
//!   PBKDF2-HMAC-SHA256 derivation and XOR masking over a secret key, with
//!   an in-memory variant and a variant backed by per-region key files.
//!
//! - `rng`
//!   [`rng::SystemRandom`], the operating system as a
//!   `rand_core::CryptoRng`.
//!
//! - `util`
//!   Constant-time comparison, XOR, padding, hex and random helpers.
//!
//! # Constant time
//!
//! Clamping, the ladder, fixed-base multiplication and field inversion
//! execute the same instructions and touch the same memory for every
//! secret input. Only lengths are allowed to influence timing.
//!
//! # Example
//!
//! ```
//! use cryptonite::ecdh::{derive_public_key, derive_shared_secret, generate_random_private_key};
//! use cryptonite::rng::SystemRandom;
//!
//! let alice = generate_random_private_key(&mut SystemRandom);
//! let bob = generate_random_private_key(&mut SystemRandom);
//!
//! let alice_pub = derive_public_key(Some(&alice[..]))?;
//! let bob_pub = derive_public_key(Some(&bob[..]))?;
//!
//! let k1 = derive_shared_secret(Some(&bob_pub[..]), Some(&alice[..]))?;
//! let k2 = derive_shared_secret(Some(&alice_pub[..]), Some(&bob[..]))?;
//! assert_eq!(k1, k2);
//! # Ok::<(), cryptonite::EcdhError>(())
//! ```

mod ct;
mod os;

pub mod crypter;
pub mod ecdh;
pub mod error;
pub mod rng;
pub mod util;

pub use ct::ConstantTimeEq;
pub use error::{BytesError, CrypterError, EcdhError, StoreError};
