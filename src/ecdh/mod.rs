//! X25519 key agreement.
//!
//! ## Structure
//!
//! - `field`: arithmetic modulo `2²⁵⁵ − 19`.
//! - `edwards`: fixed-base multiplication `k · B` for public keys.
//! - `montgomery`: the RFC 7748 ladder for shared secrets.
//! - `clamp`: private scalar clamping.
//! - `hsalsa20`: whitening of the raw ladder output.
//! - `service`: byte-level operations with input validation.
//! - `keys`: typed wrappers over the service.
//!
//! ## Example
//!
//! ```
//! use cryptonite::ecdh::KeyPair;
//!
//! let alice = KeyPair::generate();
//! let bob = KeyPair::generate();
//!
//! assert_eq!(
//!     alice.shared_key(bob.public_key()),
//!     bob.shared_key(alice.public_key()),
//! );
//! ```

mod clamp;
mod edwards;
mod field;
mod hsalsa20;
mod keys;
mod montgomery;
mod service;

pub use clamp::{clamp, clamp_in_place};
pub use edwards::{ExtendedPoint, scalar_mul_base};
pub use field::FieldElement;
pub use hsalsa20::{hsalsa20, whiten};
pub use keys::{KeyPair, PrivateKey, PublicKey, SharedKey};
pub use montgomery::x25519;
pub use service::{
    KEY_LENGTH, clamp_private_key, derive_public_key, derive_shared_secret,
    generate_random_private_key,
};
