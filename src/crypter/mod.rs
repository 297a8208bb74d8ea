//! Symmetric key derivation on top of PBKDF2-HMAC-SHA256.
//!
//! A [`Crypter`] pairs a secret key with [`DeriveParams`] and offers two
//! XOR-based operations:
//!
//! - `derive(data)`: mixes caller data into the key, giving a value as long
//!   as the key that can later be checked with `check_derive`;
//! - `turn(data)`: masks data with a keystream drawn from the key. Turning
//!   twice restores the input.
//!
//! [`MemoryCrypter`] holds its key in memory, for example a
//! [`SharedKey`](crate::ecdh::SharedKey) produced by key agreement.
//! [`AutoCrypter`] keeps one master key per region in a [`KeyStore`] and
//! derives sub-region crypters from it.
//!
//! No message authentication is provided; `turn` is not an AEAD.

mod auto;
mod core;
mod memory;
mod params;
mod pbkdf2;
mod store;

pub use auto::AutoCrypter;
pub use self::core::Crypter;
pub use memory::MemoryCrypter;
pub use params::{DEFAULT_ITERATIONS, DeriveParams};
pub use pbkdf2::{pbkdf2_hmac_sha256, pbkdf2_hmac_sha256_vec};
pub use store::{KEY_DIRECTORY, KeyStore};
