//! Error types.
//!
//! - [`EcdhError`]: rejected inputs to the key-agreement operations.
//! - [`BytesError`]: length problems in the byte helpers.
//! - [`StoreError`]: failures of the file-backed key store.
//! - [`CrypterError`]: failures while building a crypter.
//!
//! Every check that can fail is made before any cryptographic work starts.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned by the key-agreement entry points.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum EcdhError {
    /// A required buffer was not supplied.
    #[error("missing input: {0}")]
    NullInput(&'static str),

    /// A key buffer does not have the required length.
    #[error("{name} must be {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Which argument was rejected.
        name: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

/// Error returned by the byte helpers in [`crate::util`].
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum BytesError {
    /// Two operands that must have equal length do not.
    #[error("length mismatch: {left} vs {right} bytes")]
    LengthMismatch {
        /// Length of the first operand.
        left: usize,
        /// Length of the second operand.
        right: usize,
    },

    /// The input is already longer than the requested padded length.
    #[error("input of {actual} bytes does not fit in {target} bytes")]
    TooLong {
        /// Length of the input.
        actual: usize,
        /// Requested length.
        target: usize,
    },

    /// A random string was requested over an empty alphabet.
    #[error("alphabet is empty")]
    EmptyAlphabet,
}

/// Error returned by [`crate::crypter::KeyStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The region name is empty, `.`/`..`, or uses characters outside
    /// `[A-Za-z0-9._-]`.
    #[error("invalid region name {0:?}")]
    InvalidRegion(String),

    /// A stored key exists but has the wrong size.
    #[error("key file {} holds {actual} bytes, expected {expected}", .path.display())]
    KeyLength {
        /// Location of the key file.
        path: PathBuf,
        /// Requested key size.
        expected: usize,
        /// Size found on disk.
        actual: usize,
    },

    /// No per-user data directory could be found in the environment.
    #[error("no local data directory (LOCALAPPDATA, XDG_DATA_HOME and HOME are unset)")]
    NoDataDirectory,

    /// Reading or writing the key file failed.
    #[error("key store I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Error returned while setting up a crypter.
#[derive(Debug, Error)]
pub enum CrypterError {
    /// The derivation parameters are unusable.
    #[error("invalid derivation parameters: {0}")]
    InvalidParams(&'static str),

    /// The operating system failed to provide random bytes.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] io::Error),

    /// The persisted key could not be loaded or created.
    #[error(transparent)]
    Store(#[from] StoreError),
}
