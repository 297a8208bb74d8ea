//! Byte helpers shared by the key types and the crypter layer.

use std::io;

use rand_core::{CryptoRng, RngCore};

use crate::ct::ConstantTimeEq;
use crate::error::BytesError;
use crate::os::fill_random;

/// Symbols used by [`random_string`] when no alphabet is given.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789/;.,!@#$%";

/// Compares two byte strings without an early exit.
///
/// Inputs of different lengths compare unequal at once; for equal lengths
/// every byte is inspected.
pub fn timing_safe_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b)
}

/// Returns `a ⊕ b`.
pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>, BytesError> {
    let mut out = a.to_vec();
    xor_in_place(&mut out, b)?;
    Ok(out)
}

/// Replaces `dst` with `dst ⊕ src`.
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) -> Result<(), BytesError> {
    if dst.len() != src.len() {
        return Err(BytesError::LengthMismatch {
            left: dst.len(),
            right: src.len(),
        });
    }

    dst.iter_mut().zip(src).for_each(|(d, s)| *d ^= s);

    Ok(())
}

/// Pads `input` with zero bytes up to `len`.
///
/// With `pad_from_left` the zeros go in front (big-endian style),
/// otherwise after the input.
pub fn pad_zeros(input: &[u8], len: usize, pad_from_left: bool) -> Result<Vec<u8>, BytesError> {
    if input.len() > len {
        return Err(BytesError::TooLong {
            actual: input.len(),
            target: len,
        });
    }

    let mut out = vec![0u8; len];
    let start = if pad_from_left { len - input.len() } else { 0 };
    out[start..start + input.len()].copy_from_slice(input);

    Ok(out)
}

/// Lowercase hexadecimal encoding.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes hexadecimal of either case.
pub fn from_hex(text: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(text)
}

/// Returns `len` bytes from the operating system's secure source.
pub fn random_bytes(len: usize) -> io::Result<Vec<u8>> {
    let mut out = vec![0u8; len];
    fill_random(&mut out)?;
    Ok(out)
}

/// Builds a string of `len` symbols drawn uniformly from `alphabet`.
///
/// Indices are rejection-sampled, so no symbol is favoured when the
/// alphabet size does not divide 2³².
pub fn random_string<R>(rng: &mut R, len: usize, alphabet: &str) -> Result<String, BytesError>
where
    R: RngCore + CryptoRng,
{
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() {
        return Err(BytesError::EmptyAlphabet);
    }

    let n = symbols.len() as u32;
    let zone = (u32::MAX / n) * n;

    let mut out = String::with_capacity(len);
    let mut produced = 0;
    while produced < len {
        let sample = rng.next_u32();
        if sample < zone {
            out.push(symbols[(sample % n) as usize]);
            produced += 1;
        }
    }

    Ok(out)
}
