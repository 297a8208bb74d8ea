//! PBKDF2 with HMAC-SHA256 as the PRF (RFC 8018 §5.2).

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroize;

type HmacSha256 = Hmac<Sha256>;

const BLOCK_LEN: usize = 32;

/// Fills `out` with `PBKDF2-HMAC-SHA256(password, salt, iterations)`.
///
/// Any output length is accepted; the last block is truncated. With
/// `iterations == 0` the output is the first PRF round, as with 1.
pub fn pbkdf2_hmac_sha256(password: &[u8], salt: &[u8], iterations: u32, out: &mut [u8]) {
    let Ok(prf) = HmacSha256::new_from_slice(password) else {
        unreachable!("HMAC-SHA256 accepts any key size");
    };

    for (index, chunk) in out.chunks_mut(BLOCK_LEN).enumerate() {
        let block_number = (index as u32).wrapping_add(1);

        let mut mac = prf.clone();
        mac.update(salt);
        mac.update(&block_number.to_be_bytes());
        let mut u = [0u8; BLOCK_LEN];
        u.copy_from_slice(&mac.finalize().into_bytes());
        let mut t = u;

        for _ in 1..iterations {
            let mut mac = prf.clone();
            mac.update(&u);
            u.copy_from_slice(&mac.finalize().into_bytes());
            t.iter_mut().zip(&u).for_each(|(t, u)| *t ^= u);
        }

        chunk.copy_from_slice(&t[..chunk.len()]);

        u.zeroize();
        t.zeroize();
    }
}

/// Allocating form of [`pbkdf2_hmac_sha256`].
pub fn pbkdf2_hmac_sha256_vec(password: &[u8], salt: &[u8], iterations: u32, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    pbkdf2_hmac_sha256(password, salt, iterations, &mut out);
    out
}
