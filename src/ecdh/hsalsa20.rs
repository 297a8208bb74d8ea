//! HSalsa20: the Salsa20 core used as a keyed hash.
//!
//! A raw X25519 output is a field element with visible algebraic structure.
//! Running it once through HSalsa20 with an all-zero nonce turns it into a
//! uniformly distributed 32-byte key, matching NaCl's
//! `crypto_box_beforenm`.
//!
//! Only the one-shot core is provided; no keystream is ever generated.

/// `"expand 32-byte k"` as four little-endian words.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Applies one Salsa20 quarter round to the state words at `a, b, c, d`.
#[inline(always)]
fn quarter_round(s: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    s[b] ^= s[a].wrapping_add(s[d]).rotate_left(7);
    s[c] ^= s[b].wrapping_add(s[a]).rotate_left(9);
    s[d] ^= s[c].wrapping_add(s[b]).rotate_left(13);
    s[a] ^= s[d].wrapping_add(s[c]).rotate_left(18);
}

#[inline(always)]
fn load_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Computes `HSalsa20(key, nonce)`.
///
/// The state is laid out as
///
/// ```text
/// σ0 k0 k1 k2
/// k3 σ1 n0 n1
/// n2 n3 σ2 k4
/// k5 k6 k7 σ3
/// ```
///
/// and after twenty rounds (without the Salsa20 feed-forward) words
/// `0, 5, 10, 15, 6, 7, 8, 9` form the output.
pub fn hsalsa20(key: &[u8; 32], nonce: &[u8; 16]) -> [u8; 32] {
    let mut state = [0u32; 16];

    state[0] = SIGMA[0];
    state[5] = SIGMA[1];
    state[10] = SIGMA[2];
    state[15] = SIGMA[3];

    for (i, chunk) in key.chunks_exact(4).enumerate() {
        let slot = if i < 4 { 1 + i } else { 7 + i };
        state[slot] = load_u32(chunk);
    }

    for (i, chunk) in nonce.chunks_exact(4).enumerate() {
        state[6 + i] = load_u32(chunk);
    }

    for _ in 0..10 {
        // Columns.
        quarter_round(&mut state, 0, 4, 8, 12);
        quarter_round(&mut state, 5, 9, 13, 1);
        quarter_round(&mut state, 10, 14, 2, 6);
        quarter_round(&mut state, 15, 3, 7, 11);

        // Rows.
        quarter_round(&mut state, 0, 1, 2, 3);
        quarter_round(&mut state, 5, 6, 7, 4);
        quarter_round(&mut state, 10, 11, 8, 9);
        quarter_round(&mut state, 15, 12, 13, 14);
    }

    let mut output = [0u8; 32];
    for (chunk, &word) in output
        .chunks_exact_mut(4)
        .zip([0, 5, 10, 15, 6, 7, 8, 9].iter())
    {
        chunk.copy_from_slice(&state[word].to_le_bytes());
    }

    output
}

/// Whitens a raw X25519 output into a shared key: `HSalsa20(raw, 0¹²⁸)`.
pub fn whiten(raw: &[u8; 32]) -> [u8; 32] {
    hsalsa20(raw, &[0u8; 16])
}
