//! X25519 scalar clamping (RFC 7748 §5).

/// Clamps a 32-byte scalar in place.
///
/// - bits 0–2 of byte 0 are cleared, making the scalar a multiple of the
///   cofactor 8;
/// - bit 7 of byte 31 is cleared;
/// - bit 6 of byte 31 is set, fixing the ladder length at 255 steps.
///
/// The masks are unconditional, so clamping is idempotent and its timing
/// does not depend on the scalar.
#[inline]
pub fn clamp_in_place(scalar: &mut [u8; 32]) {
    scalar[0] &= 0b1111_1000;
    scalar[31] &= 0b0111_1111;
    scalar[31] |= 0b0100_0000;
}

/// Returns a clamped copy of `scalar`.
#[inline]
pub fn clamp(scalar: &[u8; 32]) -> [u8; 32] {
    let mut clamped = *scalar;
    clamp_in_place(&mut clamped);
    clamped
}
