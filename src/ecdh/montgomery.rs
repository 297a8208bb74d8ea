//! The X25519 function: variable-base scalar multiplication on the
//! Montgomery curve `v² = u³ + 486662·u² + u`, using only `u`-coordinates.
//!
//! Follows the ladder of RFC 7748 §5. Each of the 255 steps performs the
//! same field operations in the same order, and the pair swap is a masked
//! exchange keyed on `bit ⊕ previous bit`, so neither the scalar nor the
//! peer value influence control flow or memory addresses.

use zeroize::Zeroize;

use super::clamp::clamp;
use super::field::FieldElement;

/// Computes `X25519(scalar, u)`.
///
/// The scalar is clamped internally; clamping an already clamped scalar
/// changes nothing. Bit 255 of `u` is ignored, and non-canonical values
/// are accepted as-is.
///
/// Low-order inputs produce the all-zero output; no check is made.
pub fn x25519(scalar: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
    let mut k = clamp(scalar);
    let x1 = FieldElement::from_bytes(u);

    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;
    let mut swap = 0u32;

    for t in (0..255).rev() {
        let bit = u32::from((k[t >> 3] >> (t & 7)) & 1);

        swap ^= bit;
        x2.conditional_swap(&mut x3, swap);
        z2.conditional_swap(&mut z3, swap);
        swap = bit;

        let a = x2 + z2;
        let aa = a.square();
        let b = x2 - z2;
        let bb = b.square();
        let e = aa - bb;
        let c = x3 + z3;
        let d = x3 - z3;
        let da = d * a;
        let cb = c * b;

        x3 = (da + cb).square();
        z3 = x1 * (da - cb).square();
        x2 = aa * bb;
        z2 = e * (bb + e.mul121666());
    }

    x2.conditional_swap(&mut x3, swap);
    z2.conditional_swap(&mut z3, swap);

    k.zeroize();

    (x2 * z2.invert()).to_bytes()
}
