//! Arithmetic in the prime field 𝔽ₚ, `p = 2²⁵⁵ − 19`.
//!
//! ## Representation
//!
//! An element is stored as ten signed 32-bit limbs of alternating width:
//!
//! ```text
//! [26, 25, 26, 25, 26, 25, 26, 25, 26, 25] bits
//! ```
//!
//! so that limb `i` carries weight `2^⌈25.5·i⌉`. Products are accumulated in
//! `i64`, and reduction uses `2²⁵⁵ ≡ 19 (mod p)`.
//!
//! Addition, subtraction and negation are limb-wise and do not carry; the
//! result is a valid but non-canonical input for the next multiplication.
//! Only [`FieldElement::to_bytes`] produces the canonical representative.
//!
//! ## Constant time
//!
//! Every loop in this module runs over public limb indices. No function
//! branches on, or indexes memory with, the value of an element.

use std::array;
use std::ops::{Add, Mul, Neg, Sub};

/// Bit width of each limb.
const LIMB_BITS: [u32; 10] = [26, 25, 26, 25, 26, 25, 26, 25, 26, 25];

/// Order in which carries are propagated after a multiplication.
///
/// Interleaving the two halves keeps every intermediate limb well inside
/// `i64` even when the input limbs are near 2⁶².
const CARRY_ORDER: [usize; 12] = [0, 4, 1, 5, 2, 6, 3, 7, 4, 8, 9, 0];

/// Multiplies two limbs with explicit promotion to `i64`.
macro_rules! mul {
    ($a:expr, $b:expr) => {
        ($a as i64) * ($b as i64)
    };
}

/// An element of 𝔽ₚ in radix 2^25.5.
#[derive(Clone, Copy)]
pub struct FieldElement(pub(crate) [i32; 10]);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = FieldElement([0; 10]);

    /// The multiplicative identity.
    pub const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Decodes a 32-byte little-endian integer.
    ///
    /// Bit 255 is masked off. Every other input is accepted, including
    /// encodings of values in `[p, 2²⁵⁵)`, which reduce implicitly the
    /// next time the element is encoded.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut masked = *bytes;
        masked[31] &= 0x7f;

        let mut limbs = [0i32; 10];
        let mut acc = 0u64;
        let mut acc_bits = 0u32;
        let mut next_byte = 0usize;

        for (limb, &bits) in limbs.iter_mut().zip(LIMB_BITS.iter()) {
            while acc_bits < bits {
                acc |= u64::from(masked[next_byte]) << acc_bits;
                acc_bits += 8;
                next_byte += 1;
            }

            *limb = (acc & ((1u64 << bits) - 1)) as i32;
            acc >>= bits;
            acc_bits -= bits;
        }

        FieldElement(limbs)
    }

    /// Encodes the canonical representative in `[0, p)` as 32
    /// little-endian bytes. Bit 255 of the output is always zero.
    pub fn to_bytes(self) -> [u8; 32] {
        // Sums and differences may carry limbs past their width; one carry
        // pass brings them back within the bounds the final reduction needs.
        let mut h = reduce(self.0.map(i64::from)).0.map(i64::from);

        // q = ⌊(h + 19) / 2²⁵⁵⌋ is 1 exactly when h ≥ p, so adding 19·q and
        // dropping bit 255 subtracts p the right number of times.
        let mut q = (19 * h[9] + (1i64 << 24)) >> 25;
        for (limb, &bits) in h.iter().zip(LIMB_BITS.iter()) {
            q = (limb + q) >> bits;
        }

        h[0] += 19 * q;

        for index in 0..10 {
            let bits = LIMB_BITS[index];
            let carry = h[index] >> bits;
            h[index] -= carry << bits;

            if index < 9 {
                h[index + 1] += carry;
            }
        }

        let mut output = [0u8; 32];
        let mut acc = 0u64;
        let mut acc_bits = 0u32;
        let mut next_byte = 0usize;

        for (&limb, &bits) in h.iter().zip(LIMB_BITS.iter()) {
            acc |= (limb as u64) << acc_bits;
            acc_bits += bits;

            while acc_bits >= 8 {
                output[next_byte] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                next_byte += 1;
            }
        }

        // 255 bits leave seven pending bits for the final byte.
        output[31] = acc as u8;

        output
    }

    /// Swaps `self` and `other` when `choice == 1`; leaves both untouched
    /// when `choice == 0`. Branch-free.
    pub(crate) fn conditional_swap(&mut self, other: &mut Self, choice: u32) {
        let mask = -(choice as i32);

        for (a, b) in self.0.iter_mut().zip(other.0.iter_mut()) {
            let t = (*a ^ *b) & mask;
            *a ^= t;
            *b ^= t;
        }
    }

    /// Replaces `self` with `other` when `choice == 1`. Branch-free.
    pub(crate) fn conditional_assign(&mut self, other: &Self, choice: u32) {
        let mask = -(choice as i32);

        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a ^= (*a ^ *b) & mask;
        }
    }

    /// Returns `self²`.
    ///
    /// Uses the symmetry of the schoolbook product: each cross term
    /// `fᵢ·fⱼ` with `i < j` is computed once and doubled.
    pub fn square(self) -> Self {
        let f = self.0;
        let mut h = [0i64; 10];

        for i in 0..10 {
            for j in i..10 {
                let mut term = mul!(f[i], f[j]) * limb_weight(i, j);

                if i != j {
                    term *= 2;
                }

                accumulate(&mut h, i + j, term);
            }
        }

        reduce(h)
    }

    /// Squares `self` `n` times in a row, giving `self^(2ⁿ)`.
    pub(crate) fn pow2k(self, n: u32) -> Self {
        (0..n).fold(self, |acc, _| acc.square())
    }

    /// Multiplies by `121666 = (486662 + 2) / 4`, the ladder constant.
    pub(crate) fn mul121666(self) -> Self {
        reduce(self.0.map(|limb| i64::from(limb) * 121_666))
    }

    /// Returns `self⁻¹ = self^(p − 2)`.
    ///
    /// The exponent is reached through a fixed chain of 254 squarings and
    /// 11 multiplications, the same sequence for every input. Zero maps to
    /// zero.
    pub fn invert(self) -> Self {
        let z2 = self.square();
        let z9 = z2.pow2k(2) * self;
        let z11 = z9 * z2;
        let z_5_0 = z11.square() * z9;
        let z_10_0 = z_5_0.pow2k(5) * z_5_0;
        let z_20_0 = z_10_0.pow2k(10) * z_10_0;
        let z_40_0 = z_20_0.pow2k(20) * z_20_0;
        let z_50_0 = z_40_0.pow2k(10) * z_10_0;
        let z_100_0 = z_50_0.pow2k(50) * z_50_0;
        let z_200_0 = z_100_0.pow2k(100) * z_100_0;
        let z_250_0 = z_200_0.pow2k(50) * z_50_0;

        // (2²⁵⁰ − 1)·2⁵ + 11 = 2²⁵⁵ − 21 = p − 2
        z_250_0.pow2k(5) * z11
    }
}

/// Extra factor picked up by the product of limbs `i` and `j`.
///
/// `⌈25.5·i⌉ + ⌈25.5·j⌉` overshoots `⌈25.5·(i + j)⌉` by one bit exactly
/// when both indices are odd.
#[inline(always)]
fn limb_weight(i: usize, j: usize) -> i64 {
    1 + (i & j & 1) as i64
}

/// Adds a partial product into position `k`, folding positions ≥ 10 back
/// with `2²⁵⁵ ≡ 19`.
#[inline(always)]
fn accumulate(h: &mut [i64; 10], k: usize, term: i64) {
    if k >= 10 {
        h[k - 10] += 19 * term;
    } else {
        h[k] += term;
    }
}

/// Carries a wide accumulator back into 26/25-bit signed limbs.
fn reduce(mut h: [i64; 10]) -> FieldElement {
    for &index in CARRY_ORDER.iter() {
        let bits = LIMB_BITS[index];
        let carry = (h[index] + (1i64 << (bits - 1))) >> bits;
        h[index] -= carry << bits;

        if index == 9 {
            h[0] += 19 * carry;
        } else {
            h[index + 1] += carry;
        }
    }

    FieldElement(h.map(|limb| limb as i32))
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        FieldElement(array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        FieldElement(array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        FieldElement(self.0.map(|limb| -limb))
    }
}

/// Schoolbook product of two elements.
///
/// All hundred limb products are accumulated into ten `i64` columns, with
/// columns past the top folded back by 19, then carried once.
impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let f = self.0;
        let g = rhs.0;
        let mut h = [0i64; 10];

        for i in 0..10 {
            for j in 0..10 {
                accumulate(&mut h, i + j, mul!(f[i], g[j]) * limb_weight(i, j));
            }
        }

        reduce(h)
    }
}
