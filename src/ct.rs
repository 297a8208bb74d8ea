//! Constant-time comparison helpers.
//!
//! Everything here folds over the full input before producing a result,
//! so the running time depends only on input lengths.

/// Equality that does not stop at the first differing byte.
///
/// Implementations must visit every byte of both operands and may only
/// branch on public lengths.
pub trait ConstantTimeEq {
    /// Returns `true` if `self == other`.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8] {
    /// Slices of different lengths compare unequal immediately; lengths are
    /// public.
    fn ct_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let diff = self
            .iter()
            .zip(other)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));

        // Read the accumulator through `black_box` so the fold is not
        // rewritten into an early-exit comparison.
        std::hint::black_box(diff) == 0
    }
}

impl ConstantTimeEq for [u8; 32] {
    #[inline]
    fn ct_eq(&self, other: &Self) -> bool {
        self[..].ct_eq(&other[..])
    }
}

/// Returns `1` if `a == b` and `0` otherwise, without branching.
#[inline(always)]
pub(crate) fn eq_mask_u8(a: u8, b: u8) -> u32 {
    let x = u32::from(a ^ b);
    x.wrapping_sub(1) >> 31
}

/// Returns `1` if `value` is negative and `0` otherwise, without branching.
#[inline(always)]
pub(crate) fn negative_mask_i8(value: i8) -> u32 {
    u32::from((value as u8) >> 7)
}
