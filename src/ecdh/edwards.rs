//! Fixed-base scalar multiplication on the twisted Edwards form of
//! Curve25519.
//!
//! Public keys are computed here rather than with the ladder: `scalar · B`
//! on
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²,    d = −121665 / 121666
//! ```
//!
//! is evaluated with signed 4-bit windows over a small table of multiples
//! of `B`, then mapped to the birationally equivalent Montgomery curve,
//! where only the `u`-coordinate `(1 + y) / (1 − y)` is kept.
//!
//! ## Coordinate systems
//!
//! - [`ExtendedPoint`]: `(X : Y : Z : T)` with `T = XY/Z`, the accumulator.
//! - `CompletedPoint`: `((X : Z), (Y : T))`, the output of every addition
//!   and doubling, converted back immediately.
//! - `ProjectivePoint`: `(X : Y : Z)`, the input of doubling.
//! - `CachedPoint`: `(Y + X, Y − X, Z, 2·d·T)`, the table entries.
//!
//! Table lookups touch all eight entries and negation is applied with a
//! mask, so neither memory access nor control flow depends on the scalar.

use super::field::FieldElement;
use crate::ct::{eq_mask_u8, negative_mask_i8};

/// Affine `x` of the base point, little-endian.
const BASEPOINT_X: [u8; 32] = [
    0x1a, 0xd5, 0x25, 0x8f, 0x60, 0x2d, 0x56, 0xc9, 0xb2, 0xa7, 0x25, 0x95, 0x60, 0xc7, 0x2c, 0x69,
    0x5c, 0xdc, 0xd6, 0xfd, 0x31, 0xe2, 0xa4, 0xc0, 0xfe, 0x53, 0x6e, 0xcd, 0xd3, 0x36, 0x69, 0x21,
];

/// Affine `y = 4/5` of the base point, little-endian.
const BASEPOINT_Y: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
];

/// `2·d`, with `d = −121665 / 121666`.
const D2: FieldElement = FieldElement([
    -21827239, -5839606, -30745221, 13898782, 229458, 15978800, -12551817, -6495438, 29715968,
    9444199,
]);

/// A curve point in extended coordinates.
///
/// Points are only ever produced by [`scalar_mul_base`], so they are always
/// on the curve. They are never compared; the only way out is
/// [`ExtendedPoint::to_montgomery_u`].
#[derive(Clone, Copy)]
pub struct ExtendedPoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
    t: FieldElement,
}

struct CompletedPoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
    t: FieldElement,
}

struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

#[derive(Clone, Copy)]
struct CachedPoint {
    y_plus_x: FieldElement,
    y_minus_x: FieldElement,
    z: FieldElement,
    t2d: FieldElement,
}

/// Cached multiples `1·B ..= 8·B`.
struct BasepointTable([CachedPoint; 8]);

impl ExtendedPoint {
    /// The neutral element `(0, 1)`.
    pub const IDENTITY: Self = ExtendedPoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// The standard base point `B`, whose Montgomery `u` is 9.
    fn basepoint() -> Self {
        let x = FieldElement::from_bytes(&BASEPOINT_X);
        let y = FieldElement::from_bytes(&BASEPOINT_Y);

        ExtendedPoint {
            x,
            y,
            z: FieldElement::ONE,
            t: x * y,
        }
    }

    fn to_cached(self) -> CachedPoint {
        CachedPoint {
            y_plus_x: self.y + self.x,
            y_minus_x: self.y - self.x,
            z: self.z,
            t2d: self.t * D2,
        }
    }

    fn to_projective(self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// `self + other`.
    fn add_cached(&self, other: &CachedPoint) -> CompletedPoint {
        let a = (self.y - self.x) * other.y_minus_x;
        let b = (self.y + self.x) * other.y_plus_x;
        let c = other.t2d * self.t;
        let zz = self.z * other.z;
        let d = zz + zz;

        CompletedPoint {
            x: b - a,
            y: b + a,
            z: d + c,
            t: d - c,
        }
    }

    /// `16 · self`, by four doublings.
    fn mul_by_16(self) -> Self {
        let mut point = self.to_projective();

        for _ in 0..3 {
            point = point.double().to_projective();
        }

        point.double().to_extended()
    }

    /// Maps the point to the Montgomery `u`-coordinate, encoded in 32
    /// bytes.
    ///
    /// `u = (Z + Y) / (Z − Y)`. The identity has `Z = Y` and therefore maps
    /// to `u = 0`, since inverting zero yields zero.
    pub fn to_montgomery_u(&self) -> [u8; 32] {
        let numerator = self.z + self.y;
        let denominator = self.z - self.y;

        (numerator * denominator.invert()).to_bytes()
    }
}

impl CompletedPoint {
    fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint {
            x: self.x * self.t,
            y: self.y * self.z,
            z: self.z * self.t,
            t: self.x * self.y,
        }
    }

    fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x * self.t,
            y: self.y * self.z,
            z: self.z * self.t,
        }
    }
}

impl ProjectivePoint {
    /// `2 · self`.
    fn double(&self) -> CompletedPoint {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();
        let sum = self.x + self.y;

        let y = yy + xx;
        let z = yy - xx;

        CompletedPoint {
            x: sum.square() - y,
            y,
            z,
            t: (zz + zz) - z,
        }
    }
}

impl CachedPoint {
    const IDENTITY: Self = CachedPoint {
        y_plus_x: FieldElement::ONE,
        y_minus_x: FieldElement::ONE,
        z: FieldElement::ONE,
        t2d: FieldElement::ZERO,
    };

    fn conditional_assign(&mut self, other: &Self, choice: u32) {
        self.y_plus_x.conditional_assign(&other.y_plus_x, choice);
        self.y_minus_x.conditional_assign(&other.y_minus_x, choice);
        self.z.conditional_assign(&other.z, choice);
        self.t2d.conditional_assign(&other.t2d, choice);
    }

    /// Negating `(x, y)` to `(−x, y)` swaps `Y + X` with `Y − X` and flips
    /// the sign of `T`.
    fn negate(&self) -> Self {
        CachedPoint {
            y_plus_x: self.y_minus_x,
            y_minus_x: self.y_plus_x,
            z: self.z,
            t2d: -self.t2d,
        }
    }
}

impl BasepointTable {
    fn new() -> Self {
        let base = ExtendedPoint::basepoint();
        let base_cached = base.to_cached();

        let mut entries = [base_cached; 8];
        let mut multiple = base;

        for entry in entries.iter_mut().skip(1) {
            multiple = multiple.add_cached(&base_cached).to_extended();
            *entry = multiple.to_cached();
        }

        BasepointTable(entries)
    }

    /// Returns `digit · B` for `digit ∈ [−8, 8]`.
    ///
    /// Every entry is read, and the wanted one is kept with a mask.
    fn select(&self, digit: i8) -> CachedPoint {
        let negative = negative_mask_i8(digit);
        let sign = -(negative as i8);
        let magnitude = ((digit ^ sign) - sign) as u8;

        let mut selected = CachedPoint::IDENTITY;
        for (index, entry) in self.0.iter().enumerate() {
            selected.conditional_assign(entry, eq_mask_u8(magnitude, index as u8 + 1));
        }

        let negated = selected.negate();
        selected.conditional_assign(&negated, negative);

        selected
    }
}

/// Writes `scalar` as 64 signed digits `eᵢ ∈ [−8, 8]` with
/// `scalar = Σ eᵢ·16ⁱ`.
///
/// Bit 255 must be clear; otherwise the last digit could reach 16.
fn to_radix_16(scalar: &[u8; 32]) -> [i8; 64] {
    let mut digits = [0i8; 64];

    for (i, &byte) in scalar.iter().enumerate() {
        digits[2 * i] = (byte & 0x0f) as i8;
        digits[2 * i + 1] = (byte >> 4) as i8;
    }

    let mut carry = 0i8;
    for digit in digits.iter_mut().take(63) {
        *digit += carry;
        carry = (*digit + 8) >> 4;
        *digit -= carry << 4;
    }
    digits[63] += carry;

    digits
}

/// Computes `scalar · B`.
///
/// The scalar is used as given; callers clamp it first. Bit 255 is
/// ignored, which never matters for a clamped scalar.
///
/// Runs 256 doublings and 64 table additions regardless of the scalar.
pub fn scalar_mul_base(scalar: &[u8; 32]) -> ExtendedPoint {
    let mut masked = *scalar;
    masked[31] &= 0x7f;

    let digits = to_radix_16(&masked);
    let table = BasepointTable::new();

    let mut acc = ExtendedPoint::IDENTITY;
    for &digit in digits.iter().rev() {
        acc = acc.mul_by_16();
        acc = acc.add_cached(&table.select(digit)).to_extended();
    }

    acc
}
