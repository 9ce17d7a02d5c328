//! GF(2^8) element newtype backed by the process-wide tables

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use gfcode_api::FieldElement;

use super::arithmetic::{add, inv, mul_table};

/// An element of GF(2^8) under the polynomial x⁸ + x⁴ + x³ + x + 1
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gf256(pub u8);

impl Gf256 {
    /// The additive identity
    pub const ZERO: Gf256 = Gf256(0);

    /// The multiplicative identity
    pub const ONE: Gf256 = Gf256(1);

    /// Returns the underlying byte value
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Multiplicative inverse, `None` for zero
    #[inline]
    pub fn inverse(self) -> Option<Gf256> {
        if self.0 == 0 {
            None
        } else {
            Some(Gf256(inv(self.0)))
        }
    }

    /// Square-and-multiply exponentiation
    pub fn pow(self, mut exponent: u32) -> Gf256 {
        let mut base = self;
        let mut acc = Gf256::ONE;
        while exponent != 0 {
            if exponent & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exponent >>= 1;
        }
        acc
    }
}

/// Addition in GF(2^8) is XOR.
impl Add for Gf256 {
    type Output = Gf256;

    #[inline]
    fn add(self, rhs: Gf256) -> Gf256 {
        Gf256(add(self.0, rhs.0))
    }
}

impl AddAssign for Gf256 {
    #[inline]
    fn add_assign(&mut self, rhs: Gf256) {
        *self = *self + rhs;
    }
}

/// Subtraction is the same as addition.
#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Gf256 {
    type Output = Gf256;

    #[inline]
    fn sub(self, rhs: Gf256) -> Gf256 {
        Gf256(add(self.0, rhs.0))
    }
}

impl SubAssign for Gf256 {
    #[inline]
    fn sub_assign(&mut self, rhs: Gf256) {
        *self = *self - rhs;
    }
}

impl Mul for Gf256 {
    type Output = Gf256;

    #[inline]
    fn mul(self, rhs: Gf256) -> Gf256 {
        Gf256(mul_table(self.0, rhs.0))
    }
}

impl MulAssign for Gf256 {
    #[inline]
    fn mul_assign(&mut self, rhs: Gf256) {
        *self = *self * rhs;
    }
}

impl From<u8> for Gf256 {
    #[inline]
    fn from(val: u8) -> Self {
        Gf256(val)
    }
}

impl From<Gf256> for u8 {
    #[inline]
    fn from(e: Gf256) -> u8 {
        e.0
    }
}

impl FieldElement for Gf256 {
    const ZERO: Self = Gf256::ZERO;
    const ONE: Self = Gf256::ONE;

    #[inline]
    fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    fn try_inverse(self) -> Option<Self> {
        self.inverse()
    }
}
