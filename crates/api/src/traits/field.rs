//! Trait definition for finite field elements

use core::ops::{Add, Mul, Sub};

/// An element of a finite field.
///
/// Addition and multiplication are total. Inversion is only defined for
/// nonzero elements, so it is exposed as an `Option`.
pub trait FieldElement:
    Copy + Eq + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Returns true for the additive identity
    fn is_zero(self) -> bool;

    /// Multiplicative inverse, `None` for zero
    fn try_inverse(self) -> Option<Self>;
}
