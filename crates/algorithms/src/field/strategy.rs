//! Compile-time selection of the multiplication strategy
//!
//! Each strategy is an uninhabited marker type. Code generic over
//! [`MulStrategy`] is monomorphised per strategy, so choosing one costs
//! nothing at run time.

use super::arithmetic::{mul_bitwise, pow};

#[cfg(feature = "std")]
use super::arithmetic::{inv as inv_table, inv_log, mul_log, mul_table};

/// A way of computing GF(2^8) products and inverses.
///
/// Every implementation must agree with [`Bitwise`] on all inputs, including
/// the `inv(0) == 1` convention.
pub trait MulStrategy {
    /// Short name used in benchmark and log output
    const NAME: &'static str;

    /// Product of `a` and `b`
    fn mul(a: u8, b: u8) -> u8;

    /// Inverse of `a`, 1 for 0
    fn inv(a: u8) -> u8;
}

/// Carry-less multiply and reduce; needs no tables
pub enum Bitwise {}

impl MulStrategy for Bitwise {
    const NAME: &'static str = "bitwise";

    #[inline(always)]
    fn mul(a: u8, b: u8) -> u8 {
        mul_bitwise(a, b)
    }

    #[inline]
    fn inv(a: u8) -> u8 {
        if a == 0 {
            return 1;
        }
        // a^254 = a^-1 since the group has order 255
        pow(a, 254)
    }
}

/// Discrete-log/antilog lookup with one conditional reduction
#[cfg(feature = "std")]
pub enum LogTable {}

#[cfg(feature = "std")]
impl MulStrategy for LogTable {
    const NAME: &'static str = "log-table";

    #[inline(always)]
    fn mul(a: u8, b: u8) -> u8 {
        mul_log(a, b)
    }

    #[inline(always)]
    fn inv(a: u8) -> u8 {
        inv_log(a)
    }
}

/// Single lookup into the 256×256 product table
#[cfg(feature = "std")]
pub enum FullTable {}

#[cfg(feature = "std")]
impl MulStrategy for FullTable {
    const NAME: &'static str = "full-table";

    #[inline(always)]
    fn mul(a: u8, b: u8) -> u8 {
        mul_table(a, b)
    }

    #[inline(always)]
    fn inv(a: u8) -> u8 {
        inv_table(a)
    }
}
