//! Scalar GF(2^8) operations
//!
//! [`mul_bitwise`] is the reference definition of field multiplication. The
//! table-driven variants in this module must agree with it on all 65536
//! operand pairs.

use gfcode_params::field::{GROUP_ORDER, POLYNOMIAL, POLYNOMIAL_BITS};

use super::tables::FieldTables;
use crate::error::{validate, Result};

/// Field addition, the bitwise exclusive-or of the operands
#[inline(always)]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Field subtraction. Identical to [`add`] in characteristic 2.
#[inline(always)]
pub fn sub(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiply two elements by carry-less multiplication followed by reduction
/// modulo x⁸ + x⁴ + x³ + x + 1
pub fn mul_bitwise(a: u8, b: u8) -> u8 {
    let mut product: u16 = 0;
    for bit in 0..8 {
        if (b >> bit) & 1 == 1 {
            product ^= (a as u16) << bit;
        }
    }

    // Cancel the top bit until the product fits in a byte
    let mut len = u16::BITS - product.leading_zeros();
    while len > 8 {
        product ^= POLYNOMIAL << (len - POLYNOMIAL_BITS);
        len = u16::BITS - product.leading_zeros();
    }
    product as u8
}

/// Raise `base` to `exponent` by repeated bitwise multiplication.
///
/// Linear in `exponent`; only used to bootstrap the lookup tables.
pub fn pow(base: u8, exponent: u16) -> u8 {
    let mut acc = 1u8;
    for _ in 0..exponent {
        acc = mul_bitwise(acc, base);
    }
    acc
}

/// Multiply through the discrete-log and antilog tables
#[inline(always)]
pub fn mul_log_with(tables: &FieldTables, a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let mut sum = tables.log(a) as usize + tables.log(b) as usize;
    if sum >= GROUP_ORDER {
        sum -= GROUP_ORDER;
    }
    tables.exp(sum)
}

/// Multiply with a single lookup into the full product table
#[inline(always)]
pub fn mul_table_with(tables: &FieldTables, a: u8, b: u8) -> u8 {
    tables.mul(a, b)
}

/// Multiplicative inverse through the log tables.
///
/// Returns 1 for 0. That value is a convention, not an inverse.
#[inline]
pub fn inv_log_with(tables: &FieldTables, a: u8) -> u8 {
    let log = tables.log(a) as usize;
    if log == 0 {
        return 1;
    }
    tables.exp(GROUP_ORDER - log)
}

/// Multiplicative inverse from the precomputed inverse table.
///
/// Returns 1 for 0, same as [`inv_log_with`].
#[inline(always)]
pub fn inv_with(tables: &FieldTables, a: u8) -> u8 {
    tables.inv(a)
}

/// Field division, rejecting a zero divisor
#[inline]
pub fn div_with(tables: &FieldTables, a: u8, b: u8) -> Result<u8> {
    validate::nonzero(b, "divisor")?;
    Ok(tables.mul(a, tables.inv(b)))
}

#[cfg(feature = "std")]
mod global {
    use super::*;

    /// [`mul_log_with`] against the process-wide tables
    #[inline(always)]
    pub fn mul_log(a: u8, b: u8) -> u8 {
        mul_log_with(FieldTables::global(), a, b)
    }

    /// [`mul_table_with`] against the process-wide tables
    #[inline(always)]
    pub fn mul_table(a: u8, b: u8) -> u8 {
        mul_table_with(FieldTables::global(), a, b)
    }

    /// [`inv_log_with`] against the process-wide tables
    #[inline]
    pub fn inv_log(a: u8) -> u8 {
        inv_log_with(FieldTables::global(), a)
    }

    /// [`inv_with`] against the process-wide tables
    #[inline(always)]
    pub fn inv(a: u8) -> u8 {
        inv_with(FieldTables::global(), a)
    }

    /// [`div_with`] against the process-wide tables
    #[inline]
    pub fn div(a: u8, b: u8) -> Result<u8> {
        div_with(FieldTables::global(), a, b)
    }
}

#[cfg(feature = "std")]
pub use global::{div, inv, inv_log, mul_log, mul_table};
