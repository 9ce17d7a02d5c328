//! Precomputed GF(2^8) lookup tables
//!
//! All four tables are derived from the generator and reduction polynomial in
//! `gfcode-params`, using only [`pow`] and [`mul_bitwise`]. The log/antilog
//! pair and the full product table are built independently of each other.
//!
//! The process-wide instance is built on first use behind a one-time guard
//! and is read-only afterwards.

use gfcode_params::field::{FIELD_SIZE, GENERATOR, GROUP_ORDER, POLYNOMIAL};

use super::arithmetic::{mul_bitwise, mul_log_with, pow};
use crate::error::{Error, Result};

#[cfg(feature = "std")]
use once_cell::sync::Lazy;

#[cfg(feature = "std")]
static GLOBAL_TABLES: Lazy<FieldTables> = Lazy::new(|| {
    let tables = FieldTables::new();
    tracing::debug!(
        polynomial = POLYNOMIAL,
        generator = GENERATOR,
        "built GF(2^8) lookup tables"
    );
    tables
});

/// Discrete-log, antilog, product and inverse tables for GF(2^8)
#[derive(Clone)]
pub struct FieldTables {
    /// `log[3^i] = i`; `log[0]` is an unused sentinel of 0
    log: [u8; FIELD_SIZE],
    /// `exp[i] = 3^i` for `i` in `0..255`
    exp: [u8; GROUP_ORDER],
    /// `mul[a][b] = a * b`
    mul: [[u8; FIELD_SIZE]; FIELD_SIZE],
    /// `inv[a] = a⁻¹`; `inv[0]` is 1 by convention
    inv: [u8; FIELD_SIZE],
}

impl FieldTables {
    /// Build every table from scratch.
    ///
    /// Deterministic; building twice yields identical tables.
    pub fn new() -> Self {
        let (log, exp) = build_log_tables();
        let mul = build_mul_table();
        let inv = build_inv_table(&log, &exp);
        Self { log, exp, mul, inv }
    }

    /// Process-wide tables, built on first call
    #[cfg(feature = "std")]
    #[inline(always)]
    pub fn global() -> &'static FieldTables {
        &GLOBAL_TABLES
    }

    /// Discrete log of `a` to base 3. Meaningless for 0.
    #[inline(always)]
    pub fn log(&self, a: u8) -> u8 {
        self.log[a as usize]
    }

    /// `3^i` for `i` in `0..255`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 255`.
    #[inline(always)]
    pub fn exp(&self, i: usize) -> u8 {
        self.exp[i]
    }

    /// Product of `a` and `b`
    #[inline(always)]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        self.mul[a as usize][b as usize]
    }

    /// Inverse of `a`, 1 for 0
    #[inline(always)]
    pub fn inv(&self, a: u8) -> u8 {
        self.inv[a as usize]
    }

    /// The full discrete-log table
    pub fn log_table(&self) -> &[u8; FIELD_SIZE] {
        &self.log
    }

    /// The full antilog table
    pub fn exp_table(&self) -> &[u8; GROUP_ORDER] {
        &self.exp
    }

    /// Product row for a fixed left operand
    pub fn mul_row(&self, a: u8) -> &[u8; FIELD_SIZE] {
        &self.mul[a as usize]
    }

    /// Cross-check every table against the bitwise reference.
    ///
    /// Returns the first disagreement found.
    pub fn verify(&self) -> Result<()> {
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                let expected = mul_bitwise(a, b);
                if self.mul(a, b) != expected {
                    return Err(Error::TableMismatch { table: "mul", a, b });
                }
                if mul_log_with(self, a, b) != expected {
                    return Err(Error::TableMismatch { table: "log", a, b });
                }
            }
        }

        if self.inv(0) != 1 {
            return Err(Error::TableMismatch { table: "inv", a: 0, b: 0 });
        }
        for a in 1..=u8::MAX {
            if mul_bitwise(a, self.inv(a)) != 1 {
                return Err(Error::TableMismatch { table: "inv", a, b: 0 });
            }
        }
        Ok(())
    }
}

impl Default for FieldTables {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FieldTables {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldTables")
            .field("polynomial", &POLYNOMIAL)
            .field("generator", &GENERATOR)
            .finish_non_exhaustive()
    }
}

fn build_log_tables() -> ([u8; FIELD_SIZE], [u8; GROUP_ORDER]) {
    let mut log = [0u8; FIELD_SIZE];
    let mut exp = [0u8; GROUP_ORDER];
    for i in 0..GROUP_ORDER {
        let value = pow(GENERATOR, i as u16);
        exp[i] = value;
        log[value as usize] = i as u8;
    }
    (log, exp)
}

fn build_mul_table() -> [[u8; FIELD_SIZE]; FIELD_SIZE] {
    let mut mul = [[0u8; FIELD_SIZE]; FIELD_SIZE];
    for (a, row) in mul.iter_mut().enumerate() {
        for (b, entry) in row.iter_mut().enumerate() {
            *entry = mul_bitwise(a as u8, b as u8);
        }
    }
    mul
}

fn build_inv_table(log: &[u8; FIELD_SIZE], exp: &[u8; GROUP_ORDER]) -> [u8; FIELD_SIZE] {
    let mut inv = [0u8; FIELD_SIZE];
    for (entry, &l) in inv.iter_mut().zip(log.iter()) {
        // log 0 covers both a = 1 and the a = 0 sentinel
        *entry = if l == 0 { 1 } else { exp[GROUP_ORDER - l as usize] };
    }
    inv
}
