//! Arithmetic over GF(2^8)
//!
//! The field is defined by the primitive polynomial x⁸ + x⁴ + x³ + x + 1
//! (0x11B) with generator 3. Three multiplication strategies are provided:
//!
//! - [`mul_bitwise`]: carry-less multiply and reduce, the reference definition
//! - [`mul_log`]: discrete-log/antilog lookup, addition of exponents mod 255
//! - [`mul_table`]: one lookup in a 256×256 product table
//!
//! plus a 4-lane packed variant ([`mul_packed4`]) built on the product table.
//! The `*_with` forms take an explicit [`FieldTables`]; the plain forms use
//! the process-wide tables built on first use.

pub mod arithmetic;
pub mod packed;
pub mod strategy;
pub mod tables;

#[cfg(feature = "std")]
pub mod element;

pub use arithmetic::{
    add, div_with, inv_log_with, inv_with, mul_bitwise, mul_log_with, mul_table_with, pow, sub,
};
pub use packed::{mul_packed4_slice_with, mul_packed4_with, Packed4};
pub use strategy::{Bitwise, MulStrategy};
pub use tables::FieldTables;

#[cfg(feature = "std")]
pub use arithmetic::{div, inv, inv_log, mul_log, mul_table};
#[cfg(feature = "std")]
pub use element::Gf256;
#[cfg(feature = "std")]
pub use packed::{mul_packed4, mul_packed4_slice};
#[cfg(feature = "std")]
pub use strategy::{FullTable, LogTable};
