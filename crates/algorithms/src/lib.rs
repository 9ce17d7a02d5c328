//! GF(2^8) arithmetic and a systematic (2,6) erasure code
//!
//! This crate provides the arithmetic engine of the gfcode library:
//!
//! - [`field`]: lookup tables, three interchangeable multiplication
//!   strategies, inversion, a 4-lane packed multiply and the [`Gf256`]
//!   element type
//! - [`code`]: the (2,6) erasure code built on that arithmetic
//!
//! Tables are immutable once built. The process-wide instance is created on
//! first use behind a one-time guard (`std` feature); callers that need
//! explicit control can build a [`FieldTables`] and use the `*_with`
//! functions instead.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Field arithmetic
pub mod field;
pub use field::{
    add, mul_bitwise, mul_log_with, mul_packed4_with, mul_table_with, pow, sub, Bitwise,
    FieldTables, MulStrategy, Packed4,
};

#[cfg(feature = "std")]
pub use field::{
    div, inv, inv_log, mul_log, mul_packed4, mul_packed4_slice, mul_table, FullTable, Gf256,
    LogTable,
};

// Erasure coding (needs the process-wide tables)
#[cfg(feature = "std")]
pub mod code;
#[cfg(feature = "std")]
pub use code::{Codeword, ErasureMask, ReedSolomon26};
