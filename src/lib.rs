//! # gfcode
//!
//! Arithmetic over GF(2^8) and a systematic (2,6) erasure code.
//!
//! ## Usage
//!
//! ```rust
//! let codeword = gfcode::encode(10, 20);
//! assert_eq!(codeword, [10, 20, 0x36, 0x28, 0x72, 0x6c]);
//!
//! // Any two known positions recover the data
//! let present = [false, false, true, false, false, true];
//! assert_eq!(gfcode::decode(codeword, present).unwrap(), [10, 20]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): process-wide lookup tables built on first use
//! - `serde`: serialization for codewords, masks and field elements
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gfcode-api`]: Error type and public traits
//! - [`gfcode-params`]: Field and code constants
//! - [`gfcode-algorithms`]: Field arithmetic and the erasure code

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use gfcode_algorithms as algorithms;
pub use gfcode_api as api;
pub use gfcode_internal as internal;
pub use gfcode_params as params;

pub use gfcode_algorithms::{add, mul_bitwise, pow, sub};

#[cfg(feature = "std")]
pub use gfcode_algorithms::{inv, inv_log, mul_log, mul_packed4, mul_table};

#[cfg(feature = "std")]
use gfcode_algorithms::code::{self, Codeword, ErasureMask};
#[cfg(feature = "std")]
use gfcode_params::code::{CODEWORD_SYMBOLS, DATA_SYMBOLS};

/// Encode two data symbols into six codeword symbols
#[cfg(feature = "std")]
pub fn encode(y0: u8, y1: u8) -> [u8; CODEWORD_SYMBOLS] {
    code::encode(y0, y1).0
}

/// Recover the two data symbols from a codeword and its received positions.
///
/// Fails with [`api::Error::InsufficientSymbols`] when fewer than two
/// positions are marked present.
#[cfg(feature = "std")]
pub fn decode(
    codeword: [u8; CODEWORD_SYMBOLS],
    present: [bool; CODEWORD_SYMBOLS],
) -> api::Result<[u8; DATA_SYMBOLS]> {
    gfcode_algorithms::error::to_core_result(
        code::decode(&Codeword(codeword), &ErasureMask(present)),
        "decode",
    )
}

/// Common imports for gfcode users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{ErasureCode, FieldElement};

    pub use crate::algorithms::{Bitwise, FieldTables, MulStrategy, Packed4};

    #[cfg(feature = "std")]
    pub use crate::algorithms::{
        Codeword, ErasureMask, FullTable, Gf256, LogTable, ReedSolomon26,
    };
}
