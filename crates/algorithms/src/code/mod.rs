//! Erasure coding over GF(2^8)
//!
//! Holds the systematic (2,6) code: two data symbols become six codeword
//! symbols, and any two surviving symbols recover the data.

pub mod erasure;

pub use erasure::{decode, encode, Codeword, ErasureMask, ReedSolomon26};
