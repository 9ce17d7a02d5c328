//! Constants for the systematic (2,6) erasure code

/// Number of data symbols
pub const DATA_SYMBOLS: usize = 2;

/// Number of codeword symbols
pub const CODEWORD_SYMBOLS: usize = 6;

/// Number of parity symbols appended after the data symbols
pub const PARITY_SYMBOLS: usize = CODEWORD_SYMBOLS - DATA_SYMBOLS;
