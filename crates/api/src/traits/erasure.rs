//! Trait definition for fixed-shape erasure codes
//!
//! An erasure code maps `DATA_SYMBOLS` data symbols onto `CODEWORD_SYMBOLS`
//! codeword symbols such that any `DATA_SYMBOLS` surviving symbols recover
//! the data.

use crate::Result;
use zeroize::Zeroize;

/// Trait for an erasure code with a shape fixed at compile time.
pub trait ErasureCode {
    /// Number of data symbols (k)
    const DATA_SYMBOLS: usize;

    /// Number of codeword symbols (n)
    const CODEWORD_SYMBOLS: usize;

    /// Data block type. Zeroized on request since it carries caller data.
    type Data: Clone + Zeroize;

    /// Codeword type. Zeroized on request since it carries caller data.
    type Codeword: Clone + Zeroize;

    /// Marks which codeword positions were received.
    type Mask: Copy;

    /// Returns the code name.
    fn name() -> &'static str;

    /// Encode a data block into a codeword.
    fn encode(data: &Self::Data) -> Self::Codeword;

    /// Recover the data block from the positions marked present in `mask`.
    ///
    /// Fails when fewer than `DATA_SYMBOLS` positions are marked.
    fn decode(codeword: &Self::Codeword, mask: &Self::Mask) -> Result<Self::Data>;
}
