//! Systematic (2,6) Reed-Solomon style erasure code
//!
//! Position `x` of a codeword holds `y0·(x ⊕ 1) ⊕ y1·x`, the evaluation at
//! the field element `x` of a degree-1 polynomial through `(0, y0)` and
//! `(1, y1)`. Positions 0 and 1 therefore carry the data unchanged and
//! positions 2..6 are parity.
//!
//! Decoding picks the two lowest-indexed known positions `x0 < x1` with
//! values `v0`, `v1` and solves the 2×2 system by Cramer's rule:
//!
//! ```text
//! y0 = (v0·x1 ⊕ v1·x0)             / (x0 ⊕ x1)
//! y1 = (v0·(x1 ⊕ 1) ⊕ v1·(x0 ⊕ 1)) / (x0 ⊕ x1)
//! ```

use core::marker::PhantomData;

use gfcode_api::{ErasureCode, Error as CoreError, Result as CoreResult};
use gfcode_params::code::{CODEWORD_SYMBOLS, DATA_SYMBOLS, PARITY_SYMBOLS};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};
use crate::field::{FullTable, MulStrategy};

/// Six codeword symbols, indexed by evaluation point
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Codeword(pub [u8; CODEWORD_SYMBOLS]);

impl Codeword {
    /// All symbols in position order
    #[inline]
    pub fn as_bytes(&self) -> &[u8; CODEWORD_SYMBOLS] {
        &self.0
    }

    /// Symbol at `position`, `None` when out of range
    #[inline]
    pub fn symbol(&self, position: usize) -> Option<u8> {
        self.0.get(position).copied()
    }

    /// The data symbols, read straight from the systematic positions
    #[inline]
    pub fn systematic(&self) -> [u8; DATA_SYMBOLS] {
        [self.0[0], self.0[1]]
    }

    /// The parity symbols at positions 2..6
    #[inline]
    pub fn parity(&self) -> [u8; PARITY_SYMBOLS] {
        core::array::from_fn(|i| self.0[DATA_SYMBOLS + i])
    }
}

impl From<[u8; CODEWORD_SYMBOLS]> for Codeword {
    fn from(symbols: [u8; CODEWORD_SYMBOLS]) -> Self {
        Codeword(symbols)
    }
}

impl AsRef<[u8]> for Codeword {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Which codeword positions were received (`true`) or erased (`false`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErasureMask(pub [bool; CODEWORD_SYMBOLS]);

impl ErasureMask {
    /// Mask with every position known
    pub const ALL: ErasureMask = ErasureMask([true; CODEWORD_SYMBOLS]);

    /// Mask with every position erased
    pub const NONE: ErasureMask = ErasureMask([false; CODEWORD_SYMBOLS]);

    /// Build a mask with exactly the listed positions known
    pub fn from_positions(positions: &[usize]) -> Result<Self> {
        let mut present = [false; CODEWORD_SYMBOLS];
        for &position in positions {
            validate::position(position)?;
            present[position] = true;
        }
        Ok(ErasureMask(present))
    }

    /// Whether `position` is known; out-of-range positions are not
    #[inline]
    pub fn is_present(&self, position: usize) -> bool {
        self.0.get(position).copied().unwrap_or(false)
    }

    /// Number of known positions
    #[inline]
    pub fn present_count(&self) -> usize {
        self.0.iter().filter(|&&p| p).count()
    }

    /// The two lowest-indexed known positions, in increasing order
    pub fn first_two(&self) -> Result<(usize, usize)> {
        let mut known = self.0.iter().enumerate().filter(|&(_, &p)| p).map(|(i, _)| i);
        match (known.next(), known.next()) {
            (Some(x0), Some(x1)) => Ok((x0, x1)),
            _ => Err(Error::InsufficientSymbols {
                required: DATA_SYMBOLS,
                available: self.present_count(),
            }),
        }
    }
}

impl From<[bool; CODEWORD_SYMBOLS]> for ErasureMask {
    fn from(present: [bool; CODEWORD_SYMBOLS]) -> Self {
        ErasureMask(present)
    }
}

/// The (2,6) code, generic over the multiplication strategy.
///
/// All strategies produce identical codewords; the parameter only picks the
/// arithmetic used to get there.
pub struct ReedSolomon26<M: MulStrategy = FullTable> {
    _strategy: PhantomData<M>,
}

impl<M: MulStrategy> ReedSolomon26<M> {
    /// Codeword symbol at evaluation point `x`
    #[inline(always)]
    pub fn evaluate(y0: u8, y1: u8, x: u8) -> u8 {
        M::mul(y0, x ^ 1) ^ M::mul(y1, x)
    }

    /// Encode two data symbols into a six-symbol codeword
    pub fn encode(y0: u8, y1: u8) -> Codeword {
        let mut symbols = [0u8; CODEWORD_SYMBOLS];
        for (x, symbol) in symbols.iter_mut().enumerate() {
            *symbol = Self::evaluate(y0, y1, x as u8);
        }
        Codeword(symbols)
    }

    /// Recover the data symbols from the first two known positions.
    ///
    /// Positions beyond the first two known ones are ignored, so a corrupted
    /// but present symbol there goes unnoticed.
    pub fn decode(codeword: &Codeword, mask: &ErasureMask) -> Result<[u8; DATA_SYMBOLS]> {
        let (i0, i1) = mask.first_two().map_err(|e| {
            tracing::warn!(
                code = Self::NAME,
                present = mask.present_count(),
                "rejected erasure decode with too few known symbols"
            );
            e
        })?;

        let (x0, x1) = (i0 as u8, i1 as u8);
        let (v0, v1) = (codeword.0[i0], codeword.0[i1]);

        // x0 != x1, so dx is nonzero and has a true inverse
        let dx_inv = M::inv(x0 ^ x1);

        let sum0 = M::mul(v0, x1) ^ M::mul(v1, x0);
        let sum1 = M::mul(v0, x1 ^ 1) ^ M::mul(v1, x0 ^ 1);

        Ok([M::mul(sum0, dx_inv), M::mul(sum1, dx_inv)])
    }

    const NAME: &'static str = "RS(2,6)";
}

impl<M: MulStrategy> ErasureCode for ReedSolomon26<M> {
    const DATA_SYMBOLS: usize = DATA_SYMBOLS;
    const CODEWORD_SYMBOLS: usize = CODEWORD_SYMBOLS;

    type Data = [u8; DATA_SYMBOLS];
    type Codeword = Codeword;
    type Mask = ErasureMask;

    fn name() -> &'static str {
        Self::NAME
    }

    fn encode(data: &Self::Data) -> Self::Codeword {
        Self::encode(data[0], data[1])
    }

    fn decode(codeword: &Self::Codeword, mask: &Self::Mask) -> CoreResult<Self::Data> {
        Self::decode(codeword, mask).map_err(CoreError::from)
    }
}

/// Encode with the full-table strategy
#[inline]
pub fn encode(y0: u8, y1: u8) -> Codeword {
    ReedSolomon26::<FullTable>::encode(y0, y1)
}

/// Decode with the full-table strategy
#[inline]
pub fn decode(codeword: &Codeword, mask: &ErasureMask) -> Result<[u8; DATA_SYMBOLS]> {
    ReedSolomon26::<FullTable>::decode(codeword, mask)
}
