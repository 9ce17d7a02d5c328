//! Four-lane packed multiplication
//!
//! A `u32` is treated as four independent byte lanes, lane 0 being the least
//! significant byte. Lanes never interact.

use gfcode_internal::endian::{lanes_to_u32, u32_to_lanes};
use gfcode_params::field::PACKED_LANES;

use super::tables::FieldTables;
use crate::error::{validate, Result};

/// Four field elements processed together
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Packed4(pub [u8; PACKED_LANES]);

impl Packed4 {
    /// Unpack a word, lane 0 taken from the least significant byte
    #[inline(always)]
    pub fn from_u32(word: u32) -> Self {
        Self(u32_to_lanes(word))
    }

    /// Pack back into a word, lane 0 becoming the least significant byte
    #[inline(always)]
    pub fn to_u32(self) -> u32 {
        lanes_to_u32(self.0)
    }

    /// The individual lanes
    #[inline(always)]
    pub fn lanes(&self) -> &[u8; PACKED_LANES] {
        &self.0
    }

    /// Lane-wise product using the given tables
    #[inline(always)]
    pub fn mul_with(self, rhs: Self, tables: &FieldTables) -> Self {
        let [a0, a1, a2, a3] = self.0;
        let [b0, b1, b2, b3] = rhs.0;
        Self([
            tables.mul(a0, b0),
            tables.mul(a1, b1),
            tables.mul(a2, b2),
            tables.mul(a3, b3),
        ])
    }

    /// Lane-wise product using the process-wide tables
    #[cfg(feature = "std")]
    #[inline(always)]
    pub fn mul(self, rhs: Self) -> Self {
        self.mul_with(rhs, FieldTables::global())
    }
}

impl From<u32> for Packed4 {
    fn from(word: u32) -> Self {
        Self::from_u32(word)
    }
}

impl From<Packed4> for u32 {
    fn from(packed: Packed4) -> Self {
        packed.to_u32()
    }
}

/// Multiply two packed words lane by lane
#[inline(always)]
pub fn mul_packed4_with(tables: &FieldTables, a: u32, b: u32) -> u32 {
    Packed4::from_u32(a).mul_with(Packed4::from_u32(b), tables).to_u32()
}

/// Lane-wise multiply of two equal-length word slices into `out`
pub fn mul_packed4_slice_with(
    tables: &FieldTables,
    a: &[u32],
    b: &[u32],
    out: &mut [u32],
) -> Result<()> {
    validate::length("packed right operand", b.len(), a.len())?;
    validate::length("packed output", out.len(), a.len())?;

    for ((dst, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *dst = mul_packed4_with(tables, x, y);
    }
    Ok(())
}

/// [`mul_packed4_with`] against the process-wide tables
#[cfg(feature = "std")]
#[inline(always)]
pub fn mul_packed4(a: u32, b: u32) -> u32 {
    mul_packed4_with(FieldTables::global(), a, b)
}

/// [`mul_packed4_slice_with`] against the process-wide tables
#[cfg(feature = "std")]
pub fn mul_packed4_slice(a: &[u32], b: &[u32], out: &mut [u32]) -> Result<()> {
    mul_packed4_slice_with(FieldTables::global(), a, b, out)
}
