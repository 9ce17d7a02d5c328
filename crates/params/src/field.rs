//! Constants for GF(2^8) arithmetic

/// Reduction polynomial x^8 + x^4 + x^3 + x + 1
pub const POLYNOMIAL: u16 = 0x11B;

/// Bit length of [`POLYNOMIAL`]
pub const POLYNOMIAL_BITS: u32 = 9;

/// Generator of the multiplicative group used to build the log tables
pub const GENERATOR: u8 = 3;

/// Number of field elements
pub const FIELD_SIZE: usize = 256;

/// Order of the multiplicative group (number of nonzero elements)
pub const GROUP_ORDER: usize = 255;

/// Number of byte lanes in a packed word
pub const PACKED_LANES: usize = 4;
