//! Known-answer vectors for GF(2^8) arithmetic and the (2,6) code
//!
//! Products follow FIPS 197 §4.2 where one is given there; the codewords
//! were produced with the bitwise reference arithmetic.

/// A single product `a * b = product`
#[derive(Debug, Clone, Copy)]
pub struct MulVector {
    /// Left operand
    pub a: u8,
    /// Right operand
    pub b: u8,
    /// Expected product
    pub product: u8,
}

/// Field multiplication vectors
pub const MUL_VECTORS: &[MulVector] = &[
    MulVector { a: 0x57, b: 0x83, product: 0xC1 },
    MulVector { a: 0x57, b: 0x13, product: 0xFE },
    MulVector { a: 0x80, b: 0x02, product: 0x1B },
    MulVector { a: 0x05, b: 0x05, product: 0x11 },
    MulVector { a: 0x75, b: 0x0D, product: 0x3F },
    MulVector { a: 0x53, b: 0xCA, product: 0x01 },
    MulVector { a: 0xFF, b: 0x00, product: 0x00 },
];

/// Packed 4-lane multiplication vectors `(a, b, product)`
pub const PACKED_VECTORS: &[(u32, u32, u32)] = &[
    (0x1122_3344, 0x5566_7788, 0x72b8_ca6d),
    (0x0101_0101, 0xDEAD_BEEF, 0xDEAD_BEEF),
    (0x0000_0000, 0xFFFF_FFFF, 0x0000_0000),
];

/// An encoding vector: two data bytes and the hex-encoded codeword
#[derive(Debug, Clone, Copy)]
pub struct CodewordVector {
    /// Data symbols `(y0, y1)`
    pub data: [u8; 2],
    /// Six codeword symbols as hex
    pub codeword_hex: &'static str,
}

impl CodewordVector {
    /// Decode the hex codeword into its six symbols
    pub fn codeword(&self) -> [u8; 6] {
        let bytes = hex::decode(self.codeword_hex).expect("vector hex is well formed");
        let mut out = [0u8; 6];
        out.copy_from_slice(&bytes);
        out
    }
}

/// Encoding vectors
pub const CODEWORD_VECTORS: &[CodewordVector] = &[
    CodewordVector { data: [10, 20], codeword_hex: "0a143628726c" },
    CodewordVector { data: [0, 0], codeword_hex: "000000000000" },
    CodewordVector { data: [0xFF, 0x01], codeword_hex: "ff0118e62ad4" },
];

/// Generator powers `(exponent, 3^exponent)`
pub const POWER_VECTORS: &[(u16, u8)] = &[
    (0, 1),
    (2, 5),
    (3, 15),
    (88, 129),
    (205, 203),
    (212, 121),
    (254, 246),
    (255, 1),
    (255 + 88, 129),
];
