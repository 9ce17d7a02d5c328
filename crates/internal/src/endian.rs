//! Endianness utility functions for lane packing

use byteorder::{ByteOrder, LittleEndian};

/// Split a u32 into its four byte lanes, lane 0 being the least significant byte
#[inline(always)]
pub fn u32_to_lanes(value: u32) -> [u8; 4] {
    let mut lanes = [0u8; 4];
    LittleEndian::write_u32(&mut lanes, value);
    lanes
}

/// Reassemble four byte lanes into a u32, lane 0 becoming the least significant byte
#[inline(always)]
pub fn lanes_to_u32(lanes: [u8; 4]) -> u32 {
    LittleEndian::read_u32(&lanes)
}
