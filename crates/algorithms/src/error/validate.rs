//! Validation utilities for gfcode primitives

use gfcode_params::code::CODEWORD_SYMBOLS;

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that two buffers processed in lockstep have the same length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that `index` addresses one of the six codeword symbols
#[inline(always)]
pub fn position(index: usize) -> Result<()> {
    parameter(index < CODEWORD_SYMBOLS, "position", "codeword position must be below 6")
}

/// Validate that a field element used as a divisor is nonzero
#[inline(always)]
pub fn nonzero(value: u8, name: &'static str) -> Result<()> {
    parameter(value != 0, name, "division by zero is undefined in GF(2^8)")
}
