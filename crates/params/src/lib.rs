//! Constant values for gfcode
//!
//! The field and code shape are fixed by design; nothing here is a runtime
//! option.

#![no_std]

pub mod code;
pub mod field;
