//! Internal utilities for gfcode
//!
//! Not part of the public API; used by `gfcode-algorithms`.

#![no_std]

pub mod endian;
