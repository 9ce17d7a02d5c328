//! Public API traits and types for the gfcode library
//!
//! This crate provides the public API surface for the gfcode workspace: the
//! error type shared by every crate and the trait definitions that the
//! arithmetic and coding implementations satisfy.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{ErasureCode, FieldElement};

// Re-export trait modules for direct access
pub use traits::{erasure, field};
