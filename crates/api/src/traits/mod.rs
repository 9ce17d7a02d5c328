//! Trait definitions for field arithmetic and erasure coding

pub mod erasure;
pub mod field;

pub use erasure::ErasureCode;
pub use field::FieldElement;
