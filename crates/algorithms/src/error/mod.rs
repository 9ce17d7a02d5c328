//! Error handling for field arithmetic and erasure coding

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "alloc")]
use alloc::{format, string::ToString};

#[cfg(feature = "alloc")]
use gfcode_api::{Error as CoreError, Result as CoreResult};

/// The error type for gfcode primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Too few codeword symbols are known to recover the data
    InsufficientSymbols {
        /// Number of symbols the code needs
        required: usize,
        /// Number of symbols marked present
        available: usize,
    },

    /// A lookup table entry disagrees with the bitwise reference
    TableMismatch {
        /// Table that failed the check
        table: &'static str,
        /// First operand
        a: u8,
        /// Second operand (zero for unary tables)
        b: u8,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for gfcode primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}", context, expected, actual)
            }
            Error::InsufficientSymbols { required, available } => {
                write!(f, "Insufficient symbols: need {}, got {}", required, available)
            }
            Error::TableMismatch { table, a, b } => {
                write!(f, "Table '{}' disagrees with bitwise arithmetic at ({:#04x}, {:#04x})", table, a, b)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "alloc")]
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.to_string(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InsufficientSymbols { required, available } => CoreError::InsufficientSymbols {
                context: "erasure decode",
                required,
                available,
            },
            Error::TableMismatch { table, a, b } => CoreError::SelfTestFailed {
                context: table,
                message: format!("mismatch at ({:#04x}, {:#04x})", a, b),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[cfg(feature = "alloc")]
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub mod validate;
