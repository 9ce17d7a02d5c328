//! Error type definitions for field and coding operations

use thiserror::Error as ThisError;

/// Primary error type for gfcode operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Too few known symbols to reconstruct the data
    #[error("{context}: insufficient symbols (need {required}, got {available})")]
    InsufficientSymbols {
        context: &'static str,
        required: usize,
        available: usize,
    },

    /// A precomputed table disagreed with the reference arithmetic
    #[error("Self-test failed: {context}: {message}")]
    SelfTestFailed {
        context: &'static str,
        message: String,
    },
}

/// Result type for gfcode operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InsufficientSymbols { required, available, .. } => Self::InsufficientSymbols {
                context,
                required,
                available,
            },
            Self::SelfTestFailed { message, .. } => Self::SelfTestFailed { context, message },
        }
    }

    /// The context this error was raised in
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidParameter { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InsufficientSymbols { context, .. }
            | Self::SelfTestFailed { context, .. } => context,
        }
    }
}
