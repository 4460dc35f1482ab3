//! Error types
//!
//! Two kinds of error are kept apart: [`ContractError`] means the caller
//! misused a helper (bad format string, zero group size), while
//! [`AssertionFailure`] means a check found values that differ.

use thiserror::Error;

/// A composite format string could not be applied to its arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("malformed format string at position {position}: {reason}")]
    Malformed { position: usize, reason: &'static str },

    #[error("placeholder index {index} is out of range for {count} argument(s)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("format specifier '{specifier}' is not supported for this argument")]
    UnknownSpecifier { specifier: String },
}

/// The caller broke the contract of a helper
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("group size must be positive, got {0}")]
    InvalidGroupSize(usize),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// A command-line run could not produce its report
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("failed to read standard input: {0}")]
    Input(#[from] std::io::Error),
}

/// A check found values that are not equivalent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The diagnostic text reported to the failure channel
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
