//! Error types
//!
//! Validation failures are raised before any SDK instance exists. SDK failures
//! are passed through with their original message.

use std::fmt;
use thiserror::Error;

/// Expected argument type named in a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    String,
    Boolean,
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgType::String => write!(f, "String"),
            ArgType::Boolean => write!(f, "Boolean"),
        }
    }
}

/// Argument validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{param} arg should be \"{expected}\"")]
    WrongType {
        param: &'static str,
        expected: ArgType,
    },
    #[error("asset arg not valid should be \"String\"")]
    InvalidAsset,
}

impl ValidationError {
    pub(crate) fn string(param: &'static str) -> Self {
        ValidationError::WrongType {
            param,
            expected: ArgType::String,
        }
    }

    pub(crate) fn boolean(param: &'static str) -> Self {
        ValidationError::WrongType {
            param,
            expected: ArgType::Boolean,
        }
    }

    /// Name of the offending parameter
    pub fn param(&self) -> &'static str {
        match self {
            ValidationError::WrongType { param, .. } => param,
            ValidationError::InvalidAsset => "asset",
        }
    }
}

/// Errors reported by an SDK implementation
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("transaction rejected: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors returned by the transfer operations
#[derive(Debug, Error)]
pub enum TransferError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Sdk(#[from] SdkError),
}
