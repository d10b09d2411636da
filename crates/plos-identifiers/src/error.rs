//! Error types

use thiserror::Error;

/// Errors produced when a string cannot be turned into a typed identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum IdentifierError {
    #[error("Not a valid PLOS DOI: {0}")]
    InvalidDoi(String),
    #[error("Unknown identifier kind: {0}")]
    UnknownKind(String),
}
