//! Error types for model parsing.

use thiserror::Error;

/// Errors raised while parsing model values from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// The convention version string is not one the registry knows about.
    #[error("unsupported CF convention version '{0}'")]
    UnsupportedVersion(String),

    /// The vocabulary kind string is not recognized.
    #[error("unknown vocabulary kind '{0}'")]
    UnknownVocabulary(String),

    /// The attribute value kind string is not recognized.
    #[error("unknown value kind '{0}' (expected N or S)")]
    UnknownValueKind(String),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
