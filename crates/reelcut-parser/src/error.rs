//! Error types.
//!
//! Extraction itself never fails. These cover building a configuration and
//! parsing marker names.

/// Invalid [`ExtractorConfig`](crate::config::ExtractorConfig) settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An extra container extension was empty.
    #[error("container extension must not be empty")]
    EmptyExtension,

    /// An extra container extension had characters other than ASCII letters and digits.
    #[error("invalid container extension: {0:?}")]
    InvalidExtension(String),

    /// An extra edition keyword was empty.
    #[error("edition keyword must not be empty")]
    EmptyKeyword,

    /// An extra edition keyword was not a single plain word: it contained a
    /// delimiter, bracket or whitespace, or reads as a year or release metadata.
    #[error("edition keyword must be a single word: {0:?}")]
    InvalidKeyword(String),
}

/// Error parsing an [`EditionMarker`](crate::model::EditionMarker) from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse error: {0}")]
pub struct ParseError(pub String);

/// Result type alias for configuration.
pub type Result<T> = std::result::Result<T, ConfigError>;
