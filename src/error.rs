//! Error types for Moji
//!
//! Provides standardized error handling across the picker.

use thiserror::Error;

/// Errors that can occur in Moji
#[derive(Debug, Error)]
pub enum MojiError {
    /// A database line that could not be turned into an entry
    #[error("Malformed database line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// Clipboard operation errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias for Moji operations
pub type MojiResult<T> = Result<T, MojiError>;
