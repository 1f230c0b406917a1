//! Error types for the kazu-core library.

use thiserror::Error;

/// Main error type for the kazu library.
#[derive(Error, Debug)]
pub enum KazuError {
    /// Rule table or definition bundle is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a bundle or config file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building a rule table.
///
/// These all indicate a defect in the definition bundle and are never
/// retried.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// The same pattern was registered twice in one table.
    #[error("duplicate pattern in rule '{rule}': {pattern}")]
    DuplicatePattern { rule: String, pattern: String },

    /// Unrecognized extraction mode.
    #[error("unknown extraction mode: {0}")]
    UnknownMode(String),

    /// Unrecognized language name.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// A pattern or one of its guards failed to compile.
    #[error("invalid pattern in rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    /// A pattern can produce a zero-length match.
    #[error("pattern in rule '{rule}' matches the empty string")]
    EmptyMatch { rule: String },
}

/// Result type for the kazu library.
pub type Result<T> = std::result::Result<T, KazuError>;
