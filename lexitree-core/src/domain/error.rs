//! Domain error types

use crate::domain::model::NodeKind;
use std::path::PathBuf;
use thiserror::Error;

/// Invariant violations raised while building or mutating nodes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// `add`/`remove` called on a leaf node
    #[error("cannot {operation} children on a {kind} leaf")]
    UnsupportedOperation {
        /// The rejected operation (`add` or `remove`)
        operation: &'static str,
        /// Kind of the leaf it was called on
        kind: NodeKind,
    },

    /// Text does not match the word shape of the grammar
    #[error("not a valid word: {0:?}")]
    InvalidWord(String),

    /// Text is neither a single character nor the ellipsis literal
    #[error("symbol must be a single character or the ellipsis, got {0:?}")]
    InvalidSymbol(String),
}

/// Errors raised while loading or compiling a language configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML could not be deserialized
    #[error("failed to parse language config: {0}")]
    Toml(#[from] toml::de::Error),

    /// An external config file could not be read
    #[error("failed to read language config {}: {source}", path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Semantically invalid settings
    #[error("invalid language config: {0}")]
    Invalid(String),

    /// No embedded config for this code
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A derived regular expression failed to compile
    #[error("invalid {what} pattern: {source}")]
    Pattern {
        /// Which grammar rule was being compiled
        what: &'static str,
        /// Regex compilation error
        #[source]
        source: regex::Error,
    },
}
