//! Error types for page startup and configuration.
//!
//! Field validation failures are not errors in this sense: they are surfaced as inline
//! text on the page and never travel through `Result`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while parsing a CSS selector against the in-memory document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("'{0}' is not a valid selector identifier")]
    InvalidIdentifier(String),
    #[error("unsupported selector '{0}'")]
    Unsupported(String),
}

/// Errors raised while binding a page or loading its configuration.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("required element '{0}' is missing from the page")]
    MissingElement(&'static str),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
