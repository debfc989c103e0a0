//! Error types for the namefind front end.

use namefind_core::LookupError;
use thiserror::Error;

/// Front-end error type.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Schema or query error from the core engine
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed interactive command
    #[error("{0}")]
    Usage(String),
}

/// Result type alias using the front-end Error.
pub type Result<T> = std::result::Result<T, Error>;
