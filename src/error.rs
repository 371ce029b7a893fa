//! Error types for ember-map

use thiserror::Error;

/// Main error type for ember-map operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Invalid count: {0}")]
    InvalidCount(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for ember-map operations
pub type Result<T> = std::result::Result<T, Error>;
