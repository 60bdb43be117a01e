//! Error types for the catalog feed pipeline.

use catalog_feed_repository::GatewayError;
use thiserror::Error;

/// Errors that can occur in the catalog feed pipeline.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Invalid settings or a missing input file.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Error from the key-value store, the vector index or the embeddings.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing input data.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl FeedError {
    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
