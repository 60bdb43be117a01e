//! Gateway error types.
//!
//! This module defines the errors that can occur while talking to the
//! key-value store, the vector index or the embedding provider.

use thiserror::Error;

/// Errors that can occur during gateway operations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The remote service could not be reached.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The remote service rejected the request or answered with garbage.
    #[error("Store error: {0}")]
    StoreError(String),

    /// The gateway was built with unusable settings.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A request body could not be serialized.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl GatewayError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a store error.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::StoreError(msg.into())
    }

    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Whether the failure happened before the service answered.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
