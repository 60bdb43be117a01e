//! Embedding provider trait definition.

use async_trait::async_trait;

use crate::errors::GatewayError;

/// Turns text into a dense vector.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Compute the embedding of `text`.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, GatewayError>;

    /// Length of the vectors returned by `embed`.
    fn dimensions(&self) -> usize;
}
