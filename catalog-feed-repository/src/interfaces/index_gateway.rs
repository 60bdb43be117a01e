//! Vector index trait definition.

use async_trait::async_trait;

use crate::errors::GatewayError;
use catalog_feed_shared::Metadata;

/// Embeds text and inserts it, with metadata, into a vector index.
///
/// Whether a second insert with the same `id` metadata replaces or appends
/// is decided by the implementation.
#[async_trait]
pub trait IndexGateway: Send + Sync {
    /// Insert a document into the index.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to embed and store
    /// * `metadata` - Metadata stored next to the text, containing at least `id`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The identifier the index assigned to the document
    /// * `Err(GatewayError)` - If embedding or insertion fails
    async fn insert(&self, text: &str, metadata: &Metadata) -> Result<String, GatewayError>;
}
