//! Key-value store on top of an OpenSearch index.

use async_trait::async_trait;
use chrono::Utc;
use opensearch::{IndexParts, OpenSearch};
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::errors::GatewayError;
use crate::interfaces::PersistenceGateway;
use crate::opensearch::ensure_success;

/// Stores each value as a document whose `_id` is the key.
///
/// Indexing a document under an existing id replaces it, which gives upsert
/// semantics without a read.
pub struct OpenSearchKeyValueStore {
    client: OpenSearch,
    index: String,
}

impl OpenSearchKeyValueStore {
    pub(crate) fn new(client: OpenSearch, index: impl Into<String>) -> Self {
        Self {
            client,
            index: index.into(),
        }
    }

    /// The index this store writes into.
    pub fn index(&self) -> &str {
        &self.index
    }

    fn build_document(value: &str) -> Value {
        json!({
            "value": value,
            "updated_at": Utc::now().to_rfc3339(),
        })
    }
}

#[async_trait]
impl PersistenceGateway for OpenSearchKeyValueStore {
    #[instrument(skip(self, value), fields(index = %self.index))]
    async fn upsert(&self, key: &str, value: &str) -> Result<(), GatewayError> {
        let response = self
            .client
            .index(IndexParts::IndexId(&self.index, key))
            .body(Self::build_document(value))
            .send()
            .await
            .map_err(|e| GatewayError::connection(e.to_string()))?;

        ensure_success(response, "Key-value upsert").await?;

        debug!(key = key, "Stored value");
        Ok(())
    }
}
