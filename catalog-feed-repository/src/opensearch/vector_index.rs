//! Vector index on top of an OpenSearch k-NN index.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use opensearch::{IndexParts, OpenSearch};
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::errors::GatewayError;
use crate::interfaces::{EmbeddingProvider, IndexGateway};
use crate::opensearch::ensure_success;
use catalog_feed_shared::Metadata;

/// Embeds text and appends it to an OpenSearch index.
///
/// OpenSearch assigns the document id, so every insert creates a new
/// document; readers pick the most recent one per `metadata.id`.
pub struct OpenSearchVectorIndex {
    client: OpenSearch,
    index: String,
    embeddings: Arc<dyn EmbeddingProvider>,
}

impl OpenSearchVectorIndex {
    pub(crate) fn new(
        client: OpenSearch,
        index: impl Into<String>,
        embeddings: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self {
            client,
            index: index.into(),
            embeddings,
        }
    }

    /// The index this gateway writes into.
    pub fn index(&self) -> &str {
        &self.index
    }

    fn build_document(text: &str, metadata: &Metadata, embedding: &[f32]) -> Value {
        json!({
            "text": text,
            "metadata": metadata,
            "embedding": embedding,
            "indexed_at": Utc::now().to_rfc3339(),
        })
    }

    fn parse_document_id(body: &Value) -> Option<String> {
        body.get("_id").and_then(Value::as_str).map(str::to_string)
    }
}

#[async_trait]
impl IndexGateway for OpenSearchVectorIndex {
    #[instrument(skip(self, text, metadata), fields(index = %self.index))]
    async fn insert(&self, text: &str, metadata: &Metadata) -> Result<String, GatewayError> {
        let embedding = self.embeddings.embed(text).await?;

        let response = self
            .client
            .index(IndexParts::Index(&self.index))
            .body(Self::build_document(text, metadata, &embedding))
            .send()
            .await
            .map_err(|e| GatewayError::connection(e.to_string()))?;

        let response = ensure_success(response, "Vector insert").await?;
        let body: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::store(e.to_string()))?;

        let doc_id = Self::parse_document_id(&body)
            .ok_or_else(|| GatewayError::store("Vector insert response has no _id"))?;

        debug!(doc_id = %doc_id, dimensions = embedding.len(), "Indexed document");
        Ok(doc_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_document() {
        let mut metadata = Metadata::new();
        metadata.insert("id".to_string(), json!("5"));

        let doc = OpenSearchVectorIndex::build_document(
            "Name: Multigrain Bread",
            &metadata,
            &[0.25, -0.5],
        );

        assert_eq!(doc["text"], "Name: Multigrain Bread");
        assert_eq!(doc["metadata"]["id"], "5");
        assert_eq!(doc["embedding"], json!([0.25, -0.5]));
        assert!(doc["indexed_at"].is_string());
    }

    #[test]
    fn test_parse_document_id() {
        let body = json!({
            "_index": "vector_cache",
            "_id": "Qh3kSZIBt8hQ1n2wJ0xZ",
            "result": "created"
        });
        assert_eq!(
            OpenSearchVectorIndex::parse_document_id(&body),
            Some("Qh3kSZIBt8hQ1n2wJ0xZ".to_string())
        );
        assert_eq!(OpenSearchVectorIndex::parse_document_id(&json!({})), None);
    }
}
