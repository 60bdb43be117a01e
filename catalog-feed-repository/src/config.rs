//! Configuration types for the gateway implementations.

/// Default OpenSearch URL.
pub const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Default index holding the serialized product records.
pub const DEFAULT_KV_INDEX: &str = "product_cache";

/// Default index holding the embedded product descriptions.
pub const DEFAULT_VECTOR_INDEX: &str = "vector_cache";

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_EMBEDDING_BASE_URL: &str = "https://api.openai.com/v1";

/// Default embedding model.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Output dimension of the default embedding model.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;

/// Where the key-value and vector data live.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// OpenSearch server URL.
    pub url: String,
    /// Index used as the key-value store.
    pub kv_index: String,
    /// Index used as the vector store.
    pub vector_index: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OPENSEARCH_URL.to_string(),
            kv_index: DEFAULT_KV_INDEX.to_string(),
            vector_index: DEFAULT_VECTOR_INDEX.to_string(),
        }
    }
}

/// Settings for the embeddings endpoint.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    /// Base URL; `/embeddings` is appended.
    pub base_url: String,
    /// Model name sent with each request.
    pub model: String,
    /// Expected vector length, also used for the index mapping.
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EMBEDDING_BASE_URL.to_string(),
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}

impl EmbeddingConfig {
    /// Full URL of the embeddings endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/embeddings", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let config = EmbeddingConfig {
            base_url: "http://localhost:1234/v1/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), "http://localhost:1234/v1/embeddings");
        assert_eq!(
            EmbeddingConfig::default().endpoint(),
            "https://api.openai.com/v1/embeddings"
        );
    }

    #[test]
    fn test_store_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.url, "http://localhost:9200");
        assert_ne!(config.kv_index, config.vector_index);
    }
}
