//! Environment-driven configuration.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;

use crate::AppError;
use catalog_feed_repository::config::{
    DEFAULT_EMBEDDING_BASE_URL, DEFAULT_EMBEDDING_DIMENSIONS, DEFAULT_EMBEDDING_MODEL,
    DEFAULT_KV_INDEX, DEFAULT_OPENSEARCH_URL, DEFAULT_VECTOR_INDEX,
};
use catalog_feed_repository::{EmbeddingConfig, StoreConfig};

/// Settings shared by both binaries.
#[derive(Debug, Clone, Default)]
pub struct FeedConfig {
    pub store: StoreConfig,
    pub embedding: EmbeddingConfig,
}

impl FeedConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `CATALOG_KV_INDEX`: key-value index (default: product_cache)
    /// - `CATALOG_VECTOR_INDEX`: vector index (default: vector_cache)
    /// - `OPENAI_BASE_URL`: embeddings API base URL (default: https://api.openai.com/v1)
    /// - `OPENAI_EMBEDDING_MODEL`: embedding model (default: text-embedding-3-small)
    /// - `OPENAI_EMBEDDING_DIMENSIONS`: embedding length (default: 1536)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let dimensions = match lookup("OPENAI_EMBEDDING_DIMENSIONS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|d| *d > 0)
                .ok_or_else(|| {
                    AppError::config(format!(
                        "OPENAI_EMBEDDING_DIMENSIONS must be a positive integer, got {:?}",
                        raw
                    ))
                })?,
            None => DEFAULT_EMBEDDING_DIMENSIONS,
        };

        Ok(Self {
            store: StoreConfig {
                url: var("OPENSEARCH_URL", DEFAULT_OPENSEARCH_URL),
                kv_index: var("CATALOG_KV_INDEX", DEFAULT_KV_INDEX),
                vector_index: var("CATALOG_VECTOR_INDEX", DEFAULT_VECTOR_INDEX),
            },
            embedding: EmbeddingConfig {
                base_url: var("OPENAI_BASE_URL", DEFAULT_EMBEDDING_BASE_URL),
                model: var("OPENAI_EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
                dimensions,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FeedConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.store.url, "http://localhost:9200");
        assert_eq!(config.store.kv_index, "product_cache");
        assert_eq!(config.store.vector_index, "vector_cache");
        assert_eq!(config.embedding.model, "text-embedding-3-small");
        assert_eq!(config.embedding.dimensions, 1536);
    }

    #[test]
    fn test_overrides() {
        let config = FeedConfig::from_lookup(lookup(&[
            ("OPENSEARCH_URL", "http://opensearch:9200"),
            ("CATALOG_VECTOR_INDEX", "products_vectors"),
            ("OPENAI_BASE_URL", "http://localhost:1234/v1"),
            ("OPENAI_EMBEDDING_DIMENSIONS", "768"),
        ]))
        .unwrap();

        assert_eq!(config.store.url, "http://opensearch:9200");
        assert_eq!(config.store.kv_index, "product_cache");
        assert_eq!(config.store.vector_index, "products_vectors");
        assert_eq!(config.embedding.endpoint(), "http://localhost:1234/v1/embeddings");
        assert_eq!(config.embedding.dimensions, 768);
    }

    #[test]
    fn test_invalid_dimensions() {
        for raw in ["zero", "0", "-5", ""] {
            let result = FeedConfig::from_lookup(lookup(&[("OPENAI_EMBEDDING_DIMENSIONS", raw)]));
            assert!(matches!(result, Err(AppError::ConfigError(_))), "{:?}", raw);
        }
    }
}
