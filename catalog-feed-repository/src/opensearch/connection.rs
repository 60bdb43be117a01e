//! Shared OpenSearch connection.

use std::sync::Arc;

use opensearch::{
    cluster::ClusterHealthParts,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    OpenSearch,
};
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::errors::GatewayError;
use crate::interfaces::EmbeddingProvider;
use crate::opensearch::{ensure_success, OpenSearchKeyValueStore, OpenSearchVectorIndex};

/// One client handle to an OpenSearch cluster.
///
/// Acquired once at startup and held for the whole run. The gateways built
/// from it share the underlying transport. Dropping the connection logs its
/// release; in-flight clones held by gateways keep the transport alive
/// until they are dropped too.
pub struct OpenSearchConnection {
    client: OpenSearch,
    url: String,
}

impl OpenSearchConnection {
    /// Create a client for the cluster at `url`.
    ///
    /// No request is sent; use `health_check` to verify reachability.
    pub async fn new(url: &str) -> Result<Self, GatewayError> {
        let parsed_url = Url::parse(url).map_err(|e| GatewayError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| GatewayError::connection(e.to_string()))?;

        info!(url = %url, "Created OpenSearch client");

        Ok(Self {
            client: OpenSearch::new(transport),
            url: url.to_string(),
        })
    }

    /// Check that the cluster answers and is `green` or `yellow`.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn health_check(&self) -> Result<bool, GatewayError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| GatewayError::connection(e.to_string()))?;

        let response = ensure_success(response, "Cluster health").await?;
        let health: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::store(e.to_string()))?;

        let status = Self::parse_health_status(&health);
        info!(status = status, "OpenSearch cluster status");
        Ok(status == "green" || status == "yellow")
    }

    /// Create the index `name` with `settings` unless it already exists.
    #[instrument(skip(self, settings))]
    pub async fn ensure_index(&self, name: &str, settings: Value) -> Result<(), GatewayError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| GatewayError::connection(e.to_string()))?;

        if response.status_code().is_success() {
            debug!(index = name, "Index already exists");
            return Ok(());
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(name))
            .body(settings)
            .send()
            .await
            .map_err(|e| GatewayError::connection(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            info!(index = name, "Created index");
            return Ok(());
        }

        let error_body: Value = response.json().await.unwrap_or_else(|_| json!({}));
        // Another writer may have created the index between the two calls.
        if Self::is_already_exists(&error_body) {
            debug!(index = name, "Index created concurrently");
            return Ok(());
        }

        error!(index = name, status = %status, body = %error_body, "Index creation failed");
        Err(GatewayError::store(format!(
            "Creating index {} failed with status {}: {}",
            name, status, error_body
        )))
    }

    /// Key-value gateway writing into `index`.
    pub fn key_value_store(&self, index: impl Into<String>) -> OpenSearchKeyValueStore {
        OpenSearchKeyValueStore::new(self.client.clone(), index)
    }

    /// Vector gateway writing into `index`, embedding text with `embeddings`.
    pub fn vector_index(
        &self,
        index: impl Into<String>,
        embeddings: Arc<dyn EmbeddingProvider>,
    ) -> OpenSearchVectorIndex {
        OpenSearchVectorIndex::new(self.client.clone(), index, embeddings)
    }

    /// The URL this connection points at.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn parse_health_status(health: &Value) -> &str {
        health
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
    }

    fn is_already_exists(error_body: &Value) -> bool {
        error_body
            .pointer("/error/type")
            .and_then(Value::as_str)
            .map(|t| t == "resource_already_exists_exception")
            .unwrap_or(false)
    }
}

impl Drop for OpenSearchConnection {
    fn drop(&mut self) {
        info!(url = %self.url, "Released OpenSearch connection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_health_status() {
        let health = json!({ "cluster_name": "docker-cluster", "status": "yellow" });
        assert_eq!(OpenSearchConnection::parse_health_status(&health), "yellow");
        assert_eq!(OpenSearchConnection::parse_health_status(&json!({})), "unknown");
    }

    #[test]
    fn test_is_already_exists() {
        let body = json!({
            "error": { "type": "resource_already_exists_exception", "reason": "index exists" },
            "status": 400
        });
        assert!(OpenSearchConnection::is_already_exists(&body));
        assert!(!OpenSearchConnection::is_already_exists(&json!({ "status": 400 })));
    }

    #[tokio::test]
    async fn test_new_rejects_invalid_url() {
        let result = OpenSearchConnection::new("not a url").await;
        assert!(matches!(result, Err(GatewayError::ConnectionError(_))));
    }

    #[tokio::test]
    async fn test_new_keeps_url() {
        let connection = OpenSearchConnection::new("http://localhost:9200").await.unwrap();
        assert_eq!(connection.url(), "http://localhost:9200");
    }
}
