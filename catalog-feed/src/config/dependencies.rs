//! Dependency initialization and wiring for the feed binaries.

use std::sync::Arc;

use tracing::info;

use crate::config::FeedConfig;
use crate::AppError;
use catalog_feed_pipeline::{SeedLoader, UpdateLoop};
use catalog_feed_repository::opensearch::{key_value_index_settings, vector_index_settings};
use catalog_feed_repository::{
    GatewayError, IndexGateway, OpenAiEmbeddings, OpenSearchConnection, PersistenceGateway,
};

/// Container for the live gateways.
///
/// Owns the single OpenSearch connection for the whole run; it is released
/// when this value is dropped, whether the run succeeded or not.
pub struct Dependencies {
    /// Key-value gateway.
    pub persistence: Arc<dyn PersistenceGateway>,
    /// Vector index gateway.
    pub index: Arc<dyn IndexGateway>,
    connection: OpenSearchConnection,
}

impl Dependencies {
    /// Connect to OpenSearch, make sure both indices exist and build the
    /// embeddings client.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If the cluster is unreachable or unhealthy, or
    ///   an index cannot be created
    pub async fn new(config: &FeedConfig, api_key: &str) -> Result<Self, AppError> {
        info!(
            opensearch_url = %config.store.url,
            kv_index = %config.store.kv_index,
            vector_index = %config.store.vector_index,
            embedding_model = %config.embedding.model,
            "Initializing dependencies"
        );

        let connection = OpenSearchConnection::new(&config.store.url).await?;

        if !connection.health_check().await? {
            return Err(GatewayError::connection("OpenSearch cluster is unhealthy").into());
        }
        info!("Connected to OpenSearch successfully");

        connection
            .ensure_index(&config.store.kv_index, key_value_index_settings())
            .await?;
        connection
            .ensure_index(
                &config.store.vector_index,
                vector_index_settings(config.embedding.dimensions),
            )
            .await?;
        info!("Indices ready");

        let embeddings = Arc::new(OpenAiEmbeddings::new(api_key, config.embedding.clone())?);

        let persistence = Arc::new(connection.key_value_store(config.store.kv_index.clone()));
        let index = Arc::new(connection.vector_index(config.store.vector_index.clone(), embeddings));

        Ok(Self {
            persistence,
            index,
            connection,
        })
    }

    /// Seed loader writing through these gateways.
    pub fn seed_loader(&self) -> SeedLoader {
        SeedLoader::new(self.persistence.clone(), self.index.clone())
    }

    /// Update loop writing through these gateways.
    pub fn update_loop(&self) -> UpdateLoop {
        UpdateLoop::new(self.persistence.clone(), self.index.clone())
    }

    /// The OpenSearch URL in use.
    pub fn url(&self) -> &str {
        self.connection.url()
    }
}
