//! Seed loader.
//!
//! Reads the seed file and pushes every product, in file order, to the
//! key-value store and the vector index. There is no batching and no
//! rollback: a failure leaves earlier products written and stops the load.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::errors::FeedError;
use catalog_feed_repository::{GatewayError, IndexGateway, PersistenceGateway};
use catalog_feed_shared::{SeedFile, SeedRecord};

/// Outcome of a completed seed load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Products written to both gateways.
    pub loaded: usize,
}

/// One-shot loader for the initial catalog.
pub struct SeedLoader {
    persistence: Arc<dyn PersistenceGateway>,
    index: Arc<dyn IndexGateway>,
}

impl SeedLoader {
    /// Create a loader writing through the given gateways.
    pub fn new(persistence: Arc<dyn PersistenceGateway>, index: Arc<dyn IndexGateway>) -> Self {
        Self { persistence, index }
    }

    /// Read and parse the seed file at `path`.
    ///
    /// A missing file is a configuration error; malformed JSON, a missing
    /// `products` key or a product missing a required field is a parse
    /// error.
    pub async fn read_seed_file(path: &Path) -> Result<Vec<SeedRecord>, FeedError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to read seed file");
            if e.kind() == ErrorKind::NotFound {
                FeedError::configuration(format!("Seed file not found: {}", path.display()))
            } else {
                FeedError::Io(e)
            }
        })?;

        let file: SeedFile = serde_json::from_str(&raw).map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to parse seed file");
            FeedError::parse(format!("{}: {}", path.display(), e))
        })?;

        Ok(file.products)
    }

    /// Load the seed file at `path` into both gateways.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub async fn load(&self, path: impl AsRef<Path>) -> Result<SeedSummary, FeedError> {
        let path = path.as_ref();
        let records = Self::read_seed_file(path).await?;

        info!(
            path = %path.display(),
            count = records.len(),
            "Starting to load initial products"
        );

        let summary = self.load_records(&records).await?;

        info!(loaded = summary.loaded, "Initial product data loading complete");
        Ok(summary)
    }

    /// Push already parsed records into both gateways, in order.
    pub async fn load_records(&self, records: &[SeedRecord]) -> Result<SeedSummary, FeedError> {
        let mut summary = SeedSummary::default();

        for record in records {
            let id = record.id();
            let value = record.to_json().map_err(GatewayError::from)?;

            self.persistence.upsert(&id, &value).await.map_err(|e| {
                error!(id = %id, error = %e, "Failed to add product to key-value store");
                e
            })?;
            info!(id = %id, "Added product to key-value store");

            let document = record.to_document();
            let doc_id = self
                .index
                .insert(&document.text, &document.metadata)
                .await
                .map_err(|e| {
                    error!(id = %id, error = %e, "Failed to add product to vector store");
                    e
                })?;
            info!(id = %id, doc_id = %doc_id, "Added product to vector store");

            summary.loaded += 1;
        }

        Ok(summary)
    }
}
