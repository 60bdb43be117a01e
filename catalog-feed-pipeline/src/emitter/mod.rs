//! Paced update loop.
//!
//! Applies generated updates to the catalog and pushes each updated product
//! to the key-value store and the vector index, sleeping between iterations
//! to simulate a slow live feed.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info, instrument, warn};

use crate::catalog::ProductCatalog;
use crate::errors::FeedError;
use crate::generator::RecordGenerator;
use catalog_feed_repository::{GatewayError, IndexGateway, PersistenceGateway};
use catalog_feed_shared::{IndexedDocument, Product};

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Iterations executed.
    pub iterations: usize,
    /// Iterations that updated a catalog product.
    pub updated: usize,
    /// Iterations whose generated id was not in the catalog.
    pub skipped: usize,
}

/// Sequential loop pushing simulated catalog changes through the gateways.
pub struct UpdateLoop<R = StdRng> {
    persistence: Arc<dyn PersistenceGateway>,
    index: Arc<dyn IndexGateway>,
    generator: RecordGenerator,
    rng: R,
}

impl UpdateLoop<StdRng> {
    /// Create a loop with the default generator and an entropy-seeded RNG.
    pub fn new(persistence: Arc<dyn PersistenceGateway>, index: Arc<dyn IndexGateway>) -> Self {
        Self::with_rng(
            persistence,
            index,
            RecordGenerator::new(),
            StdRng::from_entropy(),
        )
    }
}

impl<R: Rng> UpdateLoop<R> {
    /// Create a loop with a custom generator and random source.
    pub fn with_rng(
        persistence: Arc<dyn PersistenceGateway>,
        index: Arc<dyn IndexGateway>,
        generator: RecordGenerator,
        rng: R,
    ) -> Self {
        Self {
            persistence,
            index,
            generator,
            rng,
        }
    }

    /// Run `count` iterations, sleeping `interval` between them.
    ///
    /// The first gateway failure aborts the run and is returned; updates
    /// already pushed stay pushed and the catalog keeps the failed update.
    #[instrument(skip(self, catalog))]
    pub async fn run(
        &mut self,
        catalog: &mut ProductCatalog,
        count: usize,
        interval: Duration,
    ) -> Result<RunSummary, FeedError> {
        info!(
            count = count,
            interval_secs = interval.as_secs_f64(),
            "Starting to emit product updates"
        );

        let mut summary = RunSummary::default();

        for iteration in 0..count {
            let update = self.generator.generate(catalog, &mut self.rng);

            if self.emit(catalog, &update).await? {
                summary.updated += 1;
            } else {
                summary.skipped += 1;
            }
            summary.iterations += 1;

            if iteration + 1 < count {
                tokio::time::sleep(interval).await;
            }
        }

        info!(
            iterations = summary.iterations,
            updated = summary.updated,
            skipped = summary.skipped,
            "Finished emitting product updates"
        );
        Ok(summary)
    }

    /// Apply one update and push it out. Returns `false` if it was skipped.
    async fn emit(&self, catalog: &mut ProductCatalog, update: &Product) -> Result<bool, FeedError> {
        let Some(updated) = catalog.apply_update(update) else {
            warn!(id = %update.id, "Generated product is not in the catalog, skipping");
            return Ok(false);
        };
        let updated = updated.clone();

        let value = serde_json::to_string(&updated)
            .map_err(|e| FeedError::from(GatewayError::from(e)))?;

        self.persistence
            .upsert(&updated.id, &value)
            .await
            .map_err(|e| {
                error!(id = %updated.id, error = %e, "Failed to update product in key-value store");
                e
            })?;
        info!(id = %updated.id, "Updated product in key-value store");

        let document = IndexedDocument::new(updated.update_description(), updated.id.clone());
        let doc_id = self
            .index
            .insert(&document.text, &document.metadata)
            .await
            .map_err(|e| {
                error!(id = %updated.id, error = %e, "Failed to update product in vector store");
                e
            })?;
        info!(id = %updated.id, doc_id = %doc_id, "Updated product in vector store");

        match serde_json::to_string_pretty(&updated) {
            Ok(pretty) => info!("Updated product: {}", pretty),
            Err(e) => warn!(error = %e, "Could not render updated product"),
        }

        Ok(true)
    }
}
