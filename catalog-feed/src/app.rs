//! The runs behind the two binaries.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::{Dependencies, FeedConfig};
use crate::telemetry;
use crate::AppError;
use catalog_feed_pipeline::{ProductCatalog, RunSummary, SeedLoader, SeedSummary, UpdateLoop};
use catalog_feed_repository::{IndexGateway, PersistenceGateway};

/// Options of an emitter run.
#[derive(Debug, Clone)]
pub struct EmitterOptions<'a> {
    pub load_data: bool,
    pub json_file: &'a Path,
    pub num_products: usize,
    pub interval: Duration,
}

/// Seed `json_file` into the key-value store and the vector index.
pub async fn run_loader(
    config: &FeedConfig,
    api_key: &str,
    json_file: &Path,
) -> Result<SeedSummary, AppError> {
    let dependencies = Dependencies::new(config, api_key).await?;
    info!(url = %dependencies.url(), path = %json_file.display(), "Seeding catalog");

    let summary = dependencies.seed_loader().load(json_file).await?;
    Ok(summary)
}

/// Optionally seed, then emit `num_products` updates of the predefined
/// catalog.
///
/// The seed phase and the update loop share one connection.
pub async fn run_emitter(
    config: &FeedConfig,
    api_key: &str,
    options: EmitterOptions<'_>,
) -> Result<RunSummary, AppError> {
    let dependencies = Dependencies::new(config, api_key).await?;
    info!(url = %dependencies.url(), "Emitting catalog updates");

    emit_catalog(
        dependencies.persistence.clone(),
        dependencies.index.clone(),
        options,
    )
    .await
}

/// Emitter run over already built gateways.
///
/// With `load_data` the seed file is loaded first and the run pauses for one
/// `interval` before the first update. A failed seed is reported and the
/// update loop still runs.
pub async fn emit_catalog(
    persistence: Arc<dyn PersistenceGateway>,
    index: Arc<dyn IndexGateway>,
    options: EmitterOptions<'_>,
) -> Result<RunSummary, AppError> {
    if options.load_data {
        info!("load_data is true, loading the seed data first");
        let loader = SeedLoader::new(persistence.clone(), index.clone());
        if let Err(e) = loader.load(options.json_file).await {
            telemetry::report("Seed load failed, continuing with updates", &e);
        }
        tokio::time::sleep(options.interval).await;
    }

    let mut catalog = ProductCatalog::predefined();
    let summary = UpdateLoop::new(persistence, index)
        .run(&mut catalog, options.num_products, options.interval)
        .await?;

    Ok(summary)
}
