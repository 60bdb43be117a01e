//! # Catalog Feed Pipeline
//!
//! This crate simulates a live product catalog feed on top of the gateway
//! traits from `catalog-feed-repository`.
//!
//! ## Architecture
//!
//! 1. **Catalog**: In-memory table of the predefined products
//! 2. **Generator**: Samples one simulated product update
//! 3. **Loader**: One-shot seed of a JSON file into both gateways
//! 4. **Emitter**: Paced loop applying generated updates and pushing them out

pub mod catalog;
pub mod emitter;
pub mod errors;
pub mod generator;
pub mod loader;

pub use catalog::ProductCatalog;
pub use emitter::{RunSummary, UpdateLoop};
pub use errors::FeedError;
pub use generator::{GeneratorConfig, RecordGenerator};
pub use loader::{SeedLoader, SeedSummary};

#[cfg(test)]
pub(crate) mod testing;
