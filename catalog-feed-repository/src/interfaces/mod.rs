//! Interface definitions for the feed's external collaborators.
//!
//! The pipeline only sees these traits, so the OpenSearch and embeddings
//! implementations can be swapped for in-memory fakes in tests.

mod embedding_provider;
mod index_gateway;
mod persistence_gateway;

pub use embedding_provider::EmbeddingProvider;
pub use index_gateway::IndexGateway;
pub use persistence_gateway::PersistenceGateway;
