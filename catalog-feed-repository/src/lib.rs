//! # Catalog Feed Repository
//!
//! This crate provides the narrow gateway traits the feed pipeline writes
//! through, and concrete implementations backed by OpenSearch (key-value
//! and vector storage) and an OpenAI-compatible embeddings endpoint.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod openai;
pub mod opensearch;

pub use config::{EmbeddingConfig, StoreConfig};
pub use errors::GatewayError;
pub use interfaces::{EmbeddingProvider, IndexGateway, PersistenceGateway};
pub use openai::OpenAiEmbeddings;
pub use crate::opensearch::{OpenSearchConnection, OpenSearchKeyValueStore, OpenSearchVectorIndex};
