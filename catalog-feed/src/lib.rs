//! # Catalog Feed
//!
//! Entry points for seeding the product catalog into OpenSearch and for
//! emitting simulated live updates afterwards.
//!
//! Two binaries share this library:
//!
//! - `data-loader`: one-shot seed from a JSON file
//! - `product-emitter`: optional seed, then a paced update loop

pub mod app;
pub mod cli;
pub mod config;
pub mod telemetry;

pub use config::{Dependencies, FeedConfig};

use catalog_feed_pipeline::FeedError;
use catalog_feed_repository::GatewayError;
use thiserror::Error;

/// Errors surfaced by the entry points.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// Gateway error raised while wiring dependencies.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
