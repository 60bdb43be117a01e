//! Error types for the catalog feed repository.

mod gateway_error;

pub use gateway_error::GatewayError;
