//! OpenSearch implementation of the persistence and index gateways.
//!
//! Both gateways share one client handle owned by `OpenSearchConnection`.

mod connection;
mod index_config;
mod key_value_store;
mod vector_index;

pub use connection::OpenSearchConnection;
pub use index_config::{key_value_index_settings, vector_index_settings};
pub use key_value_store::OpenSearchKeyValueStore;
pub use vector_index::OpenSearchVectorIndex;

use opensearch::http::response::Response;
use tracing::error;

use crate::errors::GatewayError;

/// Turn a non-success response into a `StoreError` carrying the body.
pub(crate) async fn ensure_success(
    response: Response,
    action: &str,
) -> Result<Response, GatewayError> {
    let status = response.status_code();
    if status.is_success() {
        return Ok(response);
    }

    let error_body = response.text().await.unwrap_or_default();
    error!(status = %status, body = %error_body, action = action, "OpenSearch request failed");
    Err(GatewayError::store(format!(
        "{} failed with status {}: {}",
        action, status, error_body
    )))
}
