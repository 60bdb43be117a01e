//! Key-value persistence trait definition.

use async_trait::async_trait;

use crate::errors::GatewayError;

/// Key-value upsert against an external store.
///
/// All implementations must be `Send + Sync` to allow sharing behind an `Arc`.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the value was written
    /// * `Err(GatewayError::ConnectionError)` - If the store is unreachable
    /// * `Err(GatewayError::StoreError)` - If the store rejected the write
    async fn upsert(&self, key: &str, value: &str) -> Result<(), GatewayError>;
}
