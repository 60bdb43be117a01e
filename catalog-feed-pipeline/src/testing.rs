//! In-memory gateways for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use catalog_feed_repository::{GatewayError, IndexGateway, PersistenceGateway};
use catalog_feed_shared::Metadata;

/// Records every call; can be told to fail after a number of successes.
#[derive(Default)]
pub struct RecordingGateway {
    pub upserts: Mutex<Vec<(String, String)>>,
    pub inserts: Mutex<Vec<(String, Metadata)>>,
    fail_upsert_after: Option<usize>,
    fail_insert_after: Option<usize>,
    calls: AtomicUsize,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts succeed `n` times, then fail with a connection error.
    pub fn failing_upsert_after(n: usize) -> Self {
        Self {
            fail_upsert_after: Some(n),
            ..Default::default()
        }
    }

    /// Inserts succeed `n` times, then fail with a store error.
    pub fn failing_insert_after(n: usize) -> Self {
        Self {
            fail_insert_after: Some(n),
            ..Default::default()
        }
    }

    pub fn upserts(&self) -> Vec<(String, String)> {
        self.upserts.lock().unwrap().clone()
    }

    pub fn inserts(&self) -> Vec<(String, Metadata)> {
        self.inserts.lock().unwrap().clone()
    }

    /// Total number of gateway calls, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PersistenceGateway for RecordingGateway {
    async fn upsert(&self, key: &str, value: &str) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut upserts = self.upserts.lock().unwrap();
        if self.fail_upsert_after == Some(upserts.len()) {
            return Err(GatewayError::connection("store unreachable"));
        }
        upserts.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

#[async_trait]
impl IndexGateway for RecordingGateway {
    async fn insert(&self, text: &str, metadata: &Metadata) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut inserts = self.inserts.lock().unwrap();
        if self.fail_insert_after == Some(inserts.len()) {
            return Err(GatewayError::store("index rejected write"));
        }
        inserts.push((text.to_string(), metadata.clone()));
        Ok(format!("doc-{}", inserts.len()))
    }
}
