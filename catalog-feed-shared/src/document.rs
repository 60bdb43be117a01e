//! Documents pushed into the vector index.

use serde::Serialize;
use serde_json::{Map, Value};

/// Free-form metadata stored next to an indexed document.
pub type Metadata = Map<String, Value>;

/// Text plus metadata projection of a product.
///
/// Write-only: a later document with the same `id` metadata supersedes an
/// earlier one, it is never edited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedDocument {
    pub text: String,
    pub metadata: Metadata,
}

impl IndexedDocument {
    /// Create a document carrying only the `id` metadata entry.
    pub fn new(text: impl Into<String>, id: impl Into<String>) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert("id".to_string(), Value::String(id.into()));
        Self {
            text: text.into(),
            metadata,
        }
    }

    /// Add a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The `id` metadata entry.
    pub fn id(&self) -> Option<&str> {
        self.metadata.get("id").and_then(Value::as_str)
    }
}
