//! Seed file format.
//!
//! ```json
//! {"products": [{"id": "1", "product": "Organic Bananas",
//!   "current_availability": "In Stock", "price": 2.49,
//!   "delivery_time": "15-30 minutes"}]}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::{IndexedDocument, Metadata};

/// Keys every seed entry must carry. Their values are not type-checked.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "id",
    "product",
    "current_availability",
    "price",
    "delivery_time",
];

/// Top-level object of a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedFile {
    pub products: Vec<SeedRecord>,
}

/// One product entry exactly as it appears in the seed file.
///
/// The entry is kept as a JSON object in file order so the stored blob
/// matches what was read. Only the presence of `REQUIRED_FIELDS` is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct SeedRecord {
    fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for SeedRecord {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        if let Some(missing) = REQUIRED_FIELDS.iter().find(|k| !fields.contains_key(**k)) {
            return Err(format!("seed product is missing field `{}`", missing));
        }
        Ok(Self { fields })
    }
}

impl From<SeedRecord> for Map<String, Value> {
    fn from(record: SeedRecord) -> Self {
        record.fields
    }
}

/// Text of a field value: strings as written, anything else as JSON.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl SeedRecord {
    /// Raw value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Text of a required field.
    fn text(&self, key: &str) -> String {
        self.fields.get(key).map(field_text).unwrap_or_default()
    }

    /// Key under which the entry is stored.
    pub fn id(&self) -> String {
        self.text("id")
    }

    /// The whole entry as JSON, in file order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.fields)
    }

    /// Text indexed for a seeded product.
    pub fn description(&self) -> String {
        format!(
            "Product ID: {}, Name: {}, Availability: {}, Price: ${}, Delivery Time: {}",
            self.text("id"),
            self.text("product"),
            self.text("current_availability"),
            self.text("price"),
            self.text("delivery_time")
        )
    }

    /// Vector index projection of this record. Metadata values are copied
    /// from the entry unchanged.
    pub fn to_document(&self) -> IndexedDocument {
        let mut metadata = Metadata::new();
        for (meta_key, field) in [("id", "id"), ("product_name", "product"), ("price", "price")] {
            if let Some(value) = self.fields.get(field) {
                metadata.insert(meta_key.to_string(), value.clone());
            }
        }
        IndexedDocument {
            text: self.description(),
            metadata,
        }
    }
}
