//! Product records and their availability states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Delivery time reported for products that have never been updated.
pub const NOT_AVAILABLE: &str = "N/A";

/// Stock level of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Limited Stock")]
    LimitedStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl Availability {
    /// Label used in JSON records and document text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::LimitedStock => "Limited Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product in the live catalog.
///
/// Serializes with the field names used by the seed file so that a
/// key-value write for an update has the same shape as a seeded one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(rename = "product")]
    pub name: String,
    #[serde(rename = "current_availability")]
    pub availability: Availability,
    pub price: f64,
    pub delivery_time: String,
}

impl Product {
    /// Create a product that has not received a delivery estimate yet.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        availability: Availability,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            availability,
            price,
            delivery_time: NOT_AVAILABLE.to_string(),
        }
    }

    /// Placeholder returned for ids that are not part of the catalog.
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::new(id, "Unknown Product", Availability::OutOfStock, 0.0)
    }

    /// Set the delivery time.
    pub fn with_delivery_time(mut self, delivery_time: impl Into<String>) -> Self {
        self.delivery_time = delivery_time.into();
        self
    }

    /// Text indexed for an update of this product.
    pub fn update_description(&self) -> String {
        format!(
            "Name: {}, Price: {}, Availability: {}, Delivery Time: {}",
            self.name, self.price, self.availability, self.delivery_time
        )
    }
}
