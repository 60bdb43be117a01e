//! In-memory product catalog.
//!
//! Holds the current state of every known product. Owned by the caller and
//! passed into the update loop by mutable reference.

use std::collections::HashMap;

use catalog_feed_shared::{Availability, Product};

/// Products the feed knows about at startup: `(id, name, availability, price)`.
const PREDEFINED_PRODUCTS: &[(&str, &str, Availability, f64)] = &[
    ("1", "Organic Bananas", Availability::InStock, 2.49),
    ("2", "Fresh Whole Milk", Availability::InStock, 3.99),
    ("3", "Organic Free-Range Eggs", Availability::LowStock, 4.29),
    ("4", "Greek Yogurt", Availability::InStock, 3.79),
    ("5", "Multigrain Bread", Availability::InStock, 3.49),
    ("6", "Chicken Breast", Availability::InStock, 6.99),
    ("7", "Fresh Salmon Fillet", Availability::LimitedStock, 12.99),
    ("8", "Organic Spinach", Availability::InStock, 2.99),
    ("9", "Cherry Tomatoes", Availability::InStock, 3.29),
    ("10", "Almond Milk", Availability::InStock, 4.49),
    ("11", "Extra Virgin Olive Oil", Availability::InStock, 7.99),
    ("12", "Organic Apples", Availability::InStock, 4.99),
    ("13", "Ground Beef", Availability::LowStock, 5.99),
    ("14", "Tofu", Availability::InStock, 2.79),
    ("15", "Pasta", Availability::InStock, 1.99),
    ("16", "Coconut Water", Availability::InStock, 3.49),
    ("17", "Natural Honey", Availability::LimitedStock, 6.29),
    ("18", "Fresh Mozzarella", Availability::InStock, 4.99),
    ("19", "Quinoa", Availability::InStock, 5.49),
    ("20", "Plant-Based Burger Patties", Availability::LowStock, 5.79),
];

/// Mutable table of products keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    /// The 20 predefined grocery products with their baseline state.
    pub fn predefined() -> Self {
        Self::from_products(
            PREDEFINED_PRODUCTS
                .iter()
                .map(|(id, name, availability, price)| {
                    Product::new(*id, *name, *availability, *price)
                }),
        )
    }

    /// Build a catalog from arbitrary products. Later duplicates win.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|p| (p.id.clone(), p))
                .collect(),
        }
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Whether `id` is in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    /// Apply a generated update to the stored entry with the same id.
    ///
    /// Availability, price and delivery time are copied; id and name are
    /// never touched. Returns the updated entry, or `None` if the id is not
    /// in the catalog.
    pub fn apply_update(&mut self, update: &Product) -> Option<&Product> {
        let entry = self.products.get_mut(&update.id)?;
        entry.availability = update.availability;
        entry.price = update.price;
        entry.delivery_time = update.delivery_time.clone();
        Some(entry)
    }

    /// Ids in numeric order where possible, lexical otherwise.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.products.keys().map(String::as_str).collect();
        ids.sort_by(|a, b| match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            _ => a.cmp(b),
        });
        ids
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_feed_shared::NOT_AVAILABLE;

    #[test]
    fn test_predefined_catalog() {
        let catalog = ProductCatalog::predefined();

        assert_eq!(catalog.len(), 20);
        let expected: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
        assert_eq!(catalog.ids(), expected.iter().map(String::as_str).collect::<Vec<_>>());

        let bananas = catalog.get("1").unwrap();
        assert_eq!(bananas.name, "Organic Bananas");
        assert_eq!(bananas.availability, Availability::InStock);
        assert_eq!(bananas.price, 2.49);
        assert_eq!(bananas.delivery_time, NOT_AVAILABLE);

        let patties = catalog.get("20").unwrap();
        assert_eq!(patties.name, "Plant-Based Burger Patties");
        assert_eq!(patties.availability, Availability::LowStock);
    }

    #[test]
    fn test_apply_update_keeps_name() {
        let mut catalog = ProductCatalog::predefined();
        let update = Product::new("7", "Something Else", Availability::InStock, 9.99)
            .with_delivery_time("30-45 minutes");

        let updated = catalog.apply_update(&update).unwrap().clone();

        assert_eq!(updated.id, "7");
        assert_eq!(updated.name, "Fresh Salmon Fillet");
        assert_eq!(updated.availability, Availability::InStock);
        assert_eq!(updated.price, 9.99);
        assert_eq!(updated.delivery_time, "30-45 minutes");
        assert_eq!(catalog.get("7"), Some(&updated));
    }

    #[test]
    fn test_apply_update_unknown_id() {
        let mut catalog = ProductCatalog::predefined();
        let before = catalog.clone();

        assert!(catalog.apply_update(&Product::unknown("42")).is_none());
        assert!(!catalog.contains("42"));
        assert_eq!(catalog.len(), before.len());
    }

    #[test]
    fn test_from_products() {
        let catalog = ProductCatalog::from_products(vec![
            Product::new("a", "First", Availability::InStock, 1.0),
            Product::new("a", "Second", Availability::InStock, 2.0),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().name, "Second");
        assert!(ProductCatalog::default().is_empty());
    }
}
