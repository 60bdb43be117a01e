//! Simulated product updates.
//!
//! Each call to `RecordGenerator::generate` picks a product id at random and
//! draws a new availability, price and delivery time for it. No attempt is
//! made to cover every id or to avoid repeats.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::catalog::ProductCatalog;
use crate::errors::FeedError;
use catalog_feed_shared::{Availability, Product};

/// Availability states a live update can report.
pub const AVAILABILITY_OPTIONS: [Availability; 3] = [
    Availability::InStock,
    Availability::LowStock,
    Availability::LimitedStock,
];

/// Delivery windows a live update can report.
pub const DELIVERY_TIME_OPTIONS: [&str; 3] = ["15-30 minutes", "30-45 minutes", "45-60 minutes"];

/// Sampling bounds for the generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    ids: RangeInclusive<u32>,
    prices: RangeInclusive<f64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            ids: 1..=20,
            prices: 1.99..=19.99,
        }
    }
}

impl GeneratorConfig {
    /// Create a config sampling ids from `ids` and prices from `prices`.
    pub fn new(ids: RangeInclusive<u32>, prices: RangeInclusive<f64>) -> Result<Self, FeedError> {
        if ids.is_empty() {
            return Err(FeedError::configuration(format!(
                "Empty id range {}..={}",
                ids.start(),
                ids.end()
            )));
        }
        let (low, high) = (*prices.start(), *prices.end());
        if !(low.is_finite() && high.is_finite() && low >= 0.0 && low <= high) {
            return Err(FeedError::configuration(format!(
                "Invalid price range {}..={}",
                prices.start(),
                prices.end()
            )));
        }
        Ok(Self { ids, prices })
    }

    pub fn ids(&self) -> &RangeInclusive<u32> {
        &self.ids
    }

    pub fn prices(&self) -> &RangeInclusive<f64> {
        &self.prices
    }
}

/// Produces one simulated product update per call.
#[derive(Debug, Clone, Default)]
pub struct RecordGenerator {
    config: GeneratorConfig,
}

impl RecordGenerator {
    /// Create a generator with the default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom bounds.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Sample one update.
    ///
    /// The product name always comes from `catalog`. An id missing from the
    /// catalog yields `Product::unknown`, which callers discard.
    pub fn generate<R: Rng>(&self, catalog: &ProductCatalog, rng: &mut R) -> Product {
        let id = rng.gen_range(self.config.ids.clone()).to_string();

        let Some(existing) = catalog.get(&id) else {
            return Product::unknown(id);
        };

        let availability = AVAILABILITY_OPTIONS[rng.gen_range(0..AVAILABILITY_OPTIONS.len())];
        let price = round_price(rng.gen_range(self.config.prices.clone()));
        let delivery_time = DELIVERY_TIME_OPTIONS[rng.gen_range(0..DELIVERY_TIME_OPTIONS.len())];

        Product::new(id, existing.name.clone(), availability, price)
            .with_delivery_time(delivery_time)
    }
}

/// Round to cents.
fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_feed_shared::NOT_AVAILABLE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_rounded(price: f64) -> bool {
        ((price * 100.0).round() - price * 100.0).abs() < 1e-6
    }

    #[test]
    fn test_generated_fields_are_in_bounds() {
        let catalog = ProductCatalog::predefined();
        let generator = RecordGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..2000 {
            let product = generator.generate(&catalog, &mut rng);

            assert!((1.99..=19.99).contains(&product.price), "price {}", product.price);
            assert!(is_rounded(product.price), "price {}", product.price);
            assert!(AVAILABILITY_OPTIONS.contains(&product.availability));
            assert!(DELIVERY_TIME_OPTIONS.contains(&product.delivery_time.as_str()));
        }
    }

    #[test]
    fn test_name_comes_from_catalog() {
        let catalog = ProductCatalog::predefined();
        let generator = RecordGenerator::new();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..2000 {
            let product = generator.generate(&catalog, &mut rng);
            let stored = catalog.get(&product.id).unwrap();
            assert_eq!(product.name, stored.name);
            seen.insert(product.id);
        }

        // With 2000 draws every one of the 20 ids shows up.
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let catalog = ProductCatalog::predefined();
        let generator = RecordGenerator::new();
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            assert_eq!(
                generator.generate(&catalog, &mut a),
                generator.generate(&catalog, &mut b)
            );
        }
    }

    #[test]
    fn test_id_outside_catalog_yields_unknown() {
        let catalog = ProductCatalog::predefined();
        let config = GeneratorConfig::new(21..=50, 1.99..=19.99).unwrap();
        let generator = RecordGenerator::with_config(config);
        let mut rng = StdRng::seed_from_u64(5);

        let product = generator.generate(&catalog, &mut rng);

        assert!(!catalog.contains(&product.id));
        assert_eq!(product.name, "Unknown Product");
        assert_eq!(product.availability, Availability::OutOfStock);
        assert_eq!(product.price, 0.0);
        assert_eq!(product.delivery_time, NOT_AVAILABLE);
    }

    #[test]
    fn test_invalid_config() {
        #[allow(clippy::reversed_empty_ranges)]
        let empty_ids = GeneratorConfig::new(5..=1, 1.0..=2.0);
        assert!(matches!(empty_ids, Err(FeedError::ConfigurationError(_))));

        assert!(GeneratorConfig::new(1..=20, 3.0..=2.0).is_err());
        assert!(GeneratorConfig::new(1..=20, -1.0..=2.0).is_err());
        assert!(GeneratorConfig::new(1..=1, 2.0..=2.0).is_ok());
    }

    #[test]
    fn test_non_finite_prices_are_rejected() {
        assert!(GeneratorConfig::new(1..=20, 0.0..=f64::INFINITY).is_err());
        assert!(GeneratorConfig::new(1..=20, f64::NEG_INFINITY..=2.0).is_err());
        assert!(GeneratorConfig::new(1..=20, f64::NAN..=2.0).is_err());
    }

    #[test]
    fn test_round_price() {
        assert_eq!(round_price(2.494), 2.49);
        assert_eq!(round_price(2.496), 2.5);
        assert_eq!(round_price(19.99), 19.99);
    }
}
