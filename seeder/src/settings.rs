use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use util::config;

/// Knobs of the product generator. `Default` gives the storefront's sample
/// data: 8 to 10 products per sub-category, 3 images each, prices in
/// `[20.00, 500.00)` and a 15% discount on about half the products.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSettings {
    pub products_per_sub_category: RangeInclusive<u32>,
    pub images_per_product: usize,
    /// Multiplier applied to the price of discounted products.
    pub discount_rate: Decimal,
    /// Inclusive lower price bound.
    pub min_price: Decimal,
    /// Exclusive upper price bound.
    pub max_price: Decimal,
    discount_probability: f64,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            products_per_sub_category: 8..=10,
            images_per_product: 3,
            discount_rate: Decimal::new(85, 2),
            min_price: Decimal::new(2_000, 2),
            max_price: Decimal::new(50_000, 2),
            discount_probability: config::DEFAULT_DISCOUNT_PROBABILITY,
        }
    }
}

impl SeedSettings {
    /// Defaults, with the discount share taken from `SEED_DISCOUNT_PROBABILITY`.
    pub fn from_config() -> Self {
        Self::default().with_discount_probability(config::seed_discount_probability())
    }

    /// Sets the share of discounted products, clamped to `[0, 1]`. NaN
    /// keeps the default.
    pub fn with_discount_probability(mut self, probability: f64) -> Self {
        self.discount_probability = if probability.is_nan() {
            config::DEFAULT_DISCOUNT_PROBABILITY
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// Sets how many products each sub-category receives.
    pub fn with_products_per_sub_category(mut self, range: RangeInclusive<u32>) -> Self {
        self.products_per_sub_category = range;
        self
    }

    pub fn discount_probability(&self) -> f64 {
        self.discount_probability
    }
}
