use db::catalog::{MONEY_SCALE, NewProduct, SubCategory, round_money};
use rand::{Rng, seq::SliceRandom};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::settings::SeedSettings;
use crate::taxonomy::ImagePools;

/// Builds randomized sample products for one sub-category.
///
/// The shape of the output is fixed by [`SeedSettings`]; only prices,
/// discounts, image picks and the product count are drawn from the caller's
/// random source.
pub struct ProductGenerator<'a> {
    pools: &'a ImagePools,
    settings: &'a SeedSettings,
}

impl<'a> ProductGenerator<'a> {
    pub fn new(pools: &'a ImagePools, settings: &'a SeedSettings) -> Self {
        Self { pools, settings }
    }

    /// Products for `sub_category`, numbered from 1. `category_name` is the
    /// owning top-level category; it picks the image pool and appears in the
    /// description.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sub_category: &SubCategory,
        category_name: &str,
    ) -> Vec<NewProduct> {
        let range = &self.settings.products_per_sub_category;
        let count = if range.is_empty() {
            0
        } else {
            rng.gen_range(range.clone())
        };

        (1..=count)
            .map(|index| self.product(rng, sub_category, category_name, index))
            .collect()
    }

    fn product<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sub_category: &SubCategory,
        category_name: &str,
        index: u32,
    ) -> NewProduct {
        let price = self.random_price(rng);
        let discount_price = rng
            .gen_bool(self.settings.discount_probability())
            .then(|| self.discount_for(price));

        NewProduct {
            title: title(&sub_category.name, index),
            description: description(&sub_category.name, index, category_name),
            price,
            discount_price,
            images: self.random_images(rng, category_name),
            sub_category_id: sub_category.id,
        }
    }

    /// Uniform price in `[min_price, max_price)`, rounded half-up to cents.
    ///
    /// A draw that rounds up onto `max_price` is pulled down one cent.
    pub fn random_price<R: Rng + ?Sized>(&self, rng: &mut R) -> Decimal {
        let min = self.settings.min_price;
        let max = self.settings.max_price;
        let min_f = min.to_f64().unwrap_or_default();
        let max_f = max.to_f64().unwrap_or(min_f);

        let r: f64 = rng.gen_range(0.0..1.0);
        let raw = Decimal::from_f64(min_f + (max_f - min_f) * r).unwrap_or(min);
        let price = round_money(raw);

        let floor = round_money(min);
        let ceiling = round_money(max - Decimal::new(1, MONEY_SCALE));
        if price >= max {
            ceiling
        } else if price < floor {
            floor
        } else {
            price
        }
    }

    /// `price * discount_rate`, rounded half-up to cents.
    pub fn discount_for(&self, price: Decimal) -> Decimal {
        round_money(price * self.settings.discount_rate)
    }

    /// Independent draws with replacement from the category's pool.
    pub fn random_images<R: Rng + ?Sized>(&self, rng: &mut R, category_name: &str) -> Vec<String> {
        let pool = self.pools.pool_for(category_name);
        (0..self.settings.images_per_product)
            .filter_map(|_| pool.choose(rng).cloned())
            .collect()
    }
}

pub fn title(sub_category_name: &str, index: u32) -> String {
    format!("{sub_category_name} {index} - Premium Edition")
}

pub fn description(sub_category_name: &str, index: u32, category_name: &str) -> String {
    format!(
        "Experience the best quality with our {sub_category_name} {index}. \
         This product features state-of-the-art design and premium materials suitable for all your needs. \
         Perfect for daily use and highly durable. \
         Order now and enjoy the excellence of {category_name}."
    )
}
