//! Plain catalog records handed to and returned by [`crate::store::CatalogStore`].
//!
//! These types carry no persistence metadata. The table mapping lives in
//! [`crate::models`] and the schema in the `migration` crate.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Maximum number of characters in a product description.
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// Number of fraction digits carried by every monetary amount.
pub const MONEY_SCALE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
}

/// A persisted product.
///
/// The JSON form omits the owning sub-category; amounts serialize as
/// strings so the two fraction digits survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub images: Vec<String>,
    #[serde(skip_serializing)]
    pub sub_category_id: i64,
}

/// A product that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub images: Vec<String>,
    pub sub_category_id: i64,
}

impl NewProduct {
    /// Attaches the identity assigned by the store.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            discount_price: self.discount_price,
            images: self.images,
            sub_category_id: self.sub_category_id,
        }
    }
}

/// Converts an amount with at most two fraction digits to integer cents.
///
/// Returns `None` for amounts with finer precision or outside `i64` range.
pub fn to_cents(amount: Decimal) -> Option<i64> {
    if amount.round_dp(MONEY_SCALE) != amount {
        return None;
    }
    let mut scaled = amount;
    scaled.rescale(MONEY_SCALE);
    i64::try_from(scaled.mantissa()).ok()
}

pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, MONEY_SCALE)
}

/// Rounds half away from zero to two places and pins the scale at two, so
/// `20` becomes `20.00`.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn cents_conversion_accepts_up_to_two_places() {
        assert_eq!(to_cents(dec("499.99")), Some(49_999));
        assert_eq!(to_cents(dec("20")), Some(2_000));
        assert_eq!(to_cents(dec("17.1")), Some(1_710));
        assert_eq!(to_cents(dec("0.005")), None);
        assert_eq!(to_cents(dec("12.340")), Some(1_234));
    }

    #[test]
    fn from_cents_always_has_scale_two() {
        let price = from_cents(2_000);
        assert_eq!(price.scale(), MONEY_SCALE);
        assert_eq!(price.to_string(), "20.00");
    }

    #[test]
    fn round_money_rounds_half_up_and_fixes_scale() {
        assert_eq!(round_money(dec("17.085")).to_string(), "17.09");
        assert_eq!(round_money(dec("16.9915")).to_string(), "16.99");
        assert_eq!(round_money(dec("-2.345")).to_string(), "-2.35");
        assert_eq!(round_money(dec("85")).to_string(), "85.00");
        assert_eq!(round_money(dec("85")).scale(), MONEY_SCALE);
    }

    #[test]
    fn product_json_hides_sub_category_and_uses_camel_case() {
        let product = NewProduct {
            title: "Audio 1 - Premium Edition".into(),
            description: "desc".into(),
            price: dec("100.00"),
            discount_price: Some(dec("85.00")),
            images: vec!["https://img/a".into()],
            sub_category_id: 7,
        }
        .into_product(3);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["discountPrice"], "85.00");
        assert_eq!(json["price"], "100.00");
        assert!(json.get("subCategoryId").is_none());
        assert!(json.get("sub_category_id").is_none());
    }

    #[test]
    fn missing_discount_serializes_as_null() {
        let product = NewProduct {
            title: "t".into(),
            description: "d".into(),
            price: dec("20.00"),
            discount_price: None,
            images: vec!["u".into()],
            sub_category_id: 1,
        }
        .into_product(1);

        let json = serde_json::to_value(&product).unwrap();
        assert!(json["discountPrice"].is_null());
    }
}
