//! Catalog schema, expressed as sea-orm migrations.
//!
//! Tables: `categories`, `sub_categories`, `products`, `product_images`.
//! Monetary amounts are stored as integer cents.

pub use sea_orm_migration::prelude::*;

mod migrations;
mod migrator;

pub use migrator::Migrator;
