//! The storage collaborator used by the catalog seeder.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, TransactionTrait,
};

use crate::catalog::{
    Category, DESCRIPTION_MAX_LEN, NewProduct, Product, SubCategory, from_cents, to_cents,
};
use crate::models::{category, product, product_image, sub_category};

/// Persistence operations required to seed the catalog.
///
/// Identities are assigned by the store. Every failure is reported as a
/// [`DbErr`] and nothing is retried.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn category_count(&self) -> Result<u64, DbErr>;

    async fn create_category(&self, name: &str) -> Result<Category, DbErr>;

    async fn create_sub_category(&self, name: &str, category_id: i64)
    -> Result<SubCategory, DbErr>;

    async fn create_product(&self, product: NewProduct) -> Result<Product, DbErr>;
}

/// [`CatalogStore`] backed by any sea-orm connection, including a
/// `DatabaseTransaction`.
pub struct SeaOrmCatalogStore<'c, C> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait> SeaOrmCatalogStore<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    pub async fn sub_category_count(&self) -> Result<u64, DbErr> {
        sub_category::Entity::find().count(self.conn).await
    }

    pub async fn product_count(&self) -> Result<u64, DbErr> {
        product::Entity::find().count(self.conn).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, DbErr> {
        let rows = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    pub async fn sub_categories(&self) -> Result<Vec<SubCategory>, DbErr> {
        let rows = sub_category::Entity::find()
            .order_by_asc(sub_category::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(SubCategory::from).collect())
    }

    /// All products in insertion order, each with its images in list order.
    pub async fn products(&self) -> Result<Vec<Product>, DbErr> {
        let rows = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(self.conn)
            .await?;

        let mut images: HashMap<i64, Vec<String>> = HashMap::new();
        for image in product_image::Entity::find()
            .order_by_asc(product_image::Column::ProductId)
            .order_by_asc(product_image::Column::Position)
            .all(self.conn)
            .await?
        {
            images.entry(image.product_id).or_default().push(image.image_url);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let urls = images.remove(&row.id).unwrap_or_default();
                product_from_row(row, urls)
            })
            .collect())
    }
}

#[async_trait]
impl<'c, C: ConnectionTrait + TransactionTrait> CatalogStore for SeaOrmCatalogStore<'c, C> {
    async fn category_count(&self) -> Result<u64, DbErr> {
        category::Entity::find().count(self.conn).await
    }

    async fn create_category(&self, name: &str) -> Result<Category, DbErr> {
        let row = category::Model::create(self.conn, name).await?;
        tracing::debug!(id = row.id, name = %row.name, "created category");
        Ok(row.into())
    }

    async fn create_sub_category(
        &self,
        name: &str,
        category_id: i64,
    ) -> Result<SubCategory, DbErr> {
        let row = sub_category::Model::create(self.conn, name, category_id).await?;
        tracing::debug!(id = row.id, category_id, name = %row.name, "created sub-category");
        Ok(row.into())
    }

    /// Writes the product row and its image rows as one unit. On a
    /// transaction-scoped connection this nests as a savepoint.
    async fn create_product(&self, new_product: NewProduct) -> Result<Product, DbErr> {
        let (price_cents, discount_price_cents) = check_new_product(&new_product)?;

        let txn = self.conn.begin().await?;
        let written = async {
            let row = product::Model::create(
                &txn,
                &new_product.title,
                &new_product.description,
                price_cents,
                discount_price_cents,
                new_product.sub_category_id,
            )
            .await?;
            product_image::Model::create_all(&txn, row.id, &new_product.images).await?;
            Ok::<_, DbErr>(row.id)
        }
        .await;

        match written {
            Ok(id) => {
                txn.commit().await?;
                Ok(new_product.into_product(id))
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback of partial product failed");
                }
                Err(err)
            }
        }
    }
}

/// Enforces the product bounds the schema cannot express and returns the
/// amounts in cents.
fn check_new_product(product: &NewProduct) -> Result<(i64, Option<i64>), DbErr> {
    if product.description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(DbErr::Custom(format!(
            "description of '{}' exceeds {} characters",
            product.title, DESCRIPTION_MAX_LEN
        )));
    }
    if product.images.is_empty() {
        return Err(DbErr::Custom(format!(
            "product '{}' has no images",
            product.title
        )));
    }

    let price_cents = to_cents(product.price).ok_or_else(|| {
        DbErr::Custom(format!("price {} is not a two-place amount", product.price))
    })?;
    let discount_price_cents = match product.discount_price {
        Some(discount) => Some(to_cents(discount).ok_or_else(|| {
            DbErr::Custom(format!("discount price {} is not a two-place amount", discount))
        })?),
        None => None,
    };

    Ok((price_cents, discount_price_cents))
}

fn product_from_row(row: product::Model, images: Vec<String>) -> Product {
    Product {
        id: row.id,
        title: row.title,
        description: row.description,
        price: from_cents(row.price_cents),
        discount_price: row.discount_price_cents.map(from_cents),
        images,
        sub_category_id: row.sub_category_id,
    }
}

impl From<category::Model> for Category {
    fn from(row: category::Model) -> Self {
        Category {
            id: row.id,
            name: row.name,
        }
    }
}

impl From<sub_category::Model> for SubCategory {
    fn from(row: sub_category::Model) -> Self {
        SubCategory {
            id: row.id,
            name: row.name,
            category_id: row.category_id,
        }
    }
}
