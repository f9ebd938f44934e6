use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// One image URL of a product. `position` preserves list order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub product_id: i64,
    pub position: i32,
    #[sea_orm(column_type = "Text")]
    pub image_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts `urls` for `product_id`, numbering positions from 0.
    pub async fn create_all<C: ConnectionTrait>(
        db: &C,
        product_id: i64,
        urls: &[String],
    ) -> Result<(), DbErr> {
        if urls.is_empty() {
            return Ok(());
        }

        let rows = urls.iter().enumerate().map(|(position, url)| ActiveModel {
            product_id: Set(product_id),
            position: Set(position as i32),
            image_url: Set(url.clone()),
            ..Default::default()
        });

        Entity::insert_many(rows).exec(db).await?;
        Ok(())
    }
}
