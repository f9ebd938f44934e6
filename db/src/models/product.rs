use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Row in the `products` table.
///
/// Amounts are integer cents; `db::catalog` converts them to two-place
/// decimals.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "String(StringLen::N(1000))")]
    pub description: String,
    pub price_cents: i64,
    pub discount_price_cents: Option<i64>,
    pub sub_category_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sub_category::Entity",
        from = "Column::SubCategoryId",
        to = "super::sub_category::Column::Id",
        on_delete = "Cascade"
    )]
    SubCategory,

    #[sea_orm(has_many = "super::product_image::Entity")]
    ProductImage,
}

impl Related<super::sub_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCategory.def()
    }
}

impl Related<super::product_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        title: &str,
        description: &str,
        price_cents: i64,
        discount_price_cents: Option<i64>,
        sub_category_id: i64,
    ) -> Result<Model, DbErr> {
        let product = ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            price_cents: Set(price_cents),
            discount_price_cents: Set(discount_price_cents),
            sub_category_id: Set(sub_category_id),
            ..Default::default()
        };

        product.insert(db).await
    }
}
