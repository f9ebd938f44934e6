use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202610170001_create_categories::Migration),
            Box::new(migrations::m202610170002_create_sub_categories::Migration),
            Box::new(migrations::m202610170003_create_products::Migration),
            Box::new(migrations::m202610170004_create_product_images::Migration),
        ]
    }
}
