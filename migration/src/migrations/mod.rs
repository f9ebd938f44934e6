pub mod m202610170001_create_categories;
pub mod m202610170002_create_sub_categories;
pub mod m202610170003_create_products;
pub mod m202610170004_create_product_images;
