//! sea-orm mappings for the catalog tables created by the `migration` crate.

pub mod category;
pub mod product;
pub mod product_image;
pub mod sub_category;

pub use category::Entity as Category;
pub use product::Entity as Product;
pub use product_image::Entity as ProductImage;
pub use sub_category::Entity as SubCategory;
