mod category;
mod data;
mod nutrition;
mod product;
mod store;

pub use category::Category;
pub use nutrition::Nutrition;
pub use product::{Product, ProductSize};
pub use store::Catalog;
