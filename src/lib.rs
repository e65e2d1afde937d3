//! Product catalog of the Crunchwise snack store.
//!
//! `Catalog` holds every product and category and answers the storefront's
//! lookups: a product by id, the products of a category and the featured
//! products. `Sitemap` and `HeroCarousel` are built from a catalog to list
//! the store's pages and rotate the home page banners.
//!
//! Feature Flags:
//! - `serde_io`: Enables serde support for the structs and loading a
//!   catalog from JSON. (default)

mod carousel;
mod catalog;
mod sitemap;

pub use carousel::{CarouselHandle, HeroCarousel, HeroSlide};
pub use catalog::{Catalog, Category, Nutrition, Product, ProductSize};
pub use sitemap::{ChangeFrequency, Sitemap, SitemapEntry};
pub use url::Url;

/// Origin of the live storefront.
pub const DEFAULT_BASE_URL: &str = "https://www.crunchwise.in";
