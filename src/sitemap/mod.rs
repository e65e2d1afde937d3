mod sitemap;

pub use sitemap::{ChangeFrequency, Sitemap, SitemapEntry};
