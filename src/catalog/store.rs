use std::collections::HashSet;

use eyre::{bail, ensure, Result};
use tracing::debug;

use crate::catalog::{Category, Product};

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
/// The storefront catalog: every product and category on sale.
///
/// A catalog is built once at startup, either from the bundled snack range
/// with [`Catalog::snacks`] or from a JSON document with
/// [`Catalog::from_json`], and handed to whatever needs it. It is never
/// mutated afterwards, so it can be shared between threads freely.
///
/// ```rust
/// use snack_catalog::Catalog;
///
/// # fn main() -> eyre::Result<()> {
/// let catalog = Catalog::snacks()?;
/// let makhana = catalog.get_product_by_id("makhana01").expect("bundled product");
/// assert!(makhana.featured);
/// assert!(catalog.get_products_by_category("CHIPS").len() > 0);
/// # Ok(())
/// # }
/// ```
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

#[cfg(feature = "serde_io")]
#[derive(serde::Deserialize)]
struct CatalogDocument {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog after checking that the data is consistent.
    ///
    /// Fails when a product has an empty id, a duplicate id, no sizes, a
    /// negative or non-finite price, or a category that no [`Category`]
    /// carries as its name. Category ids must be unique as well.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self> {
        validate(&products, &categories)?;
        debug!(
            products = products.len(),
            categories = categories.len(),
            "catalog loaded"
        );
        Ok(Catalog {
            categories,
            products,
        })
    }

    /// The bundled snack range.
    pub fn snacks() -> Result<Self> {
        Self::new(super::data::products(), super::data::categories())
    }

    /// Parses a catalog from a JSON document with top level `categories`
    /// and `products` arrays, then validates it like [`Catalog::new`].
    #[cfg(feature = "serde_io")]
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.products, document.categories)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Finds the product whose id is exactly `id`.
    pub fn get_product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products whose category equals `category`, ignoring case.
    ///
    /// This is a whole-name comparison, `"chip"` does not match `"Chips"`.
    /// Catalog order is preserved.
    pub fn get_products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| eq_ignore_case(&product.category, category))
            .collect()
    }

    /// Products marked as featured, in catalog order.
    pub fn get_featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|product| product.featured).collect()
    }

    /// Finds the category whose id is exactly `id`.
    pub fn get_category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }
}

/// Unicode lowercase comparison, independent of the process locale.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn validate(products: &[Product], categories: &[Category]) -> Result<()> {
    let mut category_ids = HashSet::new();
    for category in categories {
        ensure!(
            category_ids.insert(category.id.as_str()),
            "Duplicate category id `{}`",
            category.id
        );
    }

    let mut product_ids = HashSet::new();
    for product in products {
        ensure!(!product.id.is_empty(), "Product `{}` has no id", product.name);
        ensure!(
            product_ids.insert(product.id.as_str()),
            "Duplicate product id `{}`",
            product.id
        );
        ensure!(
            !product.sizes.is_empty(),
            "Product `{}` has no sizes",
            product.id
        );
        for size in &product.sizes {
            if !size.price.is_finite() || size.price < 0.0 {
                bail!(
                    "Product `{}` has an invalid price {} for size `{}`",
                    product.id,
                    size.price,
                    size.size
                );
            }
        }
        if !categories
            .iter()
            .any(|category| eq_ignore_case(&category.name, &product.category))
        {
            bail!(
                "Product `{}` refers to unknown category `{}`",
                product.id,
                product.category
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductSize;
    use pretty_assertions::assert_eq;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    fn product(id: &str, category: &str, featured: bool) -> Product {
        Product {
            id: id.into(),
            name: id.to_uppercase(),
            category: category.into(),
            sizes: vec![ProductSize {
                size: "100g".into(),
                price: 99.0,
            }],
            featured,
            ..Default::default()
        }
    }

    fn sample() -> Catalog {
        Catalog::new(
            vec![
                product("makhana01", "Makhana", true),
                product("chips02", "Chips", false),
                product("makhana02", "makhana", false),
            ],
            vec![category("makhana", "Makhana"), category("chips", "Chips")],
        )
        .unwrap()
    }

    #[test]
    fn case_insensitive_equality() {
        assert!(eq_ignore_case("Makhana", "MAKHANA"));
        assert!(eq_ignore_case("Çips", "çIPS"));
        assert!(!eq_ignore_case("Chip", "Chips"));
        assert!(!eq_ignore_case("Chips", "Chip"));
    }

    #[test]
    fn lookup_by_id_is_exact() {
        let catalog = sample();
        assert_eq!(
            catalog.get_product_by_id("makhana01").map(|p| p.id.as_str()),
            Some("makhana01")
        );
        assert_eq!(catalog.get_product_by_id("MAKHANA01"), None);
        assert_eq!(catalog.get_product_by_id(""), None);
    }

    #[test]
    fn category_filter_keeps_catalog_order() {
        let catalog = sample();
        let ids: Vec<_> = catalog
            .get_products_by_category("MaKhAnA")
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["makhana01", "makhana02"]);
        assert!(catalog.get_products_by_category("chip").is_empty());
    }

    #[test]
    fn featured_filter() {
        let catalog = sample();
        let ids: Vec<_> = catalog
            .get_featured_products()
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["makhana01"]);
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(vec![], vec![]).unwrap();
        assert!(catalog.get_featured_products().is_empty());
        assert!(catalog.get_products_by_category("Chips").is_empty());
    }

    #[test]
    fn rejects_duplicate_product_ids() {
        let err = Catalog::new(
            vec![product("chips02", "Chips", false), product("chips02", "Chips", true)],
            vec![category("chips", "Chips")],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Duplicate product id `chips02`");
    }

    #[test]
    fn rejects_duplicate_category_ids() {
        let err = Catalog::new(
            vec![],
            vec![category("chips", "Chips"), category("chips", "Crisps")],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Duplicate category id `chips`");
    }

    #[test]
    fn rejects_product_without_sizes() {
        let mut bare = product("bare01", "Chips", false);
        bare.sizes.clear();
        let err = Catalog::new(vec![bare], vec![category("chips", "Chips")]).unwrap_err();
        assert_eq!(err.to_string(), "Product `bare01` has no sizes");
    }

    #[test]
    fn rejects_negative_and_nan_prices() {
        for price in [-1.0, f64::NAN, f64::INFINITY] {
            let mut odd = product("odd01", "Chips", false);
            odd.sizes[0].price = price;
            assert!(Catalog::new(vec![odd], vec![category("chips", "Chips")]).is_err());
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let err = Catalog::new(
            vec![product("cookie01", "Cookies", false)],
            vec![category("chips", "Chips")],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Product `cookie01` refers to unknown category `Cookies`"
        );
    }

    #[test]
    fn category_lookup() {
        let catalog = sample();
        assert_eq!(
            catalog.get_category_by_id("chips").map(|c| c.name.as_str()),
            Some("Chips")
        );
        assert_eq!(catalog.get_category_by_id("Chips"), None);
    }
}
