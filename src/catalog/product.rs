use crate::catalog::Nutrition;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Debug, Clone, PartialEq)]
/// A pack size and its price.
pub struct ProductSize {
    /// Label of the pack, e.g. `100g` or `Family Pack`.
    pub size: String,
    /// Price of the pack in the store currency.
    pub price: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Debug, Clone, PartialEq)]
/// A snack sold in the store.
///
/// Products are looked up through [`Catalog`](crate::Catalog) and are never
/// modified after the catalog is built.
pub struct Product {
    /// Stable identifier, used in product URLs.
    pub id: String,
    /// Product name
    pub name: String,
    pub description: String,
    /// Name of the category the product belongs to.
    /// Compared case-insensitively against [`Category::name`](crate::Category).
    pub category: String,
    /// Path or URL of the product shot.
    pub image: String,
    /// Available pack sizes, in display order.
    pub sizes: Vec<ProductSize>,
    pub ingredients: String,
    pub nutrition: Nutrition,
    /// Whether the product is promoted on the home page.
    pub featured: bool,
}

impl Product {
    /// The cheapest pack of this product, if it has any sizes at all.
    ///
    /// On ties the first pack in display order wins.
    pub fn lowest_price(&self) -> Option<&ProductSize> {
        self.sizes.iter().fold(None, |cheapest, size| match cheapest {
            Some(current) if current.price <= size.price => Some(current),
            _ => Some(size),
        })
    }
}
