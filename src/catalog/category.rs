#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Debug, Clone, PartialEq, Eq)]
/// A named grouping of products, e.g. `Makhana` or `Chips`.
pub struct Category {
    /// Identifier used in category URLs.
    pub id: String,
    /// Display name. Products refer to their category by this name.
    pub name: String,
    pub description: String,
    /// Path or URL of the category banner.
    pub image: String,
}
