#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Debug, Clone, PartialEq, Eq)]
/// Nutrition facts printed on the pack, per serving.
///
/// Values are kept exactly as printed (`"120 kcal"`, `"3.5g"`), no unit
/// normalization takes place.
pub struct Nutrition {
    /// Energy, e.g. `120 kcal`.
    pub calories: String,
    pub protein: String,
    pub carbohydrates: String,
    pub fat: String,
    pub fiber: String,
}
