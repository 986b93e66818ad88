use serde::{Deserialize, Serialize};

/// A catalog product as returned by the upstream API. Copied into local
/// state on fetch and never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    // Absent for some upstream items (e.g. groceries)
    #[serde(default)]
    pub brand: String,
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// The list envelope shared by the products, by-category, and search
/// endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

/// Inclusive price bounds. An inverted range (min > max) is not rejected;
/// it simply matches nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Newest,
    PriceAsc,
    PriceDesc,
    Rating,
}

/// One optional constraint per filter dimension; an absent field leaves
/// that dimension unconstrained.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterSpec {
    pub category: Option<String>,
    pub price_range: Option<PriceRange>,
    pub min_rating: Option<f64>,
    pub brand: Option<String>,
    pub sort: Option<SortKey>,
}

impl FilterSpec {
    /// True when any dimension must be evaluated client-side. Category is
    /// excluded: a set category is answered entirely by the server path.
    pub fn has_client_filters(&self) -> bool {
        self.price_range.is_some() || self.min_rating.is_some() || self.brand.is_some()
    }
}
