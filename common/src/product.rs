//! Product document model and the known filter vocabularies.

use serde::{Deserialize, Serialize};

pub const AVAILABLE_CATEGORIES: [&str; 4] =
    ["bcaa", "beta alanine", "creatine", "whey protein"];

pub const AVAILABLE_BRANDS: [&str; 3] =
    ["MyProtein", "Optimum Nutrition", "Yamamoto Nutrition"];

/// Category identifiers paired with their display labels.
pub const CATEGORY_OPTIONS: [(&str, &str); 4] = [
    ("bcaa", "BCAA"),
    ("beta alanine", "Beta-Alanine"),
    ("creatine", "Creatine"),
    ("whey protein", "Whey Protein"),
];

/// A catalog product as stored in the `products` collection. The store never
/// mutates these; they only flow from query responses to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub category: String,
    pub price: f64,
    pub suggested_use: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
