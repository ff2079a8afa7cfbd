//! Shared catalog filter models and the query wire payload.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog_const::DEFAULT_PRICE_RANGE;
use crate::product::{AVAILABLE_BRANDS, AVAILABLE_CATEGORIES};


/// The user's current catalog selection. An empty `categories` or `brands`
/// set is an explicit match-nothing state, not an unfiltered one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub categories: BTreeSet<String>,
    pub brands: BTreeSet<String>,
    pub sort: SortOrder,
    pub price: PriceSelection,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            categories: AVAILABLE_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            brands: AVAILABLE_BRANDS.iter().map(|b| b.to_string()).collect(),
            sort: SortOrder::None,
            price: PriceSelection::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
}

/// Sort orders paired with their display labels, in sidebar order.
pub const SORT_OPTIONS: [(SortOrder, &str); 3] = [
    (SortOrder::None, "None"),
    (SortOrder::PriceAsc, "Price: Low to High"),
    (SortOrder::PriceDesc, "Price: High to Low"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSelection {
    #[serde(rename = "isCustom")]
    pub is_custom: bool,
    pub range: (f64, f64),
}

impl Default for PriceSelection {
    fn default() -> Self {
        Self { is_custom: false, range: DEFAULT_PRICE_RANGE }
    }
}

/// Trims and lower-cases a raw search box value. The empty result means
/// "no text filter".
pub fn normalize_search_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}


/// Wire payload of a catalog query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQueryRequest {
    pub filter: CatalogFilterPayload,
    #[serde(rename = "searchQuery")]
    pub search_query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilterPayload {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub sort: SortOrder,
    #[serde(rename = "priceRange")]
    pub price_range: (f64, f64),
}

impl CatalogQueryRequest {
    /// Builds the payload from store state, normalizing an empty search
    /// query to `None`.
    pub fn from_state(filter: &ProductFilter, search_query: &str) -> Self {
        let query = normalize_search_query(search_query);
        Self {
            filter: CatalogFilterPayload {
                categories: filter.categories.iter().cloned().collect(),
                brands: filter.brands.iter().cloned().collect(),
                sort: filter.sort,
                price_range: filter.price.range,
            },
            search_query: if query.is_empty() { None } else { Some(query) },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterValidationError {
    pub message: String,
}

impl FilterValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl fmt::Display for FilterValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid filter payload: {}", self.message)
    }
}

impl std::error::Error for FilterValidationError {}

impl CatalogFilterPayload {
    /// Rejects identifiers outside the known vocabularies and malformed
    /// price bounds. The store always builds valid payloads; this guards the
    /// service boundary against hand-crafted requests.
    pub fn validate(&self) -> Result<(), FilterValidationError> {
        for category in &self.categories {
            if !AVAILABLE_CATEGORIES.contains(&category.as_str()) {
                return Err(FilterValidationError::new(format!(
                    "unknown category {category:?}"
                )));
            }
        }
        for brand in &self.brands {
            if !AVAILABLE_BRANDS.contains(&brand.as_str()) {
                return Err(FilterValidationError::new(format!("unknown brand {brand:?}")));
            }
        }
        let (low, high) = self.price_range;
        if !low.is_finite() || !high.is_finite() || low < 0.0 {
            return Err(FilterValidationError::new(
                "price bounds must be finite and non-negative",
            ));
        }
        if low > high {
            return Err(FilterValidationError::new(format!(
                "price range is inverted: [{low}, {high}]"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_full_vocabulary() {
        let filter = ProductFilter::default();
        assert_eq!(filter.categories.len(), AVAILABLE_CATEGORIES.len());
        assert_eq!(filter.brands.len(), AVAILABLE_BRANDS.len());
        assert_eq!(filter.sort, SortOrder::None);
        assert!(!filter.price.is_custom);
        assert_eq!(filter.price.range, DEFAULT_PRICE_RANGE);
    }

    #[test]
    fn test_normalize_search_query() {
        assert_eq!(normalize_search_query("  Creatine "), "creatine");
        assert_eq!(normalize_search_query("creatine"), "creatine");
        assert_eq!(normalize_search_query("   "), "");
    }

    #[test]
    fn test_payload_from_default_state_has_full_selection_and_no_query() {
        let request = CatalogQueryRequest::from_state(&ProductFilter::default(), "");
        assert_eq!(request.filter.categories.len(), AVAILABLE_CATEGORIES.len());
        assert_eq!(request.filter.brands.len(), AVAILABLE_BRANDS.len());
        assert_eq!(request.filter.price_range, DEFAULT_PRICE_RANGE);
        assert_eq!(request.search_query, None);
    }

    #[test]
    fn test_payload_normalizes_search_query() {
        let request = CatalogQueryRequest::from_state(&ProductFilter::default(), " Creatine ");
        assert_eq!(request.search_query.as_deref(), Some("creatine"));
    }

    #[test]
    fn test_sort_order_wire_names() {
        let to_name = |sort: SortOrder| serde_json::to_string(&sort).unwrap();
        assert_eq!(to_name(SortOrder::None), "\"none\"");
        assert_eq!(to_name(SortOrder::PriceAsc), "\"price-asc\"");
        assert_eq!(to_name(SortOrder::PriceDesc), "\"price-desc\"");
    }

    #[test]
    fn test_validate_accepts_default_payload() {
        let request = CatalogQueryRequest::from_state(&ProductFilter::default(), "");
        assert!(request.filter.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_identifiers() {
        let mut payload =
            CatalogQueryRequest::from_state(&ProductFilter::default(), "").filter;
        payload.categories.push("steroids".to_string());
        assert!(payload.validate().is_err());

        let mut payload =
            CatalogQueryRequest::from_state(&ProductFilter::default(), "").filter;
        payload.brands.push("Unknown Labs".to_string());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_price_bounds() {
        let mut payload =
            CatalogQueryRequest::from_state(&ProductFilter::default(), "").filter;
        payload.price_range = (50.0, 25.0);
        assert!(payload.validate().is_err());

        payload.price_range = (f64::NAN, 100.0);
        assert!(payload.validate().is_err());

        payload.price_range = (-1.0, 100.0);
        assert!(payload.validate().is_err());
    }
}
