//! Filter-document builders for catalog queries.

use mongodb::bson::{doc, Document};

use common::catalog_query::{CatalogQueryRequest, SortOrder};

/// Builds the `find` filter for a validated request: `$in` over the selected
/// categories and brands, the price window, and an optional case-insensitive
/// name match.
pub fn build_product_filter(request: &CatalogQueryRequest) -> Document {
    let (low, high) = request.filter.price_range;
    let mut filter = doc! {
        "type": { "$in": request.filter.categories.clone() },
        "brand": { "$in": request.filter.brands.clone() },
        "price": { "$gte": low, "$lte": high },
    };

    if let Some(query) = &request.search_query {
        if !query.is_empty() {
            filter.insert(
                "name",
                doc! { "$regex": escape_regex(query), "$options": "i" },
            );
        }
    }

    filter
}

/// Sort document per requested order; `None` leaves the server-default order.
pub fn build_sort_document(sort: SortOrder) -> Option<Document> {
    match sort {
        SortOrder::None => None,
        SortOrder::PriceAsc => Some(doc! { "price": 1 }),
        SortOrder::PriceDesc => Some(doc! { "price": -1 }),
    }
}

/// Quotes regex metacharacters so the search text matches literally.
pub fn escape_regex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '.' | '*' | '+' | '?' | '^' | '$' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::catalog_query::{CatalogQueryRequest, ProductFilter};

    fn request_for(search_query: &str) -> CatalogQueryRequest {
        CatalogQueryRequest::from_state(&ProductFilter::default(), search_query)
    }

    #[test]
    fn test_filter_document_without_query_has_no_name_clause() {
        let filter = build_product_filter(&request_for(""));
        assert!(filter.get("name").is_none());
        assert!(filter.get("type").is_some());
        assert!(filter.get("brand").is_some());
        assert_eq!(
            filter.get_document("price").unwrap(),
            &doc! { "$gte": 0.0, "$lte": 100.0 }
        );
    }

    #[test]
    fn test_filter_document_with_query_matches_name_case_insensitively() {
        let filter = build_product_filter(&request_for("creatine"));
        assert_eq!(
            filter.get_document("name").unwrap(),
            &doc! { "$regex": "creatine", "$options": "i" }
        );
    }

    #[test]
    fn test_filter_document_selection_sets() {
        let mut selection = ProductFilter::default();
        selection.brands.retain(|b| b == "MyProtein");
        let request = CatalogQueryRequest::from_state(&selection, "");
        let filter = build_product_filter(&request);
        assert_eq!(
            filter.get_document("brand").unwrap(),
            &doc! { "$in": ["MyProtein"] }
        );
    }

    #[test]
    fn test_sort_documents() {
        assert_eq!(build_sort_document(SortOrder::None), None);
        assert_eq!(
            build_sort_document(SortOrder::PriceAsc),
            Some(doc! { "price": 1 })
        );
        assert_eq!(
            build_sort_document(SortOrder::PriceDesc),
            Some(doc! { "price": -1 })
        );
    }

    #[test]
    fn test_escape_regex_quotes_metacharacters() {
        assert_eq!(escape_regex("c4 (pre)"), "c4 \\(pre\\)");
        assert_eq!(escape_regex("100% whey"), "100% whey");
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
    }
}
