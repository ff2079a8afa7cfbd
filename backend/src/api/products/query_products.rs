//! Catalog search endpoint.

use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;

use common::catalog_const::RESULT_LIMIT;
use common::catalog_query::CatalogQueryRequest;
use common::product::Product;

use crate::api::products::mongo_filter::{build_product_filter, build_sort_document};
use crate::db_utils::mongo_utils::products_collection;

/// Runs a filtered, sorted, bounded catalog query. An empty category or
/// brand selection is an explicit match-nothing state and short-circuits to
/// an empty list without touching the database.
pub async fn query_products(request: CatalogQueryRequest) -> anyhow::Result<Vec<Product>> {
    request.filter.validate()?;

    if request.filter.categories.is_empty() || request.filter.brands.is_empty() {
        return Ok(Vec::new());
    }

    let filter = build_product_filter(&request);
    let options = FindOptions::builder()
        .projection(doc! { "_id": 0 })
        .sort(build_sort_document(request.filter.sort))
        .limit(RESULT_LIMIT)
        .build();

    let collection = products_collection().await?;
    let mut cursor = collection.find(filter, options).await?;

    let mut products = Vec::new();
    while let Some(product) = cursor.try_next().await? {
        products.push(product);
    }
    tracing::debug!(
        count = products.len(),
        search_query = request.search_query.as_deref().unwrap_or(""),
        "catalog query served"
    );
    Ok(products)
}
