//! Single-product lookup endpoint.

use mongodb::bson::doc;
use mongodb::options::FindOneOptions;

use common::product::Product;

use crate::db_utils::mongo_utils::products_collection;

/// Fetches one product by its public id. `None` is the not-found signal,
/// distinct from transport errors.
pub async fn get_product(id: String) -> anyhow::Result<Option<Product>> {
    let collection = products_collection().await?;
    let options = FindOneOptions::builder()
        .projection(doc! { "_id": 0 })
        .build();
    let product = collection.find_one(doc! { "id": &id }, options).await?;
    Ok(product)
}
