//! Product-name listing for searchbar autocomplete.

use mongodb::bson::{doc, Bson};

use crate::db_utils::mongo_utils::products_collection;

/// Returns the distinct product names in the catalog. The searchbar filters
/// these client-side for substring suggestions.
pub async fn suggest_names() -> anyhow::Result<Vec<String>> {
    let collection = products_collection().await?;
    let values = collection.distinct("name", doc! {}, None).await?;

    let mut names = Vec::with_capacity(values.len());
    for value in values {
        match value {
            Bson::String(name) => names.push(name),
            other => anyhow::bail!("non-string product name in catalog: {other:?}"),
        }
    }
    names.sort();
    Ok(names)
}
