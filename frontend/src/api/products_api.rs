//! Client API calls for catalog endpoints.

use common::catalog_query::CatalogQueryRequest;
use common::product::Product;
use dioxus::prelude::*;




#[server]
pub async fn query_products(request: CatalogQueryRequest) -> Result<Vec<Product>, ServerFnError> {
    let x = backend::api::products::query_products(request).await;
    x.map_err(|e| {
        // malformed filter payloads are the caller's fault
        let code = if e
            .downcast_ref::<common::catalog_query::FilterValidationError>()
            .is_some()
        {
            400
        } else {
            500
        };
        ServerFnError::ServerError { message: e.to_string(), code, details: None }
    })
}

#[server]
pub async fn get_product_by_id(id: String) -> Result<Option<Product>, ServerFnError> {
    let x = backend::api::products::get_product(id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_product_names() -> Result<Vec<String>, ServerFnError> {
    let x = backend::api::products::suggest_names().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
