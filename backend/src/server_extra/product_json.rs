use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{error, info};

use crate::api::products::get_product;

/// Plain REST lookup, registered on the server router next to the Dioxus
/// routes: 200 with the product JSON, 404 when the id is unknown.
pub async fn product_json(Path(id): Path<String>) -> impl IntoResponse {
    info!("Serving product JSON: {}", id);

    match get_product(id.clone()).await {
        Ok(Some(product)) => Json(product).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            format!("Product with ID {id:?} not found"),
        )
            .into_response(),
        Err(err) => {
            error!("product lookup failed for {id:?}: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
                .into_response()
        }
    }
}
