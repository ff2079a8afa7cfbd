use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::api::products_api::get_product_by_id;
use crate::components::products::product_details::ProductDetails;
use crate::components::products::product_details_skeleton::ProductDetailsSkeleton;
use crate::pages::not_found_page::NotFoundView;


/// Product details page
#[component]
pub fn ProductDetailsPage(id: ReadSignal<String>) -> Element {
    let product = use_resource(move || {
        let id = id.read().clone();
        get_product_by_id(id)
    });

    let product = product.read();
    match product.as_ref() {
        None => rsx! {
            Title { "Liftstore - Loading..." }
            ProductDetailsSkeleton {}
        },
        Some(Ok(Some(found))) => rsx! {
            Title { "Liftstore - {found.name}" }
            ProductDetails { product: found.clone() }
        },
        // an unknown id and a failed lookup both land on the 404 page
        Some(Ok(None)) => rsx! {
            Title { "Liftstore - Not Found" }
            NotFoundView {}
        },
        Some(Err(err)) => {
            error!("product fetch failed: {err}");
            rsx! {
                Title { "Liftstore - Not Found" }
                NotFoundView {}
            }
        }
    }
}
