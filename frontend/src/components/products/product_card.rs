use common::product::Product;
use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn ProductCard(product: ReadSignal<Product>) -> Element {
    let product = product.read().clone();

    rsx! {
        Link {
            to: Route::ProductDetailsPage { id: product.id.clone() },
            class: "x-product-card",
            img {
                src: "/{product.image_url}",
                alt: "{product.name} image",
                width: "208",
                height: "208",
                class: "x-product-card-image",
            }
            div {
                class: "x-product-card-body",
                h2 { class: "x-product-card-name", "{product.name}" }
                h3 { class: "x-product-card-brand", "{product.brand}" }
                p {
                    class: "x-product-card-price",
                    "£ "
                    span { class: "x-highlight", "{product.price}" }
                }
            }
        }
    }
}
