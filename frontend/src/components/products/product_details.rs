use common::product::Product;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowBack;
use dioxus_free_icons::Icon;

#[component]
pub fn ProductDetails(product: ReadSignal<Product>) -> Element {
    let product = product.read().clone();

    rsx! {
        main {
            class: "x-product-details",
            div {
                class: "x-details-back-row",
                button {
                    class: "x-details-back",
                    aria_label: "Back",
                    onclick: move |_| {
                        navigator().go_back();
                    },
                    Icon { icon: MdArrowBack, style: "width: 32px; height: 32px;" }
                }
            }
            div {
                class: "x-details-layout",
                div {
                    class: "x-details-image-wrapper",
                    img {
                        src: "/{product.image_url}",
                        alt: "{product.name} image",
                        width: "400",
                        height: "400",
                        class: "x-details-image",
                    }
                }
                div {
                    class: "x-details-text",
                    h1 { class: "x-details-name", "{product.name}" }
                    h2 { class: "x-details-brand", "{product.brand}" }
                    p { class: "x-details-price", {format!("£{:.2}", product.price)} }
                    h3 { class: "x-details-subheading", "Suggested Use" }
                    p { class: "x-details-suggested-use", "{product.suggested_use}" }
                }
            }
        }
    }
}
