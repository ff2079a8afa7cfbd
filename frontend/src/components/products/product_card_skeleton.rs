use dioxus::prelude::*;

#[component]
pub fn ProductCardSkeleton() -> Element {
    rsx! {
        div {
            class: "x-product-card x-skeleton-card",
            div { class: "x-skeleton x-skeleton-image" }
            div { class: "x-product-card-body",
                div { class: "x-skeleton x-skeleton-line" }
                div { class: "x-skeleton x-skeleton-line x-skeleton-line-short" }
            }
        }
    }
}
