use dioxus::prelude::*;

#[component]
pub fn ProductDetailsSkeleton() -> Element {
    rsx! {
        main {
            class: "x-product-details",
            div {
                class: "x-details-layout",
                div {
                    class: "x-details-image-wrapper",
                    div { class: "x-skeleton x-skeleton-details-image" }
                }
                div {
                    class: "x-details-text",
                    div { class: "x-skeleton x-skeleton-line x-skeleton-line-wide" }
                    div { class: "x-skeleton x-skeleton-line" }
                    div { class: "x-skeleton x-skeleton-line x-skeleton-line-short" }
                    div { class: "x-skeleton x-skeleton-block" }
                }
            }
        }
    }
}
