//! Result grid shared by the catalog and search pages.

use dioxus::prelude::*;

use crate::components::products::empty_state::EmptyState;
use crate::components::products::product_card::ProductCard;
use crate::components::products::product_card_skeleton::ProductCardSkeleton;
use crate::state::filters_context::use_filters;

const SKELETON_COUNT: usize = 12;

#[component]
pub fn ProductGrid(empty_name: ReadSignal<String>) -> Element {
    let filters = use_filters();
    let products = filters.products();
    let filter = filters.filter();
    let loading = filters.is_loading();

    // an emptied-out selection can never match; show the empty state without
    // waiting for the round trip
    let is_empty_selection = use_memo(move || {
        let current = filter.read();
        current.brands.is_empty() || current.categories.is_empty()
    });

    if is_empty_selection() {
        return rsx! {
            EmptyState { name: empty_name.read().clone() }
        };
    }

    if products.read().is_empty() && *loading.read() {
        return rsx! {
            div {
                class: "x-product-grid",
                for i in 0..SKELETON_COUNT {
                    ProductCardSkeleton { key: "{i}" }
                }
            }
        };
    }

    if products.read().is_empty() {
        return rsx! {
            EmptyState { name: empty_name.read().clone() }
        };
    }

    rsx! {
        div {
            class: "x-product-grid",
            for product in products.read().iter().cloned() {
                ProductCard { key: "{product.id}", product: product.clone() }
            }
        }
    }
}
