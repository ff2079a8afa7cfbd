use dioxus::prelude::*;

use crate::components::products::product_grid::ProductGrid;
use crate::components::searchbar::Searchbar;
use crate::state::filters_context::use_filters;


/// Search results page. The `query` URL parameter is the source of truth:
/// every change re-applies it to the store with a fresh default filter.
#[component]
pub fn SearchPage(query: ReadSignal<Option<String>>) -> Element {
    let filters = use_filters();
    use_effect(move || {
        let route_query = query.read().clone().unwrap_or_default();
        filters.apply_search_route(&route_query);
    });

    let search_query = filters.search_query();
    let products = filters.products();

    rsx! {
        Title { "Liftstore - Search" }
        div {
            class: "x-page",
            div {
                class: "x-searchbar-row",
                Searchbar { initial_query: search_query }
            }
            if !search_query.read().is_empty() && !products.read().is_empty() {
                h1 {
                    class: "x-results-heading",
                    "Results for "
                    span { class: "x-highlight", "{search_query}" }
                }
            }
            if !search_query.read().is_empty() {
                ProductGrid { empty_name: search_query.read().clone() }
            }
        }
    }
}
