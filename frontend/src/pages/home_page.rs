use dioxus::prelude::*;

use crate::components::products::product_grid::ProductGrid;
use crate::components::searchbar::Searchbar;
use crate::state::filters_context::use_filters;


/// Catalog root. Arriving here resets the store to its defaults.
#[component]
pub fn HomePage() -> Element {
    let filters = use_filters();
    use_effect(move || filters.reset_to_root());

    rsx! {
        Title { "Liftstore - Home" }
        div {
            class: "x-page",
            div {
                class: "x-page-heading",
                h1 {
                    "Find the "
                    span { class: "x-highlight", "supplements" }
                    " you're looking for"
                }
            }
            div {
                class: "x-searchbar-row",
                Searchbar { initial_query: String::new() }
            }
            ProductGrid { empty_name: String::new() }
        }
    }
}
