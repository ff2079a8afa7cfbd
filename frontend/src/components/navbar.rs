//! Application shell: top navigation bar, filter sidebar, and page outlet.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::sidebar::FilterSidebar;
use crate::routes::Route;
use crate::state::filters_context::use_filters_provider;


/// Layout route component. Owns the one `FiltersContext` of the session, so
/// the sidebar and every page below share the same store.
#[component]
pub fn Navbar() -> Element {
    use_filters_provider();

    rsx! {
        div {
            id: "x-shell-container",
            style: "
                display: flex;
                flex-direction: column;
                min-height: 100vh;
                width: 100%;
            ",

            div {
                id: "x-nav-topbar",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                    width: 100%;
                    height: 64px;
                    padding: 0 24px;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.85), rgba(0,0,0,0.55));
                    box-sizing: border-box;
                    flex-shrink: 0;
                ",
                NavbarBrandLink {}

                // empty space
                div {
                    style: "flex-grow:1;"
                }

                NavbarSearchLink {}
            }

            div {
                id: "x-shell-body",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: stretch;
                    flex-grow: 1;
                    width: 100%;
                ",
                FilterSidebar {}

                main {
                    id: "x-page-container",
                    style: "flex-grow:1; min-width: 100px; padding: 16px 24px;",
                    GlobalErrorBoundary {
                        boundary_name: "Navbar".to_string(),
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}

#[component]
fn NavbarBrandLink() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            span {
                style: "color:white; font-size: 24px; font-weight: 700; letter-spacing: 0.02em;",
                "Liftstore"
            }
        }
    }
}

#[component]
fn NavbarSearchLink() -> Element {
    rsx! {
        Link {
            to: Route::search_page_from_query(String::new()),
            span {
                style: "color:white;",
                Icon { icon: MdSearch, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
