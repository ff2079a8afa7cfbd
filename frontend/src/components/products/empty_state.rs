use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::MdCancel;
use dioxus_free_icons::Icon;

/// Shared "no products found" display; covers zero matches, fetch failures,
/// and an emptied-out selection alike.
#[component]
pub fn EmptyState(name: ReadSignal<String>) -> Element {
    rsx! {
        div {
            class: "x-empty-state",
            Icon { icon: MdCancel, style: "width: 48px; height: 48px; color: #DC2626;" }
            h3 { "No products found" }
            if name.read().is_empty() {
                p { "We found no search results for these filters." }
            } else {
                p {
                    "We found no search results for "
                    span { class: "x-highlight", "\u{201c}{name}\u{201d}" }
                    "."
                }
            }
        }
    }
}
