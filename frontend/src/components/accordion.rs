//! Collapsible sidebar sections.

use std::collections::BTreeSet;

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowDropDown, MdArrowDropUp};
use dioxus_free_icons::Icon;

/// One titled, collapsible section. The caller owns the set of open section
/// ids so several items can share one expansion state.
#[component]
pub fn AccordionItem(
    section_id: String,
    title: String,
    open_sections: Signal<BTreeSet<String>>,
    children: Element,
) -> Element {
    let is_open = open_sections.read().contains(&section_id);
    let toggle_id = section_id.clone();

    rsx! {
        div {
            class: "x-accordion-item",
            button {
                class: "x-accordion-trigger",
                onclick: move |_| {
                    let mut sections = open_sections;
                    let mut open = sections.write();
                    if !open.remove(&toggle_id) {
                        open.insert(toggle_id.clone());
                    }
                },
                span { "{title}" }
                if is_open {
                    Icon { icon: MdArrowDropUp, style: "width: 22px; height: 22px;" }
                } else {
                    Icon { icon: MdArrowDropDown, style: "width: 22px; height: 22px;" }
                }
            }
            if is_open {
                div {
                    class: "x-accordion-content",
                    {children}
                }
            }
        }
    }
}
