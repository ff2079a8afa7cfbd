//! Filter sidebar: sort order, category and brand multi-select, price.

use std::collections::BTreeSet;

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_toggle_icons::{
    MdCheckBox, MdCheckBoxOutlineBlank, MdRadioButtonChecked, MdRadioButtonUnchecked,
};
use dioxus_free_icons::Icon;

use common::catalog_const::{DEFAULT_PRICE_RANGE, PRICE_PRESETS, PRICE_SLIDER_STEP};
use common::catalog_query::{PriceSelection, SORT_OPTIONS};
use common::product::{AVAILABLE_BRANDS, CATEGORY_OPTIONS};

use crate::components::accordion::AccordionItem;
use crate::components::slider::PriceRangeSlider;
use crate::state::filters_context::{use_filters, FilterUpdate};


#[component]
pub fn FilterSidebar() -> Element {
    // every panel except price starts open
    let open_sections = use_signal(|| {
        BTreeSet::from(["sort".to_string(), "type".to_string(), "brand".to_string()])
    });

    rsx! {
        aside {
            id: "x-filter-sidebar",
            AccordionItem {
                section_id: "sort".to_string(),
                title: "Sort".to_string(),
                open_sections,
                SortSection {}
            }
            AccordionItem {
                section_id: "type".to_string(),
                title: "Type".to_string(),
                open_sections,
                CategorySection {}
            }
            AccordionItem {
                section_id: "brand".to_string(),
                title: "Brand".to_string(),
                open_sections,
                BrandSection {}
            }
            AccordionItem {
                section_id: "price".to_string(),
                title: "Price".to_string(),
                open_sections,
                PriceSection {}
            }
        }
    }
}

#[component]
fn SortSection() -> Element {
    let filters = use_filters();
    let filter = filters.filter();

    rsx! {
        ul {
            class: "x-filter-options",
            for (sort, label) in SORT_OPTIONS {
                li {
                    key: "{label}",
                    FilterOptionRow {
                        label: label.to_string(),
                        selected: filter.read().sort == sort,
                        exclusive: true,
                        onselect: move |_| {
                            filters.update_filter(FilterUpdate {
                                sort: Some(sort),
                                ..Default::default()
                            });
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn CategorySection() -> Element {
    let filters = use_filters();
    let filter = filters.filter();

    rsx! {
        ul {
            class: "x-filter-options",
            for (value, label) in CATEGORY_OPTIONS {
                li {
                    key: "{value}",
                    FilterOptionRow {
                        label: label.to_string(),
                        selected: filter.read().categories.contains(value),
                        exclusive: false,
                        onselect: move |_| {
                            let mut updated = filters.filter().peek().categories.clone();
                            if !updated.remove(value) {
                                updated.insert(value.to_string());
                            }
                            filters.update_filter(FilterUpdate {
                                categories: Some(updated),
                                ..Default::default()
                            });
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn BrandSection() -> Element {
    let filters = use_filters();
    let filter = filters.filter();

    rsx! {
        ul {
            class: "x-filter-options",
            for value in AVAILABLE_BRANDS {
                li {
                    key: "{value}",
                    FilterOptionRow {
                        label: value.to_string(),
                        selected: filter.read().brands.contains(value),
                        exclusive: false,
                        onselect: move |_| {
                            let mut updated = filters.filter().peek().brands.clone();
                            if !updated.remove(value) {
                                updated.insert(value.to_string());
                            }
                            filters.update_filter(FilterUpdate {
                                brands: Some(updated),
                                ..Default::default()
                            });
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn PriceSection() -> Element {
    let filters = use_filters();
    let filter = filters.filter();
    let price = use_memo(move || filter.read().price.clone());

    rsx! {
        ul {
            class: "x-filter-options",
            for (range, label) in PRICE_PRESETS {
                li {
                    key: "{label}",
                    FilterOptionRow {
                        label: label.to_string(),
                        selected: !price.read().is_custom && price.read().range == range,
                        exclusive: true,
                        onselect: move |_| {
                            filters.update_filter(FilterUpdate {
                                price: Some(PriceSelection { is_custom: false, range }),
                                ..Default::default()
                            });
                        },
                    }
                }
            }
            li {
                FilterOptionRow {
                    label: "Custom".to_string(),
                    selected: price.read().is_custom,
                    exclusive: true,
                    onselect: move |_| {
                        filters.update_filter(FilterUpdate {
                            price: Some(PriceSelection {
                                is_custom: true,
                                range: DEFAULT_PRICE_RANGE,
                            }),
                            ..Default::default()
                        });
                    },
                }
            }
        }
        if price.read().is_custom {
            PriceRangeSlider {
                range: price.read().range,
                min: DEFAULT_PRICE_RANGE.0,
                max: DEFAULT_PRICE_RANGE.1,
                step: PRICE_SLIDER_STEP,
                onchange: move |values: (f64, f64)| {
                    filters.update_filter(FilterUpdate {
                        price: Some(PriceSelection { is_custom: true, range: values }),
                        ..Default::default()
                    });
                },
            }
        }
    }
}

#[component]
fn FilterOptionRow(
    label: String,
    selected: ReadSignal<bool>,
    exclusive: bool,
    onselect: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "x-filter-option",
            onclick: move |_| onselect(()),
            if exclusive {
                if *selected.read() {
                    Icon { icon: MdRadioButtonChecked, style: "width: 22px; height: 22px; flex-shrink: 0;" }
                } else {
                    Icon { icon: MdRadioButtonUnchecked, style: "width: 22px; height: 22px; flex-shrink: 0;" }
                }
            } else {
                if *selected.read() {
                    Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; flex-shrink: 0;" }
                } else {
                    Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; flex-shrink: 0;" }
                }
            }
            span { "{label}" }
        }
    }
}
