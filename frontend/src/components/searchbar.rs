//! Search input with debounced URL sync and name suggestions.

use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;
use gloo_timers::future::TimeoutFuture;

use common::catalog_const::{SEARCHBAR_DEBOUNCE_MS, SUGGESTION_LIMIT};
use common::catalog_query::normalize_search_query;
use common::text_highlight::split_match_spans;

use crate::api::products_api::list_product_names;
use crate::routes::Route;

/// Substring-matches `query` (already normalized) against the catalog names,
/// capped at the suggestion limit.
pub(crate) fn filter_suggestions(names: &[String], query: &str) -> Vec<String> {
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(query))
        .take(SUGGESTION_LIMIT)
        .cloned()
        .collect()
}

#[component]
pub fn Searchbar(initial_query: ReadSignal<String>) -> Element {
    let mut search_value = use_signal(|| initial_query.read().clone());
    // when the url changes, the input has to follow; navigation does not
    // remount this component
    use_effect(move || {
        let new_value = initial_query.read().clone();
        search_value.set(new_value);
    });

    let all_names = use_resource(move || list_product_names());
    let mut active_suggestions = use_signal(Vec::<String>::new);
    let mut selected_index = use_signal(|| None::<usize>);
    let mut pending = use_signal(|| None::<Task>);

    let route = use_route::<Route>();
    let on_search_route = matches!(route, Route::SearchPage { .. });

    // trailing-edge debounce over keystrokes: normalize, sync the URL
    // parameter, recompute suggestions
    let mut schedule_suggestions = move |_: ()| {
        if let Some(task) = pending.take() {
            task.cancel();
        }
        let task = spawn(async move {
            TimeoutFuture::new(SEARCHBAR_DEBOUNCE_MS).await;
            pending.set(None);
            let query = normalize_search_query(&search_value.peek());
            search_value.set(query.clone());
            if on_search_route {
                navigator().replace(Route::search_page_from_query(query.clone()));
            }
            if query.is_empty() {
                active_suggestions.set(Vec::new());
                selected_index.set(None);
                return;
            }
            let names = all_names
                .peek()
                .as_ref()
                .and_then(|r| r.as_ref().ok())
                .cloned()
                .unwrap_or_default();
            active_suggestions.set(filter_suggestions(&names, &query));
            selected_index.set(None);
        });
        pending.set(Some(task));
    };

    let mut choose_suggestion = move |name: String| {
        search_value.set(name.clone());
        active_suggestions.set(Vec::new());
        selected_index.set(None);
        navigator().push(Route::search_page_from_query(normalize_search_query(&name)));
    };

    let mut submit_search = move |_: ()| {
        let query = normalize_search_query(&search_value.peek());
        if query.is_empty() {
            return;
        }
        active_suggestions.set(Vec::new());
        selected_index.set(None);
        navigator().push(Route::search_page_from_query(query));
    };

    let search_oninput = move |event: Event<FormData>| {
        search_value.set(event.value());
        schedule_suggestions(());
    };

    let search_onkeydown = move |event: Event<KeyboardData>| {
        let suggestions = active_suggestions.peek().clone();
        let total = suggestions.len();
        match event.key() {
            Key::ArrowDown if total > 0 => {
                event.prevent_default();
                let next = (*selected_index.peek()).map(|i| (i + 1) % total).unwrap_or(0);
                selected_index.set(Some(next));
            }
            Key::ArrowUp if total > 0 => {
                event.prevent_default();
                let previous = (*selected_index
                    .peek())
                    .map(|i| (i + total - 1) % total)
                    .unwrap_or(total - 1);
                selected_index.set(Some(previous));
            }
            Key::Enter => {
                event.prevent_default();
                let chosen = selected_index.peek().and_then(|i| suggestions.get(i).cloned());
                if let Some(name) = chosen {
                    choose_suggestion(name);
                } else {
                    submit_search(());
                }
            }
            _ => {}
        }
    };

    let search_onblur = move |_| {
        // leave a beat for suggestion clicks to land before the list hides
        spawn(async move {
            TimeoutFuture::new(120).await;
            active_suggestions.set(Vec::new());
            selected_index.set(None);
        });
    };

    let query_now = normalize_search_query(&search_value.read());
    let suggestions: Vec<(usize, String)> = active_suggestions
        .read()
        .iter()
        .cloned()
        .enumerate()
        .collect();

    rsx! {
        div {
            class: "x-searchbar",
            role: "combobox",

            div {
                class: "x-searchbar-box",
                input {
                    r#type: "search",
                    class: "x-searchbar-input",
                    placeholder: "Search for supplements...",
                    aria_label: "Search supplements",
                    value: "{search_value}",
                    oninput: search_oninput,
                    onkeydown: search_onkeydown,
                    onblur: search_onblur,
                }
                button {
                    class: "x-searchbar-submit",
                    aria_label: "Search supplements",
                    onclick: move |_| submit_search(()),
                    Icon { icon: MdSearch, style: "width: 22px; height: 22px;" }
                }
            }

            if !suggestions.is_empty() {
                div {
                    class: "x-suggestion-list",
                    role: "listbox",
                    for (i, name) in suggestions {
                        SuggestionRow {
                            key: "{name}",
                            name: name.clone(),
                            query: query_now.clone(),
                            selected: *selected_index.read() == Some(i),
                            onhover: move |_| selected_index.set(Some(i)),
                            onchoose: choose_suggestion,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SuggestionRow(
    name: String,
    query: String,
    selected: ReadSignal<bool>,
    onhover: Callback<()>,
    onchoose: Callback<String>,
) -> Element {
    let spans = split_match_spans(&name, &query);
    let row_class = if *selected.read() {
        "x-suggestion x-suggestion-selected"
    } else {
        "x-suggestion"
    };
    let chosen_name = name.clone();

    rsx! {
        span {
            class: "{row_class}",
            role: "option",
            onclick: move |_| onchoose(chosen_name.clone()),
            onmouseenter: move |_| onhover(()),
            for span_part in spans {
                if span_part.is_highlighted {
                    strong { class: "x-highlight", "{span_part.text}" }
                } else {
                    span { "{span_part.text}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        [
            "Creatine Monohydrate",
            "Creapure Creatine",
            "Impact Whey Protein",
            "Beta-Alanine Powder",
            "BCAA 2:1:1",
        ]
        .iter()
        .map(|n| n.to_string())
        .collect()
    }

    #[test]
    fn test_suggestions_match_substrings_case_insensitively() {
        let matches = filter_suggestions(&names(), "creatine");
        assert_eq!(matches, vec!["Creatine Monohydrate", "Creapure Creatine"]);
    }

    #[test]
    fn test_suggestions_cap_at_limit() {
        let many: Vec<String> = (0..20).map(|i| format!("Whey Blend {i}")).collect();
        assert_eq!(filter_suggestions(&many, "whey").len(), SUGGESTION_LIMIT);
    }

    #[test]
    fn test_no_match_yields_no_suggestions() {
        assert!(filter_suggestions(&names(), "casein").is_empty());
    }
}
