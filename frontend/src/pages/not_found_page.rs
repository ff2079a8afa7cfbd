use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all route.
#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "Liftstore - Not Found" }
        NotFoundView { path }
    }
}

#[component]
pub fn NotFoundView(#[props(default)] path: String) -> Element {
    rsx! {
        main {
            class: "x-not-found",
            h1 { "404" }
            h2 { "Sorry, this page got lost in the stack. It can't be found anymore :(" }
            if !path.is_empty() {
                p { class: "x-not-found-path", "Nothing lives at /{path}" }
            }
            Link {
                to: Route::HomePage {},
                class: "x-not-found-link",
                "Return to Homepage"
            }
        }
    }
}
