use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { class: "not-found-code", "404" }
            p { class: "not-found-message", "No page at /{path}." }
            Link { to: Route::Overview {}, class: "btn btn-primary", "Back to dashboard" }
        }
    }
}
