use dioxus::prelude::*;

/// A loading indicator with a short status message
#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div { class: "loading-spinner",
            span { class: "spinner" }
            p { "{message}" }
        }
    }
}
