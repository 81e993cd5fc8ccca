use dioxus::prelude::*;

/// Card displaying the generated summary text.
#[component]
pub fn SummaryCard(summary: String) -> Element {
    rsx! {
        div { class: "summary-card",
            h2 { "Summary" }
            p { class: "summary-text", "{summary}" }
        }
    }
}
