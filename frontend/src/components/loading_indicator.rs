use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(label: ReadSignal<String>) -> Element {
    rsx! {
        span {
            style: "color: #6B7280; font-size: 16px; font-style: italic;",
            "{label}"
        }
    }
}
