use dioxus::prelude::*;

/// Pico's busy indicator with a caption.
#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] caption: String) -> Element {
    rsx! {
        div {
            class: "loading",
            span { "aria-busy": "true", "{caption}" }
            progress {}
        }
    }
}
