use crate::app_state_mut::AppStateMut;
use dioxus::prelude::*;

/// Renders the active toasts in a fixed stack. Clicking a toast closes it.
#[component]
pub fn ToastHost() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let toasts = app_state_mut.toasts.read().toasts().to_vec();

    rsx! {
        div {
            class: "toast-stack",
            role: "status",
            "aria-live": "polite",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast.kind.css_class(),
                    title: "Click to dismiss",
                    onclick: move |_| app_state_mut.dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
