use crate::app_state_mut::AppStateMut;
use crate::compat;
use api::display::truncate_middle;
use dioxus::prelude::*;

pub const COPIED: &str = "Copied to clipboard!";
pub const COPY_FAILED: &str = "Failed to copy!";

/// A table cell showing an abbreviated value. Clicking copies the full value.
#[component]
pub fn CopyCell(value: String) -> Element {
    let notifier = use_context::<AppStateMut>();
    let abbreviated = truncate_middle(&value);
    let full = value.clone();

    rsx! {
        td {
            class: "clickable",
            title: "{value}",
            onclick: move |_| {
                let text = full.clone();
                let mut notifier = notifier;
                spawn(async move {
                    match compat::clipboard_set(text).await {
                        Ok(()) => notifier.success(COPIED),
                        Err(e) => {
                            dioxus_logger::tracing::warn!("copy failed: {}", e);
                            notifier.error(COPY_FAILED);
                        }
                    }
                });
            },
            code { "{abbreviated}" }
        }
    }
}
