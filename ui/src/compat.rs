// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

use thiserror::Error;

/// A clipboard write that the platform refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use super::ClipboardError;
    use std::time::Duration;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Window;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> Result<(), ClipboardError> {
        let clipboard = web_sys::window()
            .map(|win: Window| win.navigator().clipboard())
            .ok_or(ClipboardError::Unavailable)?;

        JsFuture::from(clipboard.write_text(&text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use super::ClipboardError;
    use dioxus_clipboard::prelude::*;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> Result<(), ClipboardError> {
        let mut clipboard = use_clipboard();
        clipboard
            .set(text)
            .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
    }
}
