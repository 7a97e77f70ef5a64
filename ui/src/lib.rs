// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::AppConfig;
use app_state::AppState;
use app_state_mut::AppStateMut;
use app_state_mut::ToastQueue;
use components::pico::Container;
use components::toast_host::ToastHost;
use screens::history::HistoryScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        padding: 1rem 0;
    }

    .app-main-container h1 {
        margin-bottom: 1rem;
    }

    /* --- FORM --- */
    .limit-line {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        flex-wrap: wrap;
    }
    .limit-line input[type="number"] {
        width: 8rem;
        margin-bottom: 0;
    }
    .limit-line button {
        margin-left: auto;
        margin-bottom: 0;
    }
    .limit-hint {
        color: var(--pico-del-color);
    }

    /* --- RESULTS --- */
    .table-count {
        color: var(--pico-muted-color);
        margin-bottom: 0.5rem;
    }
    td.clickable {
        cursor: pointer;
        white-space: nowrap;
    }
    td.clickable:hover code {
        background-color: var(--pico-primary-focus);
    }
    .empty-state, .loading {
        text-align: center;
        padding: 2rem;
        color: var(--pico-muted-color);
    }

    footer {
        color: var(--pico-muted-color);
        text-align: right;
    }

    /* --- TOASTS --- */
    .toast-stack {
        position: fixed;
        top: 1rem;
        right: 1rem;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        z-index: 1000;
        max-width: 24rem;
    }
    .toast {
        padding: 0.75rem 1rem;
        border-radius: var(--pico-border-radius);
        box-shadow: 0 4px 16px rgba(0,0,0,0.2);
        cursor: pointer;
        color: #fff;
    }
    .toast-success { background-color: #2e7d32; }
    .toast-error { background-color: #c62828; }
"#;

    rsx! {
        document::Title { "Wallet History Tool" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: "{PICO_CSS}",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

/// Provides the shared state and mounts the history screen.
#[component]
fn AppBody() -> Element {
    let app_state = use_context_provider(|| AppState::new(AppConfig::from_env()));
    let backend_url = app_state.config.backend_url().to_string();

    let toasts = use_signal(ToastQueue::default);
    use_context_provider(|| AppStateMut { toasts });

    rsx! {
        div {
            class: "app-main-container",
            Container {
                h1 { "Wallet History Tool" }
                HistoryScreen {}
                footer {
                    small { "Backend: {backend_url}" }
                }
            }
        }
        ToastHost {}
    }
}
