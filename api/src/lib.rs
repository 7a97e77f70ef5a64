//! Shared types and the HTTP client for the wallet history backend.
//!
//! Everything in here is renderer-agnostic so it can be used (and tested)
//! without a running Dioxus runtime.

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod history;
pub mod network;
pub mod token_amount;

pub use client::HistoryClient;
pub use config::AppConfig;
pub use error::ApiError;
pub use form::HistoryForm;
pub use form::HistoryRequest;
pub use history::HistoryItem;
pub use network::Network;
