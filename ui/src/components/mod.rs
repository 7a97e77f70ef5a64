//! Shared building blocks for the history screen: Pico wrappers, the
//! click-to-copy table cell, toasts and the empty/loading placeholders.
pub mod copy_cell;
pub mod empty_state;
pub mod loading;
pub mod pico;
pub mod toast_host;
