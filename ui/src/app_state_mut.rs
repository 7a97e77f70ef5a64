//! Defines the mutable, reactive state for the application's UI.
//!
//! Currently this is only the toast notifications, which any component may
//! raise and which the root shell renders.

use crate::compat;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use std::time::Duration;

/// How long a toast stays up unless clicked away.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// The toasts currently on screen, oldest first.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Adds a toast and returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Removes the toast with `id`, if it is still shown.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// A reactive state provided as a Dioxus context for mutable UI data.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub toasts: Signal<ToastQueue>,
}

impl AppStateMut {
    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().dismiss(id);
    }

    fn notify(&mut self, kind: ToastKind, message: String) {
        let id = self.toasts.write().push(kind, message);

        // Not tied to the caller's scope: a table row may be gone long before
        // its copy toast expires.
        let mut toasts = self.toasts;
        spawn_forever(async move {
            compat::sleep(TOAST_DURATION).await;
            toasts.write().dismiss(id);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Copied to clipboard!");
        let b = queue.push(ToastKind::Error, "Invalid address");
        assert_ne!(a, b);
        assert_eq!(
            queue
                .toasts()
                .iter()
                .map(|t| t.message.as_str())
                .collect::<Vec<_>>(),
            vec!["Copied to clipboard!", "Invalid address"]
        );
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        let b = queue.push(ToastKind::Success, "two");
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);

        // Dismissing twice (timer after a click) is harmless.
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Error, "x");
        queue.dismiss(a);
        let b = queue.push(ToastKind::Error, "y");
        assert_ne!(a, b);
    }
}
