#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::collections::{HashSet, VecDeque};

/// Number of notices kept on screen at once.
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient user-facing notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of notices rendered by the toaster, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: VecDeque<Toast>,
}

impl ToastState {
    /// Push a success notice and return its id.
    pub fn success(&mut self, message: impl Into<String>) -> String {
        self.push(ToastKind::Success, message.into())
    }

    /// Push an error notice and return its id.
    pub fn error(&mut self, message: impl Into<String>) -> String {
        self.push(ToastKind::Error, message.into())
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }

    /// Ids of notices missing from `scheduled`, which are added to it.
    ///
    /// Ids of notices that are no longer queued are dropped from `scheduled`
    /// first, so it never holds more than [`MAX_TOASTS`] entries.
    pub fn take_unscheduled(&self, scheduled: &mut HashSet<String>) -> Vec<String> {
        scheduled.retain(|id| self.items.iter().any(|t| t.id == *id));
        self.items
            .iter()
            .filter(|t| scheduled.insert(t.id.clone()))
            .map(|t| t.id.clone())
            .collect()
    }

    fn push(&mut self, kind: ToastKind, message: String) -> String {
        if kind == ToastKind::Error {
            log::warn!("toast: {message}");
        }
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push_back(Toast { id: id.clone(), kind, message });
        while self.items.len() > MAX_TOASTS {
            self.items.pop_front();
        }
        id
    }
}
