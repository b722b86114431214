//! Transient toast notifications.
//!
//! Every validation failure, backend rejection, and success
//! confirmation in the client resolves to one of these; the host
//! component auto-dismisses them after a few seconds.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One visible toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Queue of visible toasts, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotifyState {
    items: Vec<Notice>,
    next_id: u64,
}

impl NotifyState {
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, kind, text: text.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

pub fn success(notices: RwSignal<NotifyState>, text: impl Into<String>) {
    notices.update(|state| {
        state.push(NoticeKind::Success, text);
    });
}

pub fn error(notices: RwSignal<NotifyState>, text: impl Into<String>) {
    notices.update(|state| {
        state.push(NoticeKind::Error, text);
    });
}
