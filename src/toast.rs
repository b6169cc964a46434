//! Transient notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::Serialize;
use uuid::Uuid;

use crate::error::ValidationError;

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A notification waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    /// Toast announcing a feature that is not built yet.
    pub fn coming_soon(description: impl Into<String>) -> Self {
        Self::info("Coming Soon", description)
    }
}

impl From<&ValidationError> for Toast {
    fn from(err: &ValidationError) -> Self {
        Toast::destructive("Error", err.toast_description())
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: Uuid,
    toast: Toast,
    expires_at: Instant,
}

/// Bounded queue of visible toasts with auto-dismiss.
#[derive(Debug, Clone)]
pub struct Toaster {
    ttl: Duration,
    limit: usize,
    entries: VecDeque<Entry>,
}

impl Toaster {
    pub fn new(ttl: Duration, limit: usize) -> Self {
        Self {
            ttl,
            limit: limit.max(1),
            entries: VecDeque::new(),
        }
    }

    /// Show a toast; the oldest one is dropped when the queue is full.
    pub fn push(&mut self, toast: Toast, now: Instant) -> Uuid {
        let id = Uuid::new_v4();
        tracing::debug!(title = %toast.title, severity = ?toast.severity, "toast");
        self.entries.push_back(Entry {
            id,
            toast,
            expires_at: now + self.ttl,
        });
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Drop every toast whose lifetime ended at or before `now`.
    pub fn expire(&mut self, now: Instant) {
        self.entries.retain(|e| e.expires_at > now);
    }

    /// Visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter().map(|e| &e.toast)
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.entries.back().map(|e| &e.toast)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest pending expiry, if any.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.expires_at).min()
    }
}
