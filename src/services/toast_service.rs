//! Transient toast notifications.

use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::types::toast::{Toast, ToastKind};

/// How long a toast stays visible before [`ToastService::sweep`] removes it.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// Queue of currently visible toasts. The page shell renders `active()` and
/// calls `sweep` on its animation tick.
#[derive(Debug, Default)]
pub struct ToastService {
    toasts: Vec<Toast>,
}

impl ToastService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast and returns its handle.
    pub fn show(&mut self, message: &str, kind: ToastKind, now: Instant) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            message: message.to_string(),
            kind,
            shown_at: now,
        });
        id
    }

    /// Removes a toast early. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() < before
    }

    /// Removes toasts older than [`TOAST_LIFETIME`]. Returns how many expired.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts
            .retain(|t| now.duration_since(t.shown_at) < TOAST_LIFETIME);
        before - self.toasts.len()
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }
}
