//! Copy-to-clipboard with a legacy fallback path.
//!
//! The primary backend is the native async clipboard API; the fallback is the
//! legacy select-and-copy path for environments lacking it. If both fail, the
//! user sees an error toast — the one user-visible error path in this crate.

use std::time::Instant;

use super::toast_service::ToastService;
use crate::types::errors::ClipboardError;
use crate::types::toast::ToastKind;

/// Toast shown after a successful copy.
pub const COPY_OK_MESSAGE: &str = "Đã sao chép vào clipboard!";
/// Toast shown when both copy paths fail.
pub const COPY_FAIL_MESSAGE: &str = "Không thể sao chép!";

/// A way of writing text to the system clipboard.
pub trait ClipboardBackend {
    /// Whether this backend exists in the current environment.
    fn is_available(&self) -> bool;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies text through the primary backend, falling back to the legacy one.
pub struct CopyService {
    primary: Box<dyn ClipboardBackend>,
    fallback: Box<dyn ClipboardBackend>,
}

impl CopyService {
    pub fn new(primary: Box<dyn ClipboardBackend>, fallback: Box<dyn ClipboardBackend>) -> Self {
        Self { primary, fallback }
    }

    /// Copies `text`, showing a success or failure toast. Returns whether the
    /// copy succeeded on either path.
    pub fn copy(&mut self, text: &str, toasts: &mut ToastService, now: Instant) -> bool {
        if self.primary.is_available() {
            match self.primary.write_text(text) {
                Ok(()) => {
                    toasts.show(COPY_OK_MESSAGE, ToastKind::Success, now);
                    return true;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "primary clipboard failed, trying fallback");
                }
            }
        }

        if self.fallback.is_available() && self.fallback.write_text(text).is_ok() {
            toasts.show(COPY_OK_MESSAGE, ToastKind::Success, now);
            return true;
        }

        toasts.show(COPY_FAIL_MESSAGE, ToastKind::Error, now);
        false
    }
}
