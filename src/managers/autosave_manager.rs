//! Form Autosave for ReviewChill.
//!
//! Keeps a per-form snapshot of field values in the local store so that
//! in-progress input survives accidental navigation or reload. Writes are
//! debounced to bound store traffic under fast typing; the snapshot is
//! removed when the form is submitted.

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

use super::debounce::Debouncer;
use crate::dom::FormHandle;
use crate::storage::LocalStore;

/// Prefix of every autosave store key.
pub const AUTOSAVE_PREFIX: &str = "autosave-";

/// Quiescence window: a save touches the store only after this much time has
/// passed with no further input on the form.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(1000);

/// A form's saved field values, keyed by field name.
pub type FormSnapshot = BTreeMap<String, String>;

/// Per-form autosave with debounced writes.
///
/// Each tracked form owns its own debounce slot, so edits on one form never
/// delay or coalesce with saves of another.
pub struct AutosaveManager<'a> {
    store: &'a dyn LocalStore,
    window: Duration,
    pending: HashMap<String, Debouncer<FormSnapshot>>,
}

impl<'a> AutosaveManager<'a> {
    pub fn new(store: &'a dyn LocalStore) -> Self {
        Self::with_window(store, DEBOUNCE_WINDOW)
    }

    pub fn with_window(store: &'a dyn LocalStore, window: Duration) -> Self {
        Self {
            store,
            window,
            pending: HashMap::new(),
        }
    }

    /// Store key for a form: its id attribute, falling back to its action URL.
    ///
    /// Two forms sharing an action path and lacking ids collide on the same
    /// key and overwrite each other's snapshots. Known sharp edge, not
    /// guarded against.
    pub fn form_key(form: &dyn FormHandle) -> String {
        let ident = form.id_attr().unwrap_or_else(|| form.action());
        format!("{}{}", AUTOSAVE_PREFIX, ident)
    }

    /// Writes the saved snapshot, if any, into the form's fields by name.
    ///
    /// Fields absent from the snapshot keep their current value. An absent or
    /// unparsable snapshot restores nothing. Safe to call repeatedly; a
    /// second run only refreshes fields from the (possibly updated) snapshot.
    pub fn restore(&self, form: &mut dyn FormHandle) {
        let key = Self::form_key(form);
        let raw = match self.store.get(&key) {
            Some(raw) => raw,
            None => return,
        };
        let saved: FormSnapshot = match serde_json::from_str(&raw) {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "autosave snapshot unparsable, skipping restore");
                return;
            }
        };

        for name in form.field_names() {
            if let Some(value) = saved.get(&name) {
                form.set_field_value(&name, value);
            }
        }
    }

    /// Call on every input change. Captures the full field set and
    /// (re)schedules the debounced write; rapid successive edits collapse
    /// into a single write carrying the values at the last edit.
    pub fn note_input(&mut self, form: &dyn FormHandle, now: Instant) {
        let snapshot: FormSnapshot = form
            .field_names()
            .into_iter()
            .filter_map(|name| {
                let value = form.field_value(&name)?;
                Some((name, value))
            })
            .collect();

        self.pending
            .entry(Self::form_key(form))
            .or_insert_with(|| Debouncer::new(self.window))
            .schedule(now, snapshot);
    }

    /// Fires every elapsed debounce, writing each snapshot to the store.
    /// Returns the number of snapshots committed. Quota errors are dropped:
    /// the save is lost, the form is unaffected.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut committed = 0;
        for (key, slot) in self.pending.iter_mut() {
            let snapshot = match slot.fire_due(now) {
                Some(snapshot) => snapshot,
                None => continue,
            };
            match serde_json::to_string(&snapshot) {
                Ok(json) => {
                    if let Err(e) = self.store.set(key, &json) {
                        tracing::debug!(key = %key, error = %e, "autosave dropped, store write failed");
                    } else {
                        committed += 1;
                    }
                }
                Err(e) => {
                    tracing::debug!(key = %key, error = %e, "autosave dropped, serialization failed");
                }
            }
        }
        committed
    }

    /// Call when the form is submitted. Removes the snapshot unconditionally
    /// and cancels any pending debounced write, regardless of whether the
    /// submission succeeds downstream.
    pub fn clear(&mut self, form: &dyn FormHandle) {
        let key = Self::form_key(form);
        if let Some(slot) = self.pending.get_mut(&key) {
            slot.cancel();
        }
        self.store.remove(&key);
    }

    /// Whether a write is pending for the given form.
    pub fn has_pending(&self, form: &dyn FormHandle) -> bool {
        self.pending
            .get(&Self::form_key(form))
            .map(|slot| slot.is_pending())
            .unwrap_or(false)
    }
}
