//! Theme Engine — light/dark mode persisted to the local store.

use crate::storage::LocalStore;
use crate::types::theme::ThemeMode;

/// Store key holding the saved theme.
pub const THEME_KEY: &str = "reviewchill-theme";

/// Holds the current theme as explicit state; the page shell mirrors it into
/// the document's `data-theme` attribute.
pub struct ThemeEngine<'a> {
    store: &'a dyn LocalStore,
    current: ThemeMode,
}

impl<'a> ThemeEngine<'a> {
    /// Loads the saved theme from the store. Absent or unknown values fall
    /// back to dark, the site default.
    pub fn load(store: &'a dyn LocalStore) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|raw| ThemeMode::from_attr(&raw))
            .unwrap_or(ThemeMode::Dark);
        Self { store, current }
    }

    pub fn current(&self) -> ThemeMode {
        self.current
    }

    /// The value for the document's `data-theme` attribute.
    pub fn data_theme_attr(&self) -> &'static str {
        self.current.as_attr()
    }

    /// Applies a theme and persists it. A full store leaves the in-memory
    /// theme applied; only the saved preference is lost.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.current = mode;
        if let Err(e) = self.store.set(THEME_KEY, mode.as_attr()) {
            tracing::debug!(error = %e, "theme not persisted");
        }
    }

    /// Flips between dark and light and persists the result.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set_theme(self.current.toggled());
        self.current
    }
}
