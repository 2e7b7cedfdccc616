//! App Core for ReviewChill.
//!
//! Central struct holding the local store and the page-wide UI state.

use std::path::PathBuf;

use crate::managers::autosave_manager::AutosaveManager;
use crate::managers::event_logger::EventLogger;
use crate::managers::review_navigator::ReviewNavigator;
use crate::managers::shortcut_manager::ShortcutManager;
use crate::platform;
use crate::services::theme_engine::ThemeEngine;
use crate::services::toast_service::ToastService;
use crate::storage::SqliteStore;

/// Central application struct.
///
/// `EventLogger`, `AutosaveManager` and `ThemeEngine` are created on demand
/// via [`App::event_logger`] and friends because they borrow the store.
pub struct App {
    pub store: SqliteStore,
    pub navigator: ReviewNavigator,
    pub shortcuts: ShortcutManager,
    pub toasts: ToastService,
}

impl App {
    /// Opens the app against the store file in the platform data directory.
    pub fn new() -> Result<Self, rusqlite::Error> {
        Self::with_store_path(platform::get_data_dir().join("storage.db"))
    }

    /// Opens the app against a specific store file.
    pub fn with_store_path(path: PathBuf) -> Result<Self, rusqlite::Error> {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "could not create data directory");
            }
        }
        Ok(Self::from_store(SqliteStore::open(path)?))
    }

    /// Opens the app against an in-memory store. Useful for tests.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Ok(Self::from_store(SqliteStore::open_in_memory()?))
    }

    fn from_store(store: SqliteStore) -> Self {
        Self {
            store,
            navigator: ReviewNavigator::default(),
            shortcuts: ShortcutManager::new(),
            toasts: ToastService::new(),
        }
    }

    /// Event logger bound to this app's store and the given page context.
    pub fn event_logger<'a>(&'a self, page: &'a dyn crate::dom::PageContext) -> EventLogger<'a> {
        EventLogger::new(&self.store, page)
    }

    /// Autosave manager bound to this app's store.
    pub fn autosave(&self) -> AutosaveManager<'_> {
        AutosaveManager::new(&self.store)
    }

    /// Theme engine loaded from this app's store.
    pub fn theme(&self) -> ThemeEngine<'_> {
        ThemeEngine::load(&self.store)
    }
}
