// ReviewChill state managers
// Managers handle stateful operations: event logging, form autosave,
// debouncing, review navigation, keyboard shortcuts.

pub mod autosave_manager;
pub mod debounce;
pub mod event_logger;
pub mod review_navigator;
pub mod shortcut_manager;
