//! Unit tests for the ShortcutManager public API.

use reviewchill::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};

#[test]
fn test_default_bindings_present() {
    let mgr = ShortcutManager::new();

    // Plain keys are identical on every platform.
    assert_eq!(mgr.get_shortcut("close_modal"), Some("Escape"));
    assert_eq!(mgr.get_shortcut("next_review"), Some("ArrowRight"));
    assert_eq!(mgr.get_shortcut("prev_review"), Some("ArrowLeft"));

    // Ctrl is adapted to Cmd on macOS.
    let keys = mgr.get_shortcut("focus_search").unwrap();
    assert!(keys == "Ctrl+K" || keys == "Cmd+K", "got {}", keys);

    assert_eq!(mgr.list_shortcuts().len(), 4);
}

#[test]
fn test_resolve_maps_keys_to_action() {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.resolve("ArrowRight"), Some("next_review"));
    assert_eq!(mgr.resolve("Escape"), Some("close_modal"));
    assert_eq!(mgr.resolve("Ctrl+K"), Some("focus_search"));
    assert_eq!(mgr.resolve("F13"), None);
}

#[test]
fn test_register_and_resolve_custom_shortcut() {
    let mut mgr = ShortcutManager::new();
    mgr.register_shortcut("toggle_theme", "Ctrl+D").unwrap();
    assert_eq!(mgr.resolve("Ctrl+D"), Some("toggle_theme"));
}

#[test]
fn test_register_conflicting_keys_fails() {
    let mut mgr = ShortcutManager::new();
    let result = mgr.register_shortcut("open_help", "Escape");
    assert!(result.is_err());
    // The existing binding is untouched.
    assert_eq!(mgr.resolve("Escape"), Some("close_modal"));
}

#[test]
fn test_rebinding_same_action_is_not_a_conflict() {
    let mut mgr = ShortcutManager::new();
    mgr.register_shortcut("close_modal", "Escape").unwrap();
    assert_eq!(mgr.get_shortcut("close_modal"), Some("Escape"));
}

#[test]
fn test_register_empty_keys_fails() {
    let mut mgr = ShortcutManager::new();
    assert!(mgr.register_shortcut("anything", "").is_err());
}

#[test]
fn test_unregister_and_reset() {
    let mut mgr = ShortcutManager::new();
    mgr.unregister_shortcut("next_review").unwrap();
    assert_eq!(mgr.get_shortcut("next_review"), None);
    assert!(mgr.unregister_shortcut("next_review").is_err());

    mgr.reset_to_defaults().unwrap();
    assert_eq!(mgr.get_shortcut("next_review"), Some("ArrowRight"));
}
