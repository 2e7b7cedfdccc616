// ReviewChill platform abstraction
// Resolves the per-OS directory where the local store file lives.

use std::path::PathBuf;

/// Returns the platform-specific data directory for ReviewChill.
///
/// - **Linux**: `~/.local/share/reviewchill` (or `$XDG_DATA_HOME/reviewchill`)
/// - **macOS**: `~/Library/Application Support/ReviewChill`
/// - **Windows**: `%APPDATA%/ReviewChill`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            if !xdg.is_empty() {
                return PathBuf::from(xdg).join("reviewchill");
            }
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".local/share/reviewchill")
    }
    #[cfg(target_os = "macos")]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join("Library/Application Support/ReviewChill")
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join("ReviewChill")
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".reviewchill")
    }
}
