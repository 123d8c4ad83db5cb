// src/bookmarks/locate.rs
// =============================================================================
// Finds the Chrome Bookmarks file when the user doesn't pass a path.
//
// Chrome keeps it in the "Default" profile directory:
// - Windows: %LOCALAPPDATA%\Google\Chrome\User Data\Default\Bookmarks
// - Linux:   ~/.config/google-chrome/Default/Bookmarks
//            (~/.config/chromium/Default/Bookmarks for Chromium)
// - macOS:   ~/Library/Application Support/Google/Chrome/Default/Bookmarks
//
// We use the `dirs` crate to get the platform base directories instead of
// expanding "~" ourselves.
// =============================================================================

use std::path::{Path, PathBuf};

/// Well-known Bookmarks locations for the current OS, most likely first
pub fn candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if cfg!(target_os = "windows") {
        if let Some(local) = dirs::data_local_dir() {
            paths.push(local.join("Google").join("Chrome").join("User Data").join("Default").join("Bookmarks"));
        }
    } else if cfg!(target_os = "macos") {
        // dirs::data_dir() is ~/Library/Application Support on macOS
        if let Some(support) = dirs::data_dir() {
            paths.push(support.join("Google").join("Chrome").join("Default").join("Bookmarks"));
        }
    } else if let Some(config) = dirs::config_dir() {
        paths.push(config.join("google-chrome").join("Default").join("Bookmarks"));
        paths.push(config.join("chromium").join("Default").join("Bookmarks"));
    }

    paths
}

/// Returns the first candidate that exists on disk
pub fn first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    for candidate in candidates {
        let path: &Path = candidate.as_ref();
        if path.is_file() {
            return Some(path.to_path_buf());
        }
    }
    None
}

/// Looks for the Bookmarks file in the default locations
pub fn find_default() -> Option<PathBuf> {
    let candidates = candidates();
    tracing::debug!(?candidates, "searching default bookmarks locations");
    first_existing(&candidates)
}
