// src/bookmarks/error.rs
// =============================================================================
// Errors that can happen while reading and flattening a Bookmarks file.
//
// Every one of these is fatal: main() prints the message and exits with 0.
// Per-link network failures are NOT here - they become a FailedToCheck
// status instead (see checker/http.rs).
// =============================================================================

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BookmarkError {
    /// The file does not exist
    #[error("Oops! No such file or directory: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other problem opening or reading the file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON
    #[error("the Bookmarks file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is valid but doesn't have the shape of a bookmarks tree
    #[error("malformed bookmarks tree: {0}")]
    MalformedTree(String),

    /// A folder or link is missing a field we need
    #[error("malformed bookmarks tree: a node in \"{folder}\" has no \"{field}\" field")]
    MissingField { field: &'static str, folder: String },
}

impl BookmarkError {
    /// Wraps an I/O error, turning "file not found" into its own variant
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            BookmarkError::NotFound { path }
        } else {
            BookmarkError::Io { path, source }
        }
    }
}
