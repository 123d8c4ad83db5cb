// src/bookmarks/record.rs
// =============================================================================
// A single flattened bookmark: which folder it lives in, its title and URL,
// and (after the optional liveness check) whether the link still works.
// =============================================================================

use crate::checker::LinkStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRecord {
    /// Slash-joined folder names from the root down, e.g. "Bookmarks bar/Rust"
    pub folder: String,
    pub title: String,
    pub url: String,
    /// None until the liveness checker has looked at this link
    pub status: Option<LinkStatus>,
}

impl BookmarkRecord {
    pub fn new(folder: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        BookmarkRecord {
            folder: folder.into(),
            title: title.into(),
            url: url.into(),
            status: None,
        }
    }

    /// Returns this record annotated with a status.
    ///
    /// Takes `self` by value so a record is never changed after the fact -
    /// you get a new one with the status attached.
    pub fn with_status(self, status: LinkStatus) -> Self {
        BookmarkRecord {
            status: Some(status),
            ..self
        }
    }
}
