// src/bookmarks/mod.rs
// =============================================================================
// This module reads a browser Bookmarks file and flattens it.
//
// Submodules:
// - document: Parses the JSON file and checks its version
// - tree: Walks the folder/link tree depth-first
// - record: The flat (folder, title, url, status) record
// - locate: Finds the Bookmarks file in the default browser profile
// - error: What can go wrong while doing the above
// =============================================================================

mod document;
mod error;
pub mod locate;
mod record;
mod tree;

pub use document::{BookmarksDocument, SUPPORTED_VERSION};
pub use record::BookmarkRecord;
