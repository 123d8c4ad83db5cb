// src/bookmarks/document.rs
// =============================================================================
// Reads the browser's Bookmarks file and turns it into flat records.
//
// The file looks like this (trimmed):
//
//   {
//     "checksum": "...",
//     "roots": {
//       "bookmark_bar": { "name": "Bookmarks bar", "type": "folder", "children": [...] },
//       "other":        { "name": "Other bookmarks", "type": "folder", "children": [...] },
//       "synced":       { "name": "Mobile bookmarks", "type": "folder", "children": [...] }
//     },
//     "version": 1
//   }
//
// Each root folder's "name" becomes the first part of every folder path
// under it.
// =============================================================================

use super::error::BookmarkError;
use super::record::BookmarkRecord;
use super::tree::{Flatten, Node};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// The only file format version we know how to read
pub const SUPPORTED_VERSION: u64 = 1;

#[derive(Debug, Deserialize)]
pub struct BookmarksDocument {
    #[serde(default)]
    pub version: Option<Value>,
    /// Kept as raw JSON so the roots stay in file order
    #[serde(default)]
    pub roots: Option<Map<String, Value>>,
}

impl BookmarksDocument {
    /// Reads and parses a Bookmarks file from disk
    pub fn read(path: &Path) -> Result<Self, BookmarkError> {
        let text = std::fs::read_to_string(path).map_err(|e| BookmarkError::io(path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "read bookmarks file");
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, BookmarkError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn is_supported_version(&self) -> bool {
        matches!(&self.version, Some(Value::Number(n)) if n.as_u64() == Some(SUPPORTED_VERSION))
    }

    /// How the version shows up in the mismatch message
    pub fn version_label(&self) -> String {
        match &self.version {
            None | Some(Value::Null) => "missing".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Flattens every root folder and sorts the result by folder path.
    ///
    /// The sort is stable, so links in the same folder keep their
    /// depth-first order.
    pub fn flatten(&self) -> Result<Vec<BookmarkRecord>, BookmarkError> {
        let roots = self
            .roots
            .as_ref()
            .ok_or_else(|| BookmarkError::MalformedTree("no \"roots\" object".to_string()))?;

        let mut records = Vec::new();
        for (key, value) in roots {
            let root = Node::deserialize(value).map_err(|e| {
                BookmarkError::MalformedTree(format!("root \"{}\" is not a folder: {}", key, e))
            })?;
            let name = root.folder_name(key)?;
            let children = root.folder_children(name)?;

            let before = records.len();
            for record in Flatten::new(children, name) {
                records.push(record?);
            }
            debug!(root = %key, name, links = records.len() - before, "flattened root folder");
        }

        records.sort_by(|a, b| a.folder.cmp(&b.folder));
        Ok(records)
    }
}
