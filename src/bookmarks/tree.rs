// src/bookmarks/tree.rs
// =============================================================================
// Flattens the nested folder/link tree into a list of BookmarkRecords.
//
// How it works:
// 1. Start with a stack holding one frame: (children of the root, root name)
// 2. Take the next child from the frame on top of the stack
// 3. A link becomes a record right away
// 4. A folder pushes a new frame: (its children, prefix + "/" + its name)
// 5. When a frame runs out of children, pop it and carry on with the parent
//
// This is a depth-first walk in child order, the same order you'd get from
// a recursive function, but with an explicit stack instead of recursion.
//
// Rust concepts:
// - Iterator trait: Flatten produces records lazily, one per next() call
// - Lifetimes: the iterator borrows the tree ('a), it doesn't copy it
// - std::slice::Iter: a borrowed iterator over a Vec's elements
// =============================================================================

use super::error::BookmarkError;
use super::record::BookmarkRecord;
use serde::Deserialize;

// One node of the bookmarks tree, exactly as it appears in the JSON.
//
// Every field is optional here so that a missing field turns into a clear
// MissingField error (with the folder it happened in) instead of a generic
// serde error that just says "missing field `url`".
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    /// "folder" for folders, "url" for links (some exports leave it out)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// Anything that isn't explicitly a folder is treated as a link
    pub fn is_folder(&self) -> bool {
        self.kind.as_deref() == Some("folder")
    }

    /// The folder's name, or a MissingField error naming where we were
    pub fn folder_name(&self, parent: &str) -> Result<&str, BookmarkError> {
        self.name.as_deref().ok_or_else(|| BookmarkError::MissingField {
            field: "name",
            folder: parent.to_string(),
        })
    }

    /// The folder's children, or a MissingField error
    pub fn folder_children(&self, parent: &str) -> Result<&[Node], BookmarkError> {
        self.children
            .as_deref()
            .ok_or_else(|| BookmarkError::MissingField {
                field: "children",
                folder: parent.to_string(),
            })
    }

    fn to_record(&self, folder: &str) -> Result<BookmarkRecord, BookmarkError> {
        let missing = |field| BookmarkError::MissingField {
            field,
            folder: folder.to_string(),
        };
        let title = self.name.as_deref().ok_or_else(|| missing("name"))?;
        let url = self.url.as_deref().ok_or_else(|| missing("url"))?;
        Ok(BookmarkRecord::new(folder, title, url))
    }
}

// A lazy depth-first walk over a list of nodes.
//
// Each stack frame is (remaining children, folder path of those children).
pub struct Flatten<'a> {
    stack: Vec<(std::slice::Iter<'a, Node>, String)>,
}

impl<'a> Flatten<'a> {
    pub fn new(children: &'a [Node], prefix: impl Into<String>) -> Self {
        Flatten {
            stack: vec![(children.iter(), prefix.into())],
        }
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = Result<BookmarkRecord, BookmarkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // No frames left = the whole tree has been visited
            let (children, prefix) = self.stack.last_mut()?;

            let node = match children.next() {
                Some(node) => node,
                None => {
                    // This folder is done, go back up to its parent
                    self.stack.pop();
                    continue;
                }
            };

            if !node.is_folder() {
                return Some(node.to_record(prefix));
            }

            let frame = node.folder_name(prefix).and_then(|name| {
                let nested = format!("{}/{}", prefix, name);
                Ok((node.folder_children(&nested)?.iter(), nested))
            });

            match frame {
                Ok(frame) => self.stack.push(frame),
                Err(e) => {
                    // A broken tree aborts the whole walk
                    self.stack.clear();
                    return Some(Err(e));
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why `self.stack.last_mut()?` inside next()?
//    - last_mut() returns Option<&mut Frame>
//    - The ? operator on an Option returns None early if it's None
//    - For an Iterator, returning None means "no more items" - exactly what
//      we want once the stack is empty
//
// 2. Why clear the stack after an error?
//    - Once we've reported a malformed node, the iterator is finished
//    - Callers that collect into Result<Vec<_>, _> stop at the first Err anyway
// -----------------------------------------------------------------------------
