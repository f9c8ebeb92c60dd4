//! # Storage Layer
//!
//! Two named collections live in a key-value store, one entry per list.
//! The [`ListStorage`] trait is the serialization boundary between the in-memory
//! [`Lists`](crate::lists::Lists) and whatever keeps the bytes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON document per key
//! - [`memory::InMemoryStore`]: raw strings in a map, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── baira_todo.json   # JSON array of items, newest first
//! ├── baira_buy.json
//! ├── config.json
//! └── baira.log
//! ```
//!
//! Each item is `{"id": "...", "text": "...", "createdAt": "<rfc3339>"}`.
//!
//! ## Failure Semantics
//!
//! Loading never fails: a missing key, an unreadable file or a document that does
//! not parse all come back as an empty list (the latter two are logged).
//! Saving and clearing return errors so command handlers can warn the user.

use crate::error::Result;
use crate::model::{Item, ListName};

pub mod fs;
pub mod memory;

/// Key-value persistence for the two lists.
///
/// Backends implement the raw `read`/`write`/`remove` operations; the typed
/// `load`/`save`/`clear` operations are built on top of them.
pub trait ListStorage {
    /// Raw persisted document for a list, `None` when nothing is stored.
    fn read(&self, list: ListName) -> Result<Option<String>>;

    /// Replace the persisted document for a list.
    fn write(&mut self, list: ListName, contents: &str) -> Result<()>;

    /// Remove the persisted document for a list. Removing a missing key is fine.
    fn remove(&mut self, list: ListName) -> Result<()>;

    fn load(&self, list: ListName) -> Vec<Item> {
        let raw = match self.read(list) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Could not read the {} list, starting empty: {}", list, e);
                return Vec::new();
            }
        };

        match decode_items(&raw) {
            Ok(items) => items,
            Err(e) => {
                log::warn!(
                    "Stored {} list is malformed, starting empty: {}",
                    list,
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, list: ListName, items: &[Item]) -> Result<()> {
        let contents = encode_items(items)?;
        self.write(list, &contents)
    }

    fn clear(&mut self, list: ListName) -> Result<()> {
        self.remove(list)
    }
}

/// Parses a stored document. A literal `null` counts as an empty list.
pub fn decode_items(raw: &str) -> Result<Vec<Item>> {
    let parsed: Option<Vec<Item>> = serde_json::from_str(raw)?;
    Ok(parsed.unwrap_or_default())
}

pub fn encode_items(items: &[Item]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}
