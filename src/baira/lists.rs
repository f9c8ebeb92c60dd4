//! The in-memory list store.
//!
//! [`Lists`] owns both collections and is the source of truth until a command
//! handler persists it. Items are kept newest first.

use crate::ids::{IdGenerator, TimeRandomIds};
use crate::model::{Item, ListName};
use crate::store::ListStorage;
use chrono::Utc;
use std::collections::HashSet;

pub struct Lists {
    todo: Vec<Item>,
    buy: Vec<Item>,
    ids: Box<dyn IdGenerator>,
}

impl Default for Lists {
    fn default() -> Self {
        Self::new(Box::new(TimeRandomIds))
    }
}

impl Lists {
    /// Two empty lists.
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            todo: Vec::new(),
            buy: Vec::new(),
            ids,
        }
    }

    /// Builds the store from whatever `storage` holds, empty lists otherwise.
    pub fn load<S: ListStorage>(storage: &S, ids: Box<dyn IdGenerator>) -> Self {
        let mut lists = Self::new(ids);
        for list in ListName::ALL {
            *lists.items_mut(list) = normalize(list, storage.load(list));
        }
        lists
    }

    pub fn items(&self, list: ListName) -> &[Item] {
        match list {
            ListName::Todo => &self.todo,
            ListName::Buy => &self.buy,
        }
    }

    fn items_mut(&mut self, list: ListName) -> &mut Vec<Item> {
        match list {
            ListName::Todo => &mut self.todo,
            ListName::Buy => &mut self.buy,
        }
    }

    pub fn len(&self, list: ListName) -> usize {
        self.items(list).len()
    }

    pub fn is_empty(&self) -> bool {
        self.todo.is_empty() && self.buy.is_empty()
    }

    pub fn find(&self, list: ListName, id: &str) -> Option<&Item> {
        self.items(list).iter().find(|item| item.id == id)
    }

    /// Adds `text` (trimmed) at the head of `list`.
    ///
    /// Returns `None` and leaves the list untouched when the trimmed text is empty.
    pub fn add_item(&mut self, list: ListName, text: &str) -> Option<Item> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.fresh_id(list);
        let item = Item::new(id, text.to_string(), Utc::now());
        self.items_mut(list).insert(0, item.clone());
        Some(item)
    }

    /// Removes the item with `id`. Returns whether anything was removed.
    pub fn remove_item(&mut self, list: ListName, id: &str) -> bool {
        let items = self.items_mut(list);
        match items.iter().position(|item| item.id == id) {
            Some(position) => {
                items.remove(position);
                true
            }
            None => false,
        }
    }

    /// Moves an item to the head of the other list, keeping its id and timestamp.
    pub fn move_item(&mut self, from: ListName, id: &str) -> Option<Item> {
        let position = self.items(from).iter().position(|item| item.id == id)?;
        let mut item = self.items_mut(from).remove(position);

        let to = from.other();
        if self.find(to, &item.id).is_some() {
            item.id = self.fresh_id(to);
        }
        self.items_mut(to).insert(0, item.clone());
        Some(item)
    }

    pub fn reset_all(&mut self) {
        self.todo.clear();
        self.buy.clear();
    }

    fn fresh_id(&mut self, list: ListName) -> String {
        loop {
            let id = self.ids.next_id();
            if self.find(list, &id).is_none() {
                return id;
            }
            log::debug!("Generated id {} already used in {}, retrying", id, list);
        }
    }
}

/// Drops stored items with blank text and repeated ids (the first one wins).
fn normalize(list: ListName, items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            if item.text.trim().is_empty() {
                log::warn!("Dropping stored {} item {} with blank text", list, item.id);
                return false;
            }
            if !seen.insert(item.id.clone()) {
                log::warn!("Dropping stored {} item with duplicate id {}", list, item.id);
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::store::memory::fixtures::StoreFixture;

    fn lists() -> Lists {
        Lists::new(Box::new(SequentialIds::new("id")))
    }

    fn texts(lists: &Lists, list: ListName) -> Vec<&str> {
        lists.items(list).iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn add_inserts_trimmed_text_at_head() {
        let mut lists = lists();
        lists.add_item(ListName::Todo, "first").unwrap();
        let added = lists.add_item(ListName::Todo, "  second \n").unwrap();

        assert_eq!(added.text, "second");
        assert_eq!(lists.len(ListName::Todo), 2);
        assert_eq!(lists.items(ListName::Todo)[0], added);
        assert_eq!(lists.len(ListName::Buy), 0);
    }

    #[test]
    fn newest_first() {
        let mut lists = lists();
        lists.add_item(ListName::Todo, "A");
        lists.add_item(ListName::Todo, "B");
        assert_eq!(texts(&lists, ListName::Todo), vec!["B", "A"]);
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut lists = lists();
        assert!(lists.add_item(ListName::Buy, "").is_none());
        assert!(lists.add_item(ListName::Buy, "   ").is_none());
        assert!(lists.add_item(ListName::Buy, "\t\n").is_none());
        assert_eq!(lists.len(ListName::Buy), 0);
    }

    #[test]
    fn remove_by_id() {
        let mut lists = lists();
        let a = lists.add_item(ListName::Buy, "Milk").unwrap();
        lists.add_item(ListName::Buy, "Bread").unwrap();

        assert!(lists.remove_item(ListName::Buy, &a.id));
        assert_eq!(lists.len(ListName::Buy), 1);
        assert!(lists.find(ListName::Buy, &a.id).is_none());
    }

    #[test]
    fn load_drops_blank_and_duplicate_items() {
        let raw = r#"[
            {"id":"x","text":"A","createdAt":"2024-05-01T10:00:00Z"},
            {"id":"x","text":"B","createdAt":"2024-05-01T09:00:00Z"},
            {"id":"y","text":"   ","createdAt":"2024-05-01T08:00:00Z"},
            {"id":"z","text":"C","createdAt":"2024-05-01T07:00:00Z"}
        ]"#;
        let fixture = StoreFixture::new().with_raw(ListName::Todo, raw);
        let mut lists = Lists::load(&fixture.store, Box::new(SequentialIds::new("id")));

        assert_eq!(texts(&lists, ListName::Todo), vec!["A", "C"]);
        assert!(lists.remove_item(ListName::Todo, "x"));
        assert_eq!(texts(&lists, ListName::Todo), vec!["C"]);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut lists = lists();
        lists.add_item(ListName::Todo, "Keep me").unwrap();
        assert!(!lists.remove_item(ListName::Todo, "nonexistent"));
        assert_eq!(lists.len(ListName::Todo), 1);
    }

    #[test]
    fn remove_only_touches_the_named_list() {
        let mut lists = lists();
        let a = lists.add_item(ListName::Todo, "Todo thing").unwrap();
        assert!(!lists.remove_item(ListName::Buy, &a.id));
        assert_eq!(lists.len(ListName::Todo), 1);
    }

    #[test]
    fn reset_empties_both_lists() {
        let mut lists = lists();
        lists.add_item(ListName::Todo, "a");
        lists.add_item(ListName::Buy, "b");
        lists.reset_all();
        assert!(lists.is_empty());
    }

    #[test]
    fn duplicate_generated_ids_are_skipped() {
        let mut calls = 0;
        let ids = move || {
            calls += 1;
            if calls <= 2 { "same".to_string() } else { format!("x{}", calls) }
        };
        let mut lists = Lists::new(Box::new(ids));
        let first = lists.add_item(ListName::Todo, "one").unwrap();
        let second = lists.add_item(ListName::Todo, "two").unwrap();
        assert_eq!(first.id, "same");
        assert_eq!(second.id, "x3");
    }

    #[test]
    fn move_keeps_identity_and_goes_to_head() {
        let mut lists = lists();
        lists.add_item(ListName::Buy, "Eggs");
        let item = lists.add_item(ListName::Todo, "Milk").unwrap();

        let moved = lists.move_item(ListName::Todo, &item.id).unwrap();
        assert_eq!(moved, item);
        assert_eq!(lists.len(ListName::Todo), 0);
        assert_eq!(texts(&lists, ListName::Buy), vec!["Milk", "Eggs"]);
    }

    #[test]
    fn move_unknown_id_returns_none() {
        let mut lists = lists();
        assert!(lists.move_item(ListName::Todo, "nope").is_none());
    }

    #[test]
    fn loads_from_storage() {
        let fixture = StoreFixture::new()
            .with_items(ListName::Todo, &["Newest", "Older"])
            .with_raw(ListName::Buy, "garbage");

        let lists = Lists::load(&fixture.store, Box::new(SequentialIds::default()));
        assert_eq!(texts(&lists, ListName::Todo), vec!["Newest", "Older"]);
        assert_eq!(lists.len(ListName::Buy), 0);
    }
}
