use super::ListStorage;
use crate::error::{BairaError, Result};
use crate::model::ListName;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: HashMap<ListName, String>,
    simulate_write_error: bool,
    simulate_read_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw document as-is, bypassing serialization.
    pub fn put_raw(&mut self, list: ListName, raw: &str) {
        self.entries.insert(list, raw.to_string());
    }

    /// Make every `write`/`remove` fail, as a full or read-only disk would.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    pub fn contains(&self, list: ListName) -> bool {
        self.entries.contains_key(&list)
    }
}

impl ListStorage for InMemoryStore {
    fn read(&self, list: ListName) -> Result<Option<String>> {
        if self.simulate_read_error {
            return Err(BairaError::Store("Simulated read error".to_string()));
        }
        Ok(self.entries.get(&list).cloned())
    }

    fn write(&mut self, list: ListName, contents: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(BairaError::Store("Simulated write error".to_string()));
        }
        self.entries.insert(list, contents.to_string());
        Ok(())
    }

    fn remove(&mut self, list: ListName) -> Result<()> {
        if self.simulate_write_error {
            return Err(BairaError::Store("Simulated write error".to_string()));
        }
        self.entries.remove(&list);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Item;
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Persist `texts` to `list`, first text newest, with ids `<list>-1`, `<list>-2`, ...
        pub fn with_items(mut self, list: ListName, texts: &[&str]) -> Self {
            let now = Utc::now();
            let items: Vec<Item> = texts
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    Item::new(
                        format!("{}-{}", list, i + 1),
                        text.to_string(),
                        now - Duration::minutes(i as i64),
                    )
                })
                .collect();
            self.store.save(list, &items).unwrap();
            self
        }

        pub fn with_raw(mut self, list: ListName, raw: &str) -> Self {
            self.store.put_raw(list, raw);
            self
        }
    }
}
