//! # API Facade
//!
//! [`BairaApi`] is the single entry point for every baira operation, whatever
//! the front end. It owns the in-memory [`Lists`] together with the storage
//! they are persisted to, so the command layer always sees both.
//!
//! The facade:
//! - **Dispatches** to the matching function in `commands/`
//! - **Normalizes inputs** (positions → item ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and never prompts. Confirmation for destructive commands is
//! passed in by the caller as a [`Confirm`] implementation.
//!
//! `BairaApi<S: ListStorage>` is generic over the storage backend:
//! - Production: `BairaApi<FileStore>`
//! - Testing: `BairaApi<InMemoryStore>`

use crate::commands;
use crate::confirm::Confirm;
use crate::error::Result;
use crate::ids::{IdGenerator, TimeRandomIds};
use crate::lists::Lists;
use crate::model::ListName;
use crate::store::ListStorage;
use crate::view::ListView;

pub struct BairaApi<S: ListStorage> {
    storage: S,
    lists: Lists,
    paths: commands::BairaPaths,
}

impl<S: ListStorage> BairaApi<S> {
    /// Loads both lists from `storage` (empty when nothing usable is stored).
    pub fn new(storage: S, paths: commands::BairaPaths) -> Self {
        Self::with_ids(storage, paths, Box::new(TimeRandomIds))
    }

    pub fn with_ids(storage: S, paths: commands::BairaPaths, ids: Box<dyn IdGenerator>) -> Self {
        let lists = Lists::load(&storage, ids);
        log::debug!(
            "Loaded {} todo and {} buy items",
            lists.len(ListName::Todo),
            lists.len(ListName::Buy)
        );
        Self {
            storage,
            lists,
            paths,
        }
    }

    pub fn add_item(&mut self, list: ListName, text: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.lists, &mut self.storage, list, text)
    }

    /// Removes the item named by `selector` (an id or a 1-based position).
    pub fn remove_item(
        &mut self,
        list: ListName,
        selector: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<commands::CmdResult> {
        let id = commands::helpers::resolve_selector(&self.lists, list, selector);
        commands::remove::run(&mut self.lists, &mut self.storage, list, &id, confirm)
    }

    pub fn move_item(&mut self, from: ListName, selector: &str) -> Result<commands::CmdResult> {
        let id = commands::helpers::resolve_selector(&self.lists, from, selector);
        commands::move_item::run(&mut self.lists, &mut self.storage, from, &id)
    }

    pub fn reset(&mut self, confirm: &mut dyn Confirm) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.lists, &mut self.storage, confirm)
    }

    pub fn list(&self, only: Option<ListName>) -> Result<commands::CmdResult> {
        commands::list::run(&self.lists, only)
    }

    /// Current views of both lists, todo first.
    pub fn views(&self) -> Vec<ListView> {
        commands::helpers::all_views(&self.lists)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn lists(&self) -> &Lists {
        &self.lists
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn paths(&self) -> &commands::BairaPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{BairaPaths, CmdMessage, CmdResult, MessageLevel};
