use crate::commands::{CmdMessage, CmdResult};
use crate::confirm::{Confirm, RESET_PROMPT};
use crate::error::Result;
use crate::lists::Lists;
use crate::model::ListName;
use crate::store::ListStorage;

use super::helpers::{all_views, clear};

pub fn run<S: ListStorage>(
    lists: &mut Lists,
    storage: &mut S,
    confirm: &mut dyn Confirm,
) -> Result<CmdResult> {
    if !confirm.confirm(RESET_PROMPT) {
        log::debug!("Reset declined");
        return Ok(CmdResult::cancelled());
    }

    let removed: Vec<_> = ListName::ALL
        .iter()
        .flat_map(|&list| lists.items(list).to_vec())
        .collect();
    lists.reset_all();
    log::info!("Cleared both lists ({} items)", removed.len());

    let mut result = CmdResult::default();
    clear(storage, &ListName::ALL, &mut result);
    result.add_message(CmdMessage::success("All lists cleared."));

    Ok(result
        .with_affected_items(removed)
        .with_views(all_views(lists)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::confirm::{AlwaysConfirm, NeverConfirm};
    use crate::ids::SequentialIds;
    use crate::store::memory::InMemoryStore;

    fn setup() -> (Lists, InMemoryStore) {
        let mut lists = Lists::new(Box::new(SequentialIds::new("id")));
        let mut store = InMemoryStore::new();
        add::run(&mut lists, &mut store, ListName::Todo, "Write report").unwrap();
        add::run(&mut lists, &mut store, ListName::Buy, "Coffee").unwrap();
        (lists, store)
    }

    #[test]
    fn confirmed_reset_empties_memory_and_storage() {
        let (mut lists, mut store) = setup();
        let result = run(&mut lists, &mut store, &mut AlwaysConfirm).unwrap();

        assert!(lists.is_empty());
        assert!(!store.contains(ListName::Todo));
        assert!(!store.contains(ListName::Buy));
        assert_eq!(result.affected_items.len(), 2);
        assert!(result.views.iter().all(|v| v.is_empty()));
    }

    #[test]
    fn declined_reset_keeps_everything() {
        let (mut lists, mut store) = setup();
        let result = run(&mut lists, &mut store, &mut NeverConfirm).unwrap();

        assert!(result.cancelled);
        assert_eq!(lists.len(ListName::Todo), 1);
        assert_eq!(lists.len(ListName::Buy), 1);
        assert!(store.contains(ListName::Todo));
        assert!(store.contains(ListName::Buy));
    }

    #[test]
    fn reset_of_empty_lists_succeeds() {
        let mut lists = Lists::new(Box::new(SequentialIds::default()));
        let mut store = InMemoryStore::new();
        let result = run(&mut lists, &mut store, &mut AlwaysConfirm).unwrap();
        assert_eq!(result.problems().count(), 0);
    }

    #[test]
    fn storage_failure_is_reported() {
        let (mut lists, mut store) = setup();
        store.set_simulate_write_error(true);

        let result = run(&mut lists, &mut store, &mut AlwaysConfirm).unwrap();
        assert!(lists.is_empty());
        assert_eq!(result.problems().count(), 2);
    }
}
