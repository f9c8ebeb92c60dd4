use crate::commands::{CmdMessage, CmdResult};
use crate::confirm::{Confirm, REMOVE_PROMPT};
use crate::error::Result;
use crate::lists::Lists;
use crate::model::ListName;
use crate::store::ListStorage;

use super::helpers::{all_views, persist};

pub fn run<S: ListStorage>(
    lists: &mut Lists,
    storage: &mut S,
    list: ListName,
    id: &str,
    confirm: &mut dyn Confirm,
) -> Result<CmdResult> {
    // 1. Nothing to ask about if the item is already gone
    let Some(item) = lists.find(list, id).cloned() else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "No item '{}' in the {} list.",
            id, list
        )));
        return Ok(result);
    };

    // 2. Confirm
    if !confirm.confirm(REMOVE_PROMPT) {
        log::debug!("Removal of {} from {} declined", id, list);
        return Ok(CmdResult::cancelled());
    }

    // 3. Remove
    lists.remove_item(list, id);
    log::info!("Removed {} from {}", id, list);

    let mut result = CmdResult::default();
    persist(storage, lists, &ListName::ALL, &mut result);
    result.add_message(CmdMessage::success(format!(
        "Deleted from {}: {}",
        list, item.text
    )));

    Ok(result
        .with_affected_items(vec![item])
        .with_views(all_views(lists)))
}
