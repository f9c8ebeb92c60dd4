use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lists::Lists;
use crate::model::ListName;
use crate::store::ListStorage;

use super::helpers::{all_views, persist};

/// Moves an item from `from` to the head of the other list.
pub fn run<S: ListStorage>(
    lists: &mut Lists,
    storage: &mut S,
    from: ListName,
    id: &str,
) -> Result<CmdResult> {
    let Some(item) = lists.move_item(from, id) else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "No item '{}' in the {} list.",
            id, from
        )));
        return Ok(result);
    };
    let to = from.other();
    log::info!("Moved {} from {} to {}", id, from, to);

    let mut result = CmdResult::default();
    persist(storage, lists, &ListName::ALL, &mut result);
    result.add_message(CmdMessage::success(format!(
        "Moved to {}: {}",
        to, item.text
    )));

    Ok(result
        .with_affected_items(vec![item])
        .with_views(all_views(lists)))
}
