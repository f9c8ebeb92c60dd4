use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lists::Lists;
use crate::model::ListName;
use crate::store::ListStorage;

use super::helpers::{all_views, persist};

pub fn run<S: ListStorage>(
    lists: &mut Lists,
    storage: &mut S,
    list: ListName,
    text: &str,
) -> Result<CmdResult> {
    let Some(item) = lists.add_item(list, text) else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to add."));
        return Ok(result);
    };
    log::info!("Added {} to {}", item.id, list);

    let mut result = CmdResult::default();
    persist(storage, lists, &ListName::ALL, &mut result);
    result.add_message(CmdMessage::success(format!(
        "Added to {}: {}",
        list, item.text
    )));

    Ok(result
        .with_affected_items(vec![item])
        .with_views(all_views(lists)))
}
