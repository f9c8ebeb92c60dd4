use crate::commands::{CmdMessage, CmdResult};
use crate::lists::Lists;
use crate::model::ListName;
use crate::store::ListStorage;
use crate::view::{self, ListView};

/// Writes `targets` to storage.
///
/// A failed save does not undo the in-memory change: it is logged and reported as
/// a warning on `result` so the user knows the data only lives in this session.
pub fn persist<S: ListStorage>(
    storage: &mut S,
    lists: &Lists,
    targets: &[ListName],
    result: &mut CmdResult,
) {
    for &list in targets {
        if let Err(e) = storage.save(list, lists.items(list)) {
            log::error!("Failed to save the {} list: {}", list, e);
            result.add_message(CmdMessage::warning(format!(
                "Could not save the {} list ({}); changes are kept in memory only.",
                list, e
            )));
        }
    }
}

/// Removes the persisted entries for `targets`, reporting failures like [`persist`].
pub fn clear<S: ListStorage>(storage: &mut S, targets: &[ListName], result: &mut CmdResult) {
    for &list in targets {
        if let Err(e) = storage.clear(list) {
            log::error!("Failed to clear the stored {} list: {}", list, e);
            result.add_message(CmdMessage::warning(format!(
                "Could not clear the stored {} list ({}).",
                list, e
            )));
        }
    }
}

/// Views of both lists, todo first.
pub fn all_views(lists: &Lists) -> Vec<ListView> {
    ListName::ALL
        .iter()
        .map(|&list| view::render(list, lists.items(list)))
        .collect()
}

/// Turns a user selector into an item id.
///
/// An exact id match wins; otherwise a number is read as a 1-based position.
/// Anything else is passed through unchanged and will simply not match.
pub fn resolve_selector(lists: &Lists, list: ListName, selector: &str) -> String {
    let selector = selector.trim();
    if lists.find(list, selector).is_some() {
        return selector.to_string();
    }

    selector
        .parse::<usize>()
        .ok()
        .filter(|&position| position >= 1)
        .and_then(|position| lists.items(list).get(position - 1))
        .map(|item| item.id.clone())
        .unwrap_or_else(|| selector.to_string())
}
