use crate::commands::CmdResult;
use crate::error::Result;
use crate::lists::Lists;
use crate::model::ListName;
use crate::view;

use super::helpers::all_views;

/// Views of one list, or of both when `only` is `None`.
pub fn run(lists: &Lists, only: Option<ListName>) -> Result<CmdResult> {
    let views = match only {
        Some(list) => vec![view::render(list, lists.items(list))],
        None => all_views(lists),
    };
    Ok(CmdResult::default().with_views(views))
}
