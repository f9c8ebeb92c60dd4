//! # Views
//!
//! [`render`] turns a list snapshot into a [`ListView`]: a heading, a count
//! indicator and either an empty-state placeholder or one [`RowView`] per item.
//! Views are plain data. The CLI printer and the TUI both draw from them, so
//! neither surface reaches into [`Lists`](crate::lists::Lists) directly.
//!
//! Every row carries a [`DeleteAction`] naming the list and item id it removes.
//! A surface hands that action back to the command layer unchanged.

use crate::model::{Item, ListName};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub icon: &'static str,
    pub message: &'static str,
}

/// What a row's delete control does when triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteAction {
    pub list: ListName,
    pub item_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// 1-based position in the list, as shown to the user.
    pub position: usize,
    pub item_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub delete: DeleteAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ListBody {
    Empty(EmptyState),
    Rows(Vec<RowView>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub list: ListName,
    pub heading: &'static str,
    pub count: usize,
    pub count_label: String,
    pub body: ListBody,
}

impl ListView {
    pub fn rows(&self) -> &[RowView] {
        match &self.body {
            ListBody::Rows(rows) => rows,
            ListBody::Empty(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, ListBody::Empty(_))
    }
}

pub fn heading(list: ListName) -> &'static str {
    match list {
        ListName::Todo => "TO DO",
        ListName::Buy => "TO BUY",
    }
}

pub fn empty_state(list: ListName) -> EmptyState {
    match list {
        ListName::Todo => EmptyState {
            icon: "📋",
            message: "No tasks added yet",
        },
        ListName::Buy => EmptyState {
            icon: "🧺",
            message: "No items to buy yet",
        },
    }
}

pub fn count_label(count: usize) -> String {
    format!("({})", count)
}

/// Builds the view of `items` as the contents of `list`. Rows follow the slice order.
pub fn render(list: ListName, items: &[Item]) -> ListView {
    let body = if items.is_empty() {
        ListBody::Empty(empty_state(list))
    } else {
        ListBody::Rows(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| RowView {
                    position: i + 1,
                    item_id: item.id.clone(),
                    text: item.text.clone(),
                    created_at: item.created_at,
                    delete: DeleteAction {
                        list,
                        item_id: item.id.clone(),
                    },
                })
                .collect(),
        )
    };

    ListView {
        list,
        heading: heading(list),
        count: items.len(),
        count_label: count_label(items.len()),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, text: &str) -> Item {
        Item::new(id.into(), text.into(), Utc::now())
    }

    #[test]
    fn empty_lists_get_distinct_placeholders() {
        let todo = render(ListName::Todo, &[]);
        let buy = render(ListName::Buy, &[]);

        assert!(todo.is_empty() && buy.is_empty());
        assert_eq!(todo.count_label, "(0)");
        assert_ne!(todo.body, buy.body);
        match buy.body {
            ListBody::Empty(state) => assert_eq!(state.message, "No items to buy yet"),
            ListBody::Rows(_) => panic!("expected empty state"),
        }
    }

    #[test]
    fn rows_follow_list_order_and_carry_delete_actions() {
        let items = vec![item("b", "Bread"), item("m", "Milk")];
        let view = render(ListName::Buy, &items);

        assert_eq!(view.count_label, "(2)");
        let rows = view.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, "Bread");
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[1].position, 2);
        assert_eq!(
            rows[1].delete,
            DeleteAction {
                list: ListName::Buy,
                item_id: "m".into()
            }
        );
    }

    #[test]
    fn headings_name_the_list() {
        assert_eq!(render(ListName::Todo, &[]).heading, "TO DO");
        assert_eq!(render(ListName::Buy, &[]).heading, "TO BUY");
    }
}
