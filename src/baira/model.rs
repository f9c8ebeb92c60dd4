use crate::error::BairaError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two collections baira keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListName {
    Todo,
    Buy,
}

impl ListName {
    pub const ALL: [ListName; 2] = [ListName::Todo, ListName::Buy];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListName::Todo => "todo",
            ListName::Buy => "buy",
        }
    }

    /// The list an item lands in when moved away from this one.
    pub fn other(&self) -> ListName {
        match self {
            ListName::Todo => ListName::Buy,
            ListName::Buy => ListName::Todo,
        }
    }

    /// Storage key for this list under the given prefix (`baira_todo`, `baira_buy`).
    pub fn storage_key(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.as_str())
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListName {
    type Err = BairaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" | "t" => Ok(ListName::Todo),
            "buy" | "b" => Ok(ListName::Buy),
            other => Err(BairaError::Api(format!(
                "Unknown list '{}' (expected 'todo' or 'buy')",
                other
            ))),
        }
    }
}

/// A single entry in a list. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(id: String, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_names_case_insensitively() {
        assert_eq!("todo".parse::<ListName>().unwrap(), ListName::Todo);
        assert_eq!("BUY".parse::<ListName>().unwrap(), ListName::Buy);
        assert_eq!("b".parse::<ListName>().unwrap(), ListName::Buy);
        assert!("groceries".parse::<ListName>().is_err());
    }

    #[test]
    fn storage_keys_follow_prefix() {
        assert_eq!(ListName::Todo.storage_key("baira"), "baira_todo");
        assert_eq!(ListName::Buy.storage_key("work"), "work_buy");
    }

    #[test]
    fn item_serializes_with_camel_case_fields() {
        let created = DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let item = Item::new("lt1x2abcde".into(), "Buy milk".into(), created);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "lt1x2abcde");
        assert_eq!(json["text"], "Buy milk");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn other_list_swaps() {
        assert_eq!(ListName::Todo.other(), ListName::Buy);
        assert_eq!(ListName::Buy.other(), ListName::Todo);
    }
}
