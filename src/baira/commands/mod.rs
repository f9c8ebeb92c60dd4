use crate::config::BairaConfig;
use crate::model::Item;
use crate::view::ListView;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod helpers;
pub mod init;
pub mod list;
pub mod move_item;
pub mod remove;
pub mod reset;

const LOG_FILENAME: &str = "baira.log";

#[derive(Debug, Clone)]
pub struct BairaPaths {
    pub data_dir: PathBuf,
}

impl BairaPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILENAME)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Items created, removed or moved by the command.
    pub affected_items: Vec<Item>,
    /// Fresh views of the lists the command wants (re)drawn.
    pub views: Vec<ListView>,
    pub config: Option<BairaConfig>,
    /// Set when a confirmation gate was declined.
    pub cancelled: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_views(mut self, views: Vec<ListView>) -> Self {
        self.views = views;
        self
    }

    pub fn with_config(mut self, config: BairaConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn cancelled() -> Self {
        let mut result = Self {
            cancelled: true,
            ..Self::default()
        };
        result.add_message(CmdMessage::info("Operation cancelled."));
        result
    }

    /// Messages at warning level or above, e.g. failed saves.
    pub fn problems(&self) -> impl Iterator<Item = &CmdMessage> {
        self.messages
            .iter()
            .filter(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
