use crate::error::{BairaError, Result};
use crate::store::fs::DEFAULT_KEY_PREFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 30;

/// Configuration for baira, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BairaConfig {
    /// Prefix of the storage keys (`<prefix>_todo`, `<prefix>_buy`)
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Width of a printed list line
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Show how long ago each item was added
    #[serde(default = "default_show_age")]
    pub show_age: bool,
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

fn default_show_age() -> bool {
    true
}

impl Default for BairaConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            line_width: default_line_width(),
            show_age: default_show_age(),
        }
    }
}

/// A settable configuration key, as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    KeyPrefix,
    LineWidth,
    ShowAge,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [ConfigKey::KeyPrefix, ConfigKey::LineWidth, ConfigKey::ShowAge];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::KeyPrefix => "key-prefix",
            ConfigKey::LineWidth => "line-width",
            ConfigKey::ShowAge => "show-age",
        }
    }

    pub fn parse(name: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.name() == name)
            .ok_or_else(|| BairaError::Config(format!("Unknown config key: {}", name)))
    }
}

/// Key prefixes end up in file names, so only `[A-Za-z0-9_-]` is allowed.
fn is_valid_key_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl BairaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BairaError::Io)?;
        let mut config: BairaConfig =
            serde_json::from_str(&content).map_err(BairaError::Serialization)?;
        if !is_valid_key_prefix(&config.key_prefix) {
            log::warn!(
                "Ignoring invalid key prefix '{}' in {}",
                config.key_prefix,
                config_path.display()
            );
            config.key_prefix = default_key_prefix();
        }
        if config.line_width < MIN_LINE_WIDTH {
            log::warn!("Line width {} is too small, using {}", config.line_width, MIN_LINE_WIDTH);
            config.line_width = MIN_LINE_WIDTH;
        }
        Ok(config)
    }

    /// Like [`BairaConfig::load`], falling back to defaults when the file is unreadable.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(config_dir).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BairaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BairaError::Serialization)?;
        fs::write(config_path, content).map_err(BairaError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::KeyPrefix => self.key_prefix.clone(),
            ConfigKey::LineWidth => self.line_width.to_string(),
            ConfigKey::ShowAge => self.show_age.to_string(),
        }
    }

    /// Validates `value` and stores it under `key`.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            ConfigKey::KeyPrefix => {
                if !is_valid_key_prefix(value) {
                    return Err(BairaError::Config(format!(
                        "Invalid key prefix '{}': use letters, digits, '-' or '_'",
                        value
                    )));
                }
                self.key_prefix = value.to_string();
            }
            ConfigKey::LineWidth => {
                let width: usize = value.parse().map_err(|_| {
                    BairaError::Config(format!("Invalid line width '{}'", value))
                })?;
                if width < MIN_LINE_WIDTH {
                    return Err(BairaError::Config(format!(
                        "Line width must be at least {}",
                        MIN_LINE_WIDTH
                    )));
                }
                self.line_width = width;
            }
            ConfigKey::ShowAge => {
                self.show_age = match value.to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => {
                        return Err(BairaError::Config(format!(
                            "Invalid value '{}' for show-age (expected true or false)",
                            value
                        )));
                    }
                };
            }
        }
        Ok(())
    }
}
