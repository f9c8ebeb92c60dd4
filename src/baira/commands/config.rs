use crate::commands::{BairaPaths, CmdMessage, CmdResult};
use crate::config::{BairaConfig, ConfigKey};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(ConfigKey),
    Set(ConfigKey, String),
}

pub fn run(paths: &BairaPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.config_dir();
    let mut config = BairaConfig::load_or_default(dir);
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::Set(key, value) => {
            config.set(key, &value)?;
            config.save(dir)?;
            log::info!("Config {} set to {}", key.name(), config.get(key));
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key.name(),
                config.get(key)
            )));
        }
    }

    Ok(result.with_config(config))
}
