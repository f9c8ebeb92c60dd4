use crate::commands::{BairaPaths, CmdMessage, CmdResult};
use crate::error::Result;
use std::fs;

pub fn run(paths: &BairaPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized baira store at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}
