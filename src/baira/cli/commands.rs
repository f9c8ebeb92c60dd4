//! # CLI Layer
//!
//! The CLI is **one possible client** of the baira library; the interactive
//! view in `tui/` is the other. This module is the only place that:
//! - Resolves the data directory and sets up logging
//! - Prints results and prompts for confirmation
//! - Turns errors into exit codes (via `main.rs`)
//!
//! Running `baira` with no subcommand lists both lists.

use super::print::{PrintOptions, print_messages, print_views};
use super::prompt::StdinConfirm;
use super::setup::{Cli, Commands};
use crate::tui;
use baira::api::{BairaApi, BairaPaths, CmdResult, ConfigAction};
use baira::config::{BairaConfig, ConfigKey};
use baira::confirm::{AlwaysConfirm, Confirm};
use baira::error::{BairaError, Result};
use baira::model::ListName;
use baira::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// Overrides the data directory (useful for tests and portable setups).
pub const HOME_ENV: &str = "BAIRA_HOME";

struct AppContext {
    api: BairaApi<FileStore>,
    config: BairaConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = BairaPaths::new(data_dir()?);
    init_logging(&paths, cli.verbose);
    log::debug!("Running {:?} with data dir {}", cli.command, paths.data_dir.display());

    let mut ctx = init_context(paths);

    match cli.command {
        Some(Commands::Add { buy, text }) => {
            let list = if buy { ListName::Buy } else { ListName::Todo };
            handle_add(&mut ctx, list, &text.join(" "))
        }
        Some(Commands::List { list, json }) => {
            let list = list.as_deref().map(str::parse::<ListName>).transpose()?;
            handle_list(&ctx, list, json)
        }
        Some(Commands::Remove { list, item, yes }) => {
            handle_remove(&mut ctx, list.parse::<ListName>()?, &item, yes)
        }
        Some(Commands::Move { list, item }) => {
            handle_move(&mut ctx, list.parse::<ListName>()?, &item)
        }
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Ui) => handle_ui(ctx),
        None => handle_list(&ctx, None, false),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "baira", "baira")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BairaError::Config("Could not determine a data directory".to_string()))
}

fn init_logging(paths: &BairaPaths, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if fs::create_dir_all(&paths.data_dir).is_err() {
        return;
    }
    if let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
    {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn init_context(paths: BairaPaths) -> AppContext {
    let config = BairaConfig::load_or_default(paths.config_dir());
    let store = FileStore::new(paths.data_dir.clone()).with_key_prefix(&config.key_prefix);
    let api = BairaApi::new(store, paths);
    AppContext { api, config }
}

fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
}

fn handle_add(ctx: &mut AppContext, list: ListName, text: &str) -> Result<()> {
    let result = ctx.api.add_item(list, text)?;
    print_result(&result);
    Ok(())
}

fn handle_list(ctx: &AppContext, list: Option<ListName>, json: bool) -> Result<()> {
    let result = ctx.api.list(list)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.views)?);
    } else {
        print_views(&result.views, PrintOptions::from(&ctx.config));
    }
    print_result(&result);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, list: ListName, item: &str, yes: bool) -> Result<()> {
    let mut confirm: Box<dyn Confirm> = if yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(StdinConfirm)
    };
    let result = ctx.api.remove_item(list, item, confirm.as_mut())?;
    print_result(&result);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, list: ListName, item: &str) -> Result<()> {
    let result = ctx.api.move_item(list, item)?;
    print_result(&result);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let mut confirm: Box<dyn Confirm> = if yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(StdinConfirm)
    };
    let result = ctx.api.reset(confirm.as_mut())?;
    print_result(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(ConfigKey::parse(&key)?),
        (Some(key), Some(value)) => ConfigAction::Set(ConfigKey::parse(&key)?, value),
    };
    let show = match &action {
        ConfigAction::ShowAll => ConfigKey::ALL.to_vec(),
        ConfigAction::ShowKey(key) => vec![*key],
        ConfigAction::Set(..) => Vec::new(),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for key in show {
            println!("{} = {}", key.name(), config.get(key));
        }
    }
    print_result(&result);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_result(&result);
    Ok(())
}

fn handle_ui(ctx: AppContext) -> Result<()> {
    log::info!(
        "Starting interactive view on {}",
        ctx.api.paths().data_dir.display()
    );
    tui::run(ctx.api)?;
    Ok(())
}
