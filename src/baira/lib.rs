//! # Baira Architecture
//!
//! Baira keeps two lists, **todo** and **buy**, and persists them between runs.
//! The crate is a UI-agnostic library with two front ends in the binary: a
//! scriptable CLI and an interactive terminal UI.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front ends (cli/, tui/, wired by main.rs)                  │
//! │  - Parse arguments / key events, draw views, prompt         │
//! │  - The ONLY place that knows about the terminal             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory Lists and the storage backend         │
//! │  - Normalizes inputs (positions → ids)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - mutate Lists → persist → return fresh views              │
//! │  - destructive commands go through a Confirm gate           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ListStorage trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or reads stdin.
//! Diagnostics go through the `log` facade; user-facing outcomes come back as
//! [`CmdMessage`](commands::CmdMessage)s inside a [`CmdResult`](commands::CmdResult).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: add, remove, move, reset, list, config, init
//! - [`lists`]: The in-memory list store
//! - [`view`]: Structured views of a list (rows, counts, empty states)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `ListName` and `Item`
//! - [`ids`]: Item id generators
//! - [`confirm`]: Confirmation gate for destructive commands
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod error;
pub mod ids;
pub mod lists;
pub mod model;
pub mod store;
pub mod view;
