//! # CLI Behavior
//!
//! Scriptable access to the same commands the interactive view uses.
//!
//! ```text
//! baira                         # show both lists
//! baira add Call the plumber    # add to todo
//! baira add --buy Oat milk      # add to buy
//! baira rm buy 1                # delete by position (asks first)
//! baira rm todo m1ab2c3dq7k2x   # ...or by id
//! baira mv todo 2               # move to the other list
//! baira reset                   # clear everything (asks first)
//! baira ui                      # interactive view
//! ```
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch, context setup and per-command handlers
//! - `print`: Output formatting (lists, messages)
//! - `prompt`: Confirmation on stdin
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
mod prompt;
pub mod setup;

pub use commands::run;
