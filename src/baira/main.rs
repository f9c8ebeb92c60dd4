//! # Baira binary
//!
//! Thin entry point: the CLI lives in `cli/`, the interactive view in `tui/`.
//! Both talk to the library only through [`baira::api::BairaApi`].

mod cli;
mod tui;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
