//! # Interactive View
//!
//! The ratatui/crossterm front end: a text input on top, the two lists side by
//! side, and a status line holding prompts, notices and the clear-all trigger.
//!
//! This is the only module that knows about ratatui and crossterm. Key presses
//! are mapped to [`event::TuiEvent`]s, applied to [`state::TuiState`] (which
//! calls into the API), and the screen is redrawn from the resulting views.
//!
//! ## Redraw Strategy
//!
//! The loop polls for input with a short timeout so the acknowledgment timers
//! (add flash, "CLEARED!" label) expire on time even when no key is pressed.
//! It only redraws after an event or an expired timer.

mod event;
mod state;
mod ui;

use baira::api::BairaApi;
use baira::store::ListStorage;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::info;
use ratatui::DefaultTerminal;
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use event::poll_event;
use state::TuiState;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Keyboard protocol lets Ctrl+Enter and Ctrl+Shift+Delete through on
        // terminals that support it; others ignore the request.
        execute!(
            stdout(),
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

pub fn run<S: ListStorage>(api: BairaApi<S>) -> io::Result<()> {
    let mut state = TuiState::new(api);

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    if let Err(e) = &guard {
        log::warn!("Could not enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut state);

    drop(guard);
    ratatui::restore();
    result
}

fn event_loop<S: ListStorage>(
    terminal: &mut DefaultTerminal,
    state: &mut TuiState<S>,
) -> io::Result<()> {
    let mut needs_redraw = true;

    while !state.should_quit {
        let now = Instant::now();
        if state.tick(now) {
            needs_redraw = true;
        }
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, state, now))?;
            needs_redraw = false;
        }

        if let Some(event) = poll_event(POLL_INTERVAL, state.pending.is_some())? {
            needs_redraw |= state.handle(event, Instant::now());
        }
    }

    info!("Leaving interactive view");
    Ok(())
}
