use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// What a key press means to the interactive view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    AddTodo,
    AddBuy,
    ClearInput,
    RequestReset,
    RequestDelete,
    MoveSelected,
    SwitchList,
    SelectUp,
    SelectDown,
    InputChar(char),
    Paste(String),
    Backspace,
    ConfirmYes,
    ConfirmNo,
    Resize,
    Quit,
}

/// Maps a key press to an event.
///
/// While a confirmation is pending only the answer keys (and quit) do anything.
pub fn map_key(key: KeyEvent, confirming: bool) -> Option<TuiEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return Some(TuiEvent::Quit);
    }

    if confirming {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(TuiEvent::ConfirmYes),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(TuiEvent::ConfirmNo),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Delete if ctrl && shift => Some(TuiEvent::RequestReset),
        KeyCode::Delete => Some(TuiEvent::RequestDelete),
        KeyCode::Enter if ctrl => Some(TuiEvent::AddBuy),
        // ASCII LF: what most terminals without the keyboard protocol send for Ctrl+Enter
        KeyCode::Char('j') if ctrl => Some(TuiEvent::AddBuy),
        KeyCode::Enter => Some(TuiEvent::AddTodo),
        KeyCode::Esc => Some(TuiEvent::ClearInput),
        KeyCode::Char('t') if ctrl => Some(TuiEvent::MoveSelected),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(TuiEvent::InputChar(c)),
        KeyCode::Backspace => Some(TuiEvent::Backspace),
        KeyCode::Tab | KeyCode::BackTab => Some(TuiEvent::SwitchList),
        KeyCode::Up => Some(TuiEvent::SelectUp),
        KeyCode::Down => Some(TuiEvent::SelectDown),
        _ => None,
    }
}

/// Waits up to `timeout` for the next meaningful event.
pub fn poll_event(timeout: Duration, confirming: bool) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let mapped = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            map_key(key, confirming)
        }
        Event::Paste(data) if !confirming => Some(TuiEvent::Paste(data)),
        Event::Resize(..) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn enter_adds_to_todo() {
        assert_eq!(
            map_key(key(KeyCode::Enter, KeyModifiers::NONE), false),
            Some(TuiEvent::AddTodo)
        );
    }

    #[test]
    fn ctrl_enter_adds_to_buy() {
        assert_eq!(
            map_key(key(KeyCode::Enter, KeyModifiers::CONTROL), false),
            Some(TuiEvent::AddBuy)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('j'), KeyModifiers::CONTROL), false),
            Some(TuiEvent::AddBuy)
        );
    }

    #[test]
    fn escape_clears_input() {
        assert_eq!(
            map_key(key(KeyCode::Esc, KeyModifiers::NONE), false),
            Some(TuiEvent::ClearInput)
        );
    }

    #[test]
    fn ctrl_shift_delete_requests_reset() {
        assert_eq!(
            map_key(
                key(KeyCode::Delete, KeyModifiers::CONTROL | KeyModifiers::SHIFT),
                false
            ),
            Some(TuiEvent::RequestReset)
        );
        assert_eq!(
            map_key(key(KeyCode::Delete, KeyModifiers::NONE), false),
            Some(TuiEvent::RequestDelete)
        );
    }

    #[test]
    fn typing_goes_to_input() {
        assert_eq!(
            map_key(key(KeyCode::Char('M'), KeyModifiers::SHIFT), false),
            Some(TuiEvent::InputChar('M'))
        );
        assert_eq!(map_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL), false), None);
    }

    #[test]
    fn confirmation_only_listens_for_answers() {
        let no_mods = KeyModifiers::NONE;
        assert_eq!(map_key(key(KeyCode::Char('y'), no_mods), true), Some(TuiEvent::ConfirmYes));
        assert_eq!(map_key(key(KeyCode::Enter, no_mods), true), Some(TuiEvent::ConfirmYes));
        assert_eq!(map_key(key(KeyCode::Char('N'), no_mods), true), Some(TuiEvent::ConfirmNo));
        assert_eq!(map_key(key(KeyCode::Esc, no_mods), true), Some(TuiEvent::ConfirmNo));
        assert_eq!(map_key(key(KeyCode::Char('a'), no_mods), true), None);
        assert_eq!(map_key(key(KeyCode::Delete, no_mods), true), None);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctrl = KeyModifiers::CONTROL;
        assert_eq!(map_key(key(KeyCode::Char('c'), ctrl), false), Some(TuiEvent::Quit));
        assert_eq!(map_key(key(KeyCode::Char('c'), ctrl), true), Some(TuiEvent::Quit));
    }
}
