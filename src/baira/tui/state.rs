use super::event::TuiEvent;
use baira::api::{BairaApi, CmdMessage, CmdResult};
use baira::confirm::{Confirm, REMOVE_PROMPT, RESET_PROMPT};
use baira::error::Result;
use baira::model::ListName;
use baira::store::ListStorage;
use baira::view::{DeleteAction, ListView};
use std::time::{Duration, Instant};

/// How long an add trigger stays highlighted after adding.
pub const ADD_FLASH: Duration = Duration::from_millis(300);
/// How long the clear-all trigger reads "CLEARED!" after a reset.
pub const RESET_ACK: Duration = Duration::from_secs(2);

/// A destructive action waiting for the user's y/n.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingConfirm {
    Remove(DeleteAction),
    Reset,
}

impl PendingConfirm {
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingConfirm::Remove(_) => REMOVE_PROMPT,
            PendingConfirm::Reset => RESET_PROMPT,
        }
    }
}

/// The user's answer to the modal prompt, handed to the command layer.
struct Answer(bool);

impl Confirm for Answer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// Presentation state of the interactive view.
///
/// The lists themselves live in the API; this keeps the last rendered views,
/// the input buffer, selection, the pending confirmation and the two
/// acknowledgment timers.
pub struct TuiState<S: ListStorage> {
    api: BairaApi<S>,
    pub input: String,
    pub views: Vec<ListView>,
    pub focus: ListName,
    selected: [usize; 2],
    pub pending: Option<PendingConfirm>,
    pub add_flash: Option<(ListName, Instant)>,
    pub reset_ack_until: Option<Instant>,
    pub notice: Option<CmdMessage>,
    pub should_quit: bool,
}

fn slot(list: ListName) -> usize {
    match list {
        ListName::Todo => 0,
        ListName::Buy => 1,
    }
}

impl<S: ListStorage> TuiState<S> {
    /// Starts with the input focused and both lists rendered from `api`.
    pub fn new(api: BairaApi<S>) -> Self {
        let views = api.views();
        Self {
            api,
            input: String::new(),
            views,
            focus: ListName::Todo,
            selected: [0, 0],
            pending: None,
            add_flash: None,
            reset_ack_until: None,
            notice: None,
            should_quit: false,
        }
    }

    pub fn view(&self, list: ListName) -> Option<&ListView> {
        self.views.iter().find(|v| v.list == list)
    }

    pub fn selected(&self, list: ListName) -> usize {
        self.selected[slot(list)]
    }

    pub fn is_flashing(&self, list: ListName, now: Instant) -> bool {
        matches!(self.add_flash, Some((flashing, until)) if flashing == list && now < until)
    }

    pub fn reset_acknowledged(&self, now: Instant) -> bool {
        self.reset_ack_until.is_some_and(|until| now < until)
    }

    /// Applies one event. Returns whether anything visible changed.
    pub fn handle(&mut self, event: TuiEvent, now: Instant) -> bool {
        match event {
            TuiEvent::Quit => self.should_quit = true,
            TuiEvent::Resize => {}
            TuiEvent::AddTodo => self.add(ListName::Todo, now),
            TuiEvent::AddBuy => self.add(ListName::Buy, now),
            TuiEvent::ClearInput => self.input.clear(),
            TuiEvent::InputChar(c) => self.input.push(c),
            TuiEvent::Paste(text) => self
                .input
                .push_str(&text.replace(['\r', '\n'], " ")),
            TuiEvent::Backspace => {
                self.input.pop();
            }
            TuiEvent::SwitchList => self.focus = self.focus.other(),
            TuiEvent::SelectUp => self.move_selection(-1),
            TuiEvent::SelectDown => self.move_selection(1),
            TuiEvent::RequestDelete => {
                if let Some(action) = self.selected_row_action() {
                    self.pending = Some(PendingConfirm::Remove(action));
                } else {
                    return false;
                }
            }
            TuiEvent::RequestReset => self.pending = Some(PendingConfirm::Reset),
            TuiEvent::MoveSelected => {
                let Some(action) = self.selected_row_action() else {
                    return false;
                };
                let outcome = self.api.move_item(action.list, &action.item_id);
                self.apply(outcome);
            }
            TuiEvent::ConfirmYes => self.answer(true, now),
            TuiEvent::ConfirmNo => self.answer(false, now),
        }
        true
    }

    /// Expires the acknowledgment timers. Returns whether a redraw is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if matches!(self.add_flash, Some((_, until)) if now >= until) {
            self.add_flash = None;
            changed = true;
        }
        if self.reset_ack_until.is_some_and(|until| now >= until) {
            self.reset_ack_until = None;
            changed = true;
        }
        changed
    }

    fn add(&mut self, list: ListName, now: Instant) {
        if self.input.trim().is_empty() {
            return;
        }
        let outcome = self.api.add_item(list, &self.input);
        let added = matches!(&outcome, Ok(result) if !result.affected_items.is_empty());
        self.apply(outcome);
        if added {
            self.input.clear();
            self.focus = list;
            self.selected[slot(list)] = 0;
            self.add_flash = Some((list, now + ADD_FLASH));
        }
    }

    fn answer(&mut self, yes: bool, now: Instant) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let mut answer = Answer(yes);
        match pending {
            PendingConfirm::Remove(action) => {
                let outcome = self.api.remove_item(action.list, &action.item_id, &mut answer);
                self.apply(outcome);
            }
            PendingConfirm::Reset => {
                let outcome = self.api.reset(&mut answer);
                let confirmed = matches!(&outcome, Ok(result) if !result.cancelled);
                self.apply(outcome);
                if confirmed {
                    self.reset_ack_until = Some(now + RESET_ACK);
                }
            }
        }
    }

    /// Takes the fresh views and the most relevant message from a command result.
    fn apply(&mut self, outcome: Result<CmdResult>) {
        match outcome {
            Ok(result) => {
                if !result.views.is_empty() {
                    self.views = result.views.clone();
                    self.clamp_selection();
                }
                self.notice = result
                    .problems()
                    .next()
                    .or_else(|| result.messages.last())
                    .cloned();
            }
            Err(e) => {
                log::error!("Command failed: {}", e);
                self.notice = Some(CmdMessage::error(e.to_string()));
            }
        }
    }

    fn selected_row_action(&self) -> Option<DeleteAction> {
        let view = self.view(self.focus)?;
        view.rows()
            .get(self.selected(self.focus))
            .map(|row| row.delete.clone())
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.view(self.focus).map_or(0, |v| v.rows().len());
        if len == 0 {
            return;
        }
        let current = self.selected(self.focus) as isize;
        self.selected[slot(self.focus)] = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    fn clamp_selection(&mut self) {
        for list in ListName::ALL {
            let len = self.view(list).map_or(0, |v| v.rows().len());
            let selected = &mut self.selected[slot(list)];
            *selected = (*selected).min(len.saturating_sub(1));
        }
    }
}
