//! Confirmation gate for destructive commands.
//!
//! Removing an item and clearing both lists only commit after a [`Confirm`]
//! implementation says yes. The CLI prompts on stdin, the TUI answers from its
//! modal prompt, and tests pass [`AlwaysConfirm`], [`NeverConfirm`] or a closure.

pub trait Confirm {
    /// Asks the user `prompt`; `true` lets the command go ahead.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}

pub const REMOVE_PROMPT: &str = "Are you sure you want to delete this item?";
pub const RESET_PROMPT: &str =
    "Are you sure you want to delete all lists? This action cannot be undone.";
