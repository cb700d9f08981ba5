//! Pure key-to-action mapping for the calculator.
//!
//! The pure core of key handling: `determine_action` maps a key event and
//! minimal context to a user intent. The imperative shell in `app` executes
//! it. Keeping the mapping pure lets tests cover it without terminal state.

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::RecalcMode;

/// User intents in the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcAction {
    /// Quit the calculator.
    Quit,

    /// Move focus to the next input field.
    FocusNext,

    /// Move focus to the previous input field.
    FocusPrev,

    /// Type a character into the focused field.
    InsertChar(char),

    /// Delete the last character of the focused field.
    DeleteChar,

    /// Step the focused field up by its widget step size.
    StepUp,

    /// Step the focused field down, clamped at the widget minimum.
    StepDown,

    /// Re-derive the outputs from the current inputs.
    Recalculate,

    /// Return every input (and output) to the zero defaults.
    Reset,

    /// Flip between the dark and light themes.
    ToggleTheme,
}

/// Context needed to evaluate guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    pub mode: RecalcMode,
}

/// Pure function: determine which action a key triggers.
pub fn determine_action(key: KeyEvent, ctx: ActionContext) -> Option<CalcAction> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(CalcAction::Quit),
        KeyCode::Tab | KeyCode::Down => Some(CalcAction::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(CalcAction::FocusPrev),
        KeyCode::Backspace => Some(CalcAction::DeleteChar),
        KeyCode::Enter => match ctx.mode {
            // Reactive outputs are always current; Enter has nothing to do.
            RecalcMode::Reactive => None,
            RecalcMode::Deferred => Some(CalcAction::Recalculate),
        },
        KeyCode::Char('+') => Some(CalcAction::StepUp),
        KeyCode::Char('-') => Some(CalcAction::StepDown),
        KeyCode::Char('r') => Some(CalcAction::Reset),
        KeyCode::Char('t') => Some(CalcAction::ToggleTheme),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => Some(CalcAction::InsertChar(c)),
        _ => None,
    }
}
