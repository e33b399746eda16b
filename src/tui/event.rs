//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::TimerError;

/// Action requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the session.
    ToggleRunning,
    /// Reset the session.
    Reset,
    /// Skip to the next item.
    Skip,
    /// Move the cursor down.
    SelectNext,
    /// Move the cursor up.
    SelectPrevious,
    /// Start the item under the cursor.
    JumpToSelected,
    /// Move the item under the cursor up.
    MoveUp,
    /// Move the item under the cursor down.
    MoveDown,
    /// Delete the item under the cursor.
    Delete,
    /// One more round per exercise.
    MoreRounds,
    /// One fewer round per exercise.
    FewerRounds,
    /// Show key help.
    Help,
}

impl Action {
    /// Whether the host timer should restart its cadence after this action.
    pub const fn restarts_cadence(self) -> bool {
        matches!(
            self,
            Self::ToggleRunning | Self::Reset | Self::Skip | Self::JumpToSelected
        )
    }
}

/// Map a key press to an action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') => Action::ToggleRunning,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('n') => Action::Skip,
        KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
        KeyCode::Char('k') | KeyCode::Up => Action::SelectPrevious,
        KeyCode::Enter => Action::JumpToSelected,
        KeyCode::Char('K') => Action::MoveUp,
        KeyCode::Char('J') => Action::MoveDown,
        KeyCode::Char('d') | KeyCode::Delete => Action::Delete,
        KeyCode::Char('+' | '=') => Action::MoreRounds,
        KeyCode::Char('-') => Action::FewerRounds,
        KeyCode::Char('?') => Action::Help,
        _ => return None,
    };

    Some(action)
}

/// Wait up to `timeout` for a key press.
///
/// Returns `None` if the timeout expired or the event was not a mapped key.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn next_action(timeout: Duration) -> Result<Option<Action>, TimerError> {
    if !event::poll(timeout).map_err(|e| TimerError::Config(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    match event::read().map_err(|e| TimerError::Config(format!("Event read failed: {e}")))? {
        Event::Key(key) => Ok(action_for_key(key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for_key(press(KeyCode::Char(' '))), Some(Action::ToggleRunning));
        assert_eq!(action_for_key(press(KeyCode::Char('n'))), Some(Action::Skip));
        assert_eq!(action_for_key(press(KeyCode::Char('J'))), Some(Action::MoveDown));
        assert_eq!(action_for_key(press(KeyCode::Char('k'))), Some(Action::SelectPrevious));
        assert_eq!(action_for_key(press(KeyCode::Enter)), Some(Action::JumpToSelected));
        assert_eq!(action_for_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for_key(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(key), Some(Action::Quit));
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for_key(key), None);
    }

    #[test]
    fn test_restarts_cadence() {
        assert!(Action::ToggleRunning.restarts_cadence());
        assert!(Action::JumpToSelected.restarts_cadence());
        assert!(!Action::SelectNext.restarts_cadence());
    }
}
