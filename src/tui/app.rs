//! Application state for the TUI.

use crate::error::TimerError;
use crate::features::session::{SessionConfig, SessionEngine, SessionState, Transition};
use crate::features::workout::{ListEdit, WorkoutItem, WorkoutLibrary, WorkoutList, WorkoutStore};
use crate::tui::event::Action;

/// Application state.
pub struct App<S> {
    /// Persisted workout list.
    library: WorkoutLibrary<S>,
    /// Live session configuration.
    config: SessionConfig,
    /// Session bound to the list.
    engine: SessionEngine,
    /// Cursor position in the list.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: WorkoutStore> App<S> {
    /// Create a new app with a fresh session over the library's list.
    pub fn new(library: WorkoutLibrary<S>, config: SessionConfig) -> Self {
        let engine = SessionEngine::new(library.list(), &config);
        Self {
            library,
            config,
            engine,
            selected: 0,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    pub const fn list(&self) -> &WorkoutList {
        self.library.list()
    }

    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub const fn engine(&self) -> &SessionEngine {
        &self.engine
    }

    pub const fn state(&self) -> SessionState {
        self.engine.state()
    }

    pub const fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Item under the cursor.
    pub fn selected_item(&self) -> Option<&WorkoutItem> {
        self.list().get(self.selected)
    }

    /// Apply a key action.
    ///
    /// # Errors
    ///
    /// Returns the error of a rejected command or a failed save. The app
    /// state is unchanged in that case.
    pub fn handle(&mut self, action: Action) -> Result<(), TimerError> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleRunning => self.toggle_running()?,
            Action::Reset => {
                self.engine.reset(self.library.list(), &self.config);
                self.status = Some("Session reset".to_string());
            }
            Action::Skip => self.skip(),
            Action::SelectNext => self.select_next(),
            Action::SelectPrevious => self.select_previous(),
            Action::JumpToSelected => self.jump_to_selected()?,
            Action::MoveUp => self.move_selected(true)?,
            Action::MoveDown => self.move_selected(false)?,
            Action::Delete => self.delete_selected()?,
            Action::MoreRounds => self.change_rounds(1)?,
            Action::FewerRounds => self.change_rounds(-1)?,
            Action::Help => {
                self.status = Some(
                    "space:start/pause | r:reset | n:skip | j/k:nav | Enter:jump | J/K:move | d:delete | +/-:rounds | q:quit"
                        .to_string(),
                );
            }
        }
        Ok(())
    }

    fn toggle_running(&mut self) -> Result<(), TimerError> {
        if self.engine.is_running() {
            self.engine.pause();
            self.status = Some("Paused".to_string());
        } else {
            self.engine.start(self.library.list(), &self.config)?;
            self.status = None;
        }
        Ok(())
    }

    fn skip(&mut self) {
        if let Some(transition) = self.engine.skip(self.library.list(), &self.config) {
            self.announce(transition);
        }
    }

    /// Advance the session by one second.
    pub fn tick(&mut self) -> Option<Transition> {
        let transition = self.engine.tick(self.library.list(), &self.config)?;
        self.announce(transition);
        Some(transition)
    }

    fn announce(&mut self, transition: Transition) {
        let message = match transition {
            Transition::ExerciseAdvanced { exercise_index } => self
                .list()
                .get(exercise_index)
                .map_or_else(|| transition.to_string(), |item| format!("Next: {item}")),
            _ => transition.to_string(),
        };
        self.status = Some(message);
    }

    /// Move the cursor down.
    pub fn select_next(&mut self) {
        if !self.list().is_empty() && self.selected < self.list().len() - 1 {
            self.selected += 1;
        }
    }

    /// Move the cursor up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn jump_to_selected(&mut self) -> Result<(), TimerError> {
        self.engine
            .select_exercise(self.selected, self.library.list(), &self.config)?;
        if let Some(item) = self.selected_item() {
            self.status = Some(format!("Jumped to {item}"));
        }
        Ok(())
    }

    fn apply(&mut self, edit: ListEdit) {
        self.engine.list_changed(edit, self.library.list(), &self.config);
        let len = self.library.list().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn move_selected(&mut self, up: bool) -> Result<(), TimerError> {
        let edit = if up {
            self.library.move_up(self.selected)?
        } else {
            self.library.move_down(self.selected)?
        };
        if let ListEdit::Swapped { to, .. } = edit {
            self.selected = to;
        }
        self.apply(edit);
        Ok(())
    }

    fn delete_selected(&mut self) -> Result<(), TimerError> {
        let index = self.selected;
        let edit = self.library.remove(index)?;
        self.apply(edit);
        self.status = Some(format!("Removed item {index}"));
        Ok(())
    }

    fn change_rounds(&mut self, delta: i32) -> Result<(), TimerError> {
        let rounds = self.config.rounds_per_exercise().saturating_add_signed(delta);
        self.config.set_rounds_per_exercise(rounds)?;
        self.engine.config_changed(self.library.list(), &self.config);
        self.status = Some(format!("Rounds per exercise: {rounds}"));
        Ok(())
    }
}
