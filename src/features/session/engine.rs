//! The session state machine.
//!
//! [`SessionEngine`] owns the [`SessionState`] and nothing else. The workout
//! list and configuration stay with the host and are passed by reference to
//! every command, so edits and live configuration changes are picked up at
//! the next decision point without copying.
//!
//! Timing model: `tick` is called once per elapsed second while running. A
//! tick either decrements `remaining_seconds` or, once it has reached zero,
//! performs the phase-boundary transition. A phase of `n` seconds therefore
//! shows `n, n-1, .., 0` before the boundary tick moves on.

use chrono::Duration;
use log::{debug, warn};

use super::config::{RestPolicy, SessionConfig};
use super::state::{Phase, SessionState, Transition};
use crate::error::{Result, TimerError};
use crate::features::workout::{ListEdit, WorkoutItem, WorkoutList};

/// Drives a workout session over a [`WorkoutList`].
#[derive(Debug, Clone)]
pub struct SessionEngine {
    state: SessionState,
    /// Seconds consumed in the current phase; zero right after seeding.
    elapsed_in_phase: u32,
}

impl SessionEngine {
    /// Create an engine in the initial (reset) state.
    #[must_use]
    pub fn new(list: &WorkoutList, config: &SessionConfig) -> Self {
        let mut engine = Self {
            state: SessionState::initial(config.work_seconds()),
            elapsed_in_phase: 0,
        };
        engine.seed_phase(list, config);
        engine
    }

    /// Current snapshot.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the host should be ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    /// The item the session is positioned on, if the list has one there.
    #[must_use]
    pub fn current_item<'a>(&self, list: &'a WorkoutList) -> Option<&'a WorkoutItem> {
        list.get(self.state.exercise_index)
    }

    /// Number of rounds the current item runs for. Rest items have one.
    #[must_use]
    pub fn total_rounds(&self, list: &WorkoutList, config: &SessionConfig) -> u32 {
        match self.current_item(list) {
            Some(WorkoutItem::Rest(_)) => 1,
            _ => config.rounds_per_exercise(),
        }
    }

    /// Full length of the current phase in seconds.
    ///
    /// Rest items are timed by their own `rest_time` instead of the work
    /// duration.
    #[must_use]
    pub fn phase_seconds(&self, list: &WorkoutList, config: &SessionConfig) -> u32 {
        match self.state.phase {
            Phase::Resting => config.rest_seconds(),
            Phase::Working => match self.current_item(list) {
                Some(WorkoutItem::Rest(rest)) => rest.rest_time,
                _ => config.work_seconds(),
            },
        }
    }

    fn seed_phase(&mut self, list: &WorkoutList, config: &SessionConfig) {
        self.state.remaining_seconds = self.phase_seconds(list, config);
        self.elapsed_in_phase = 0;
    }

    fn enter(
        &mut self,
        exercise_index: usize,
        round: u32,
        phase: Phase,
        list: &WorkoutList,
        config: &SessionConfig,
    ) {
        self.state.exercise_index = exercise_index;
        self.state.round = round;
        self.state.phase = phase;
        self.seed_phase(list, config);
    }

    /// Start or resume ticking.
    ///
    /// A countdown sitting at zero is reseeded with the full phase length
    /// first. Calling `start` while running does nothing.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::EmptyWorkoutList` if the list has no items; the
    /// session stays stopped.
    pub fn start(&mut self, list: &WorkoutList, config: &SessionConfig) -> Result<()> {
        self.reconcile(list, config);
        if list.is_empty() {
            return Err(TimerError::EmptyWorkoutList);
        }
        if self.state.running {
            return Ok(());
        }
        if self.state.remaining_seconds == 0 {
            self.seed_phase(list, config);
        }
        self.state.running = true;
        debug!(
            "Session started at item {} round {} ({}, {}s left)",
            self.state.exercise_index, self.state.round, self.state.phase, self.state.remaining_seconds
        );
        Ok(())
    }

    /// Stop ticking without touching progress.
    pub fn pause(&mut self) {
        if self.state.running {
            debug!("Session paused with {}s left", self.state.remaining_seconds);
        }
        self.state.running = false;
    }

    /// Return to the initial state: stopped, first item, first round, working.
    pub fn reset(&mut self, list: &WorkoutList, config: &SessionConfig) {
        self.state = SessionState::initial(0);
        self.seed_phase(list, config);
    }

    /// Jump to the next item as if the current one had used up its rounds.
    ///
    /// Skipping the last item completes (and resets) the session. Returns
    /// `None` when the list is empty.
    pub fn skip(&mut self, list: &WorkoutList, config: &SessionConfig) -> Option<Transition> {
        self.reconcile(list, config);
        if list.is_empty() {
            return None;
        }
        let transition = self.complete_exercise(list, config);
        debug!("Skipped: {transition}");
        Some(transition)
    }

    /// Position the session at the start of item `index`.
    ///
    /// The running flag is left as it was; a running host should restart its
    /// tick cadence against the fresh countdown.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::IndexOutOfRange` if `index` is not in the list;
    /// the session is left unchanged.
    pub fn select_exercise(
        &mut self,
        index: usize,
        list: &WorkoutList,
        config: &SessionConfig,
    ) -> Result<()> {
        self.reconcile(list, config);
        if index >= list.len() {
            return Err(TimerError::out_of_range(index, list.len()));
        }
        self.enter(index, 0, Phase::Working, list, config);
        Ok(())
    }

    /// Advance the clock by one second.
    ///
    /// Does nothing while stopped. Returns the transition taken when a phase
    /// boundary was crossed.
    pub fn tick(&mut self, list: &WorkoutList, config: &SessionConfig) -> Option<Transition> {
        if !self.state.running {
            return None;
        }
        self.reconcile(list, config);
        if !self.state.running {
            return None;
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            self.elapsed_in_phase = self.elapsed_in_phase.saturating_add(1);
            return None;
        }

        let transition = self.phase_boundary(list, config);
        debug!("{transition}");
        Some(transition)
    }

    fn phase_boundary(&mut self, list: &WorkoutList, config: &SessionConfig) -> Transition {
        let exercise_index = self.state.exercise_index;
        let round = self.state.round;
        let on_rest_item = matches!(self.current_item(list), Some(WorkoutItem::Rest(_)));
        let more_rounds = round < config.last_round();

        match self.state.phase {
            Phase::Working if on_rest_item => self.complete_exercise(list, config),
            Phase::Working
                if more_rounds && config.rest_policy() == RestPolicy::BetweenExercises =>
            {
                self.advance_round(list, config)
            }
            Phase::Working => {
                self.state.phase = Phase::Resting;
                self.seed_phase(list, config);
                Transition::RestStarted {
                    exercise_index,
                    round,
                }
            }
            Phase::Resting if more_rounds && !on_rest_item => self.advance_round(list, config),
            Phase::Resting => self.complete_exercise(list, config),
        }
    }

    fn advance_round(&mut self, list: &WorkoutList, config: &SessionConfig) -> Transition {
        let exercise_index = self.state.exercise_index;
        let round = self.state.round + 1;
        self.enter(exercise_index, round, Phase::Working, list, config);
        Transition::RoundAdvanced {
            exercise_index,
            round,
        }
    }

    fn complete_exercise(&mut self, list: &WorkoutList, config: &SessionConfig) -> Transition {
        let next = self.state.exercise_index + 1;
        if next < list.len() {
            self.enter(next, 0, Phase::Working, list, config);
            Transition::ExerciseAdvanced {
                exercise_index: next,
            }
        } else {
            self.reset(list, config);
            Transition::SessionCompleted
        }
    }

    /// Follow a structural edit of the bound list.
    ///
    /// Keeps the session on the same item when earlier items are removed or
    /// the current item is moved, restarts the current item if it was removed
    /// or replaced, and resets on a wholesale reload.
    pub fn list_changed(&mut self, edit: ListEdit, list: &WorkoutList, config: &SessionConfig) {
        let current = self.state.exercise_index;

        match edit {
            ListEdit::Unchanged | ListEdit::Appended { .. } => {}
            ListEdit::Removed { index } if index < current => {
                self.state.exercise_index = current - 1;
            }
            ListEdit::Removed { index } | ListEdit::Replaced { index }
                if index == current && current < list.len() =>
            {
                self.enter(current, 0, Phase::Working, list, config);
            }
            ListEdit::Removed { .. } | ListEdit::Replaced { .. } => {}
            ListEdit::Swapped { from, to } => {
                if current == from {
                    self.state.exercise_index = to;
                } else if current == to {
                    self.state.exercise_index = from;
                }
            }
            ListEdit::Reloaded => self.reset(list, config),
        }

        self.reconcile(list, config);
    }

    /// Pick up a configuration change.
    ///
    /// If the session is stopped and nothing of the current phase has been
    /// used yet, the countdown is reseeded with the new phase length.
    pub fn config_changed(&mut self, list: &WorkoutList, config: &SessionConfig) {
        self.reconcile(list, config);
        if !self.state.running && self.elapsed_in_phase == 0 {
            self.seed_phase(list, config);
        }
    }

    /// Restore the state invariants against the current list and config.
    fn reconcile(&mut self, list: &WorkoutList, config: &SessionConfig) {
        if list.is_empty() {
            if self.state.running {
                warn!("Workout list is empty; stopping the session");
            }
            self.state.running = false;
            self.state.exercise_index = 0;
            self.state.round = 0;
            self.state.phase = Phase::Working;
            return;
        }

        if self.state.exercise_index >= list.len() {
            let clamped = list.len() - 1;
            warn!(
                "Session index {} is past the end of the list; clamping to {clamped}",
                self.state.exercise_index
            );
            self.enter(clamped, 0, Phase::Working, list, config);
        }

        if self.state.round > config.last_round() {
            self.state.round = config.last_round();
        }
    }
}

/// Nominal length of a full pass through `list`, ignoring boundary ticks.
#[must_use]
pub fn nominal_duration(list: &WorkoutList, config: &SessionConfig) -> Duration {
    let rounds = i64::from(config.rounds_per_exercise());
    let work = i64::from(config.work_seconds());
    let rest = i64::from(config.rest_seconds());

    let seconds: i64 = list
        .iter()
        .map(|item| match item {
            WorkoutItem::Rest(r) => i64::from(r.rest_time),
            WorkoutItem::Exercise(_) => match config.rest_policy() {
                RestPolicy::EveryRound => rounds * (work + rest),
                RestPolicy::BetweenExercises => rounds * work + rest,
            },
        })
        .sum();

    Duration::seconds(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(names: &[&str]) -> WorkoutList {
        WorkoutList::from_items(
            names
                .iter()
                .map(|name| WorkoutItem::exercise(*name, ""))
                .collect(),
        )
        .unwrap()
    }

    fn config(work: u32, rest: u32, rounds: u32) -> SessionConfig {
        SessionConfig::new(work, rest, rounds).unwrap()
    }

    fn run_ticks(
        engine: &mut SessionEngine,
        list: &WorkoutList,
        config: &SessionConfig,
        ticks: usize,
    ) -> Vec<Transition> {
        (0..ticks)
            .filter_map(|_| engine.tick(list, config))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let list = list_of(&["A"]);
        let cfg = SessionConfig::default();
        let engine = SessionEngine::new(&list, &cfg);

        assert_eq!(engine.state(), SessionState::initial(5));
    }

    #[test]
    fn test_start_empty_list_fails() {
        let list = WorkoutList::new();
        let cfg = SessionConfig::default();
        let mut engine = SessionEngine::new(&list, &cfg);

        assert!(matches!(
            engine.start(&list, &cfg),
            Err(TimerError::EmptyWorkoutList)
        ));
        assert!(!engine.is_running());
    }

    #[test]
    fn test_start_is_idempotent() {
        let list = list_of(&["A"]);
        let cfg = config(5, 5, 1);
        let mut engine = SessionEngine::new(&list, &cfg);

        engine.start(&list, &cfg).unwrap();
        engine.tick(&list, &cfg);
        engine.start(&list, &cfg).unwrap();

        assert!(engine.is_running());
        assert_eq!(engine.state().remaining_seconds, 4);
    }

    #[test]
    fn test_tick_while_paused_is_noop() {
        let list = list_of(&["A"]);
        let cfg = config(5, 5, 1);
        let mut engine = SessionEngine::new(&list, &cfg);

        assert_eq!(engine.tick(&list, &cfg), None);
        assert_eq!(engine.state(), SessionState::initial(5));
    }

    #[test]
    fn test_single_round_single_exercise_completes() {
        let list = list_of(&["A"]);
        let cfg = config(5, 5, 1);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();

        // Five seconds of countdown, then the boundary tick.
        assert!(run_ticks(&mut engine, &list, &cfg, 5).is_empty());
        assert_eq!(engine.state().remaining_seconds, 0);
        assert_eq!(engine.state().phase, Phase::Working);

        assert_eq!(
            engine.tick(&list, &cfg),
            Some(Transition::RestStarted {
                exercise_index: 0,
                round: 0
            })
        );
        assert_eq!(engine.state().phase, Phase::Resting);
        assert_eq!(engine.state().remaining_seconds, 5);

        assert!(run_ticks(&mut engine, &list, &cfg, 5).is_empty());
        assert_eq!(engine.tick(&list, &cfg), Some(Transition::SessionCompleted));
        assert_eq!(engine.state(), SessionState::initial(5));
    }

    #[test]
    fn test_rest_then_next_round_same_exercise() {
        let list = list_of(&["A"]);
        let cfg = config(5, 5, 2);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();

        let transitions = run_ticks(&mut engine, &list, &cfg, 12);

        assert_eq!(
            transitions,
            vec![
                Transition::RestStarted {
                    exercise_index: 0,
                    round: 0
                },
                Transition::RoundAdvanced {
                    exercise_index: 0,
                    round: 1
                },
            ]
        );
        let state = engine.state();
        assert_eq!(state.round, 1);
        assert_eq!(state.phase, Phase::Working);
        assert_eq!(state.remaining_seconds, 5);
        assert_eq!(state.exercise_index, 0);
        assert!(state.running);
    }

    #[test]
    fn test_exercise_advances_after_final_rest() {
        let list = list_of(&["A", "B"]);
        let cfg = config(2, 3, 1);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();

        // 3 ticks of work, 4 ticks of rest.
        let transitions = run_ticks(&mut engine, &list, &cfg, 7);

        assert_eq!(
            transitions.last(),
            Some(&Transition::ExerciseAdvanced { exercise_index: 1 })
        );
        assert_eq!(engine.state().exercise_index, 1);
        assert_eq!(engine.state().round, 0);
        assert_eq!(engine.state().remaining_seconds, 2);
    }

    #[test]
    fn test_between_exercises_policy() {
        let list = list_of(&["A", "B"]);
        let cfg = config(2, 4, 3).with_rest_policy(RestPolicy::BetweenExercises);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();

        let transitions = run_ticks(&mut engine, &list, &cfg, 14);

        assert_eq!(
            transitions,
            vec![
                Transition::RoundAdvanced {
                    exercise_index: 0,
                    round: 1
                },
                Transition::RoundAdvanced {
                    exercise_index: 0,
                    round: 2
                },
                Transition::RestStarted {
                    exercise_index: 0,
                    round: 2
                },
                Transition::ExerciseAdvanced { exercise_index: 1 },
            ]
        );
    }

    #[test]
    fn test_rest_item_uses_own_duration_without_rest_phase() {
        let list = WorkoutList::from_items(vec![
            WorkoutItem::rest(3),
            WorkoutItem::exercise("A", ""),
        ])
        .unwrap();
        let cfg = config(5, 5, 4);
        let mut engine = SessionEngine::new(&list, &cfg);
        assert_eq!(engine.state().remaining_seconds, 3);
        assert_eq!(engine.total_rounds(&list, &cfg), 1);

        engine.start(&list, &cfg).unwrap();
        let transitions = run_ticks(&mut engine, &list, &cfg, 4);

        assert_eq!(
            transitions,
            vec![Transition::ExerciseAdvanced { exercise_index: 1 }]
        );
        assert_eq!(engine.state().phase, Phase::Working);
        assert_eq!(engine.state().remaining_seconds, 5);
    }

    #[test]
    fn test_pause_keeps_progress() {
        let list = list_of(&["A"]);
        let cfg = config(5, 5, 2);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();
        run_ticks(&mut engine, &list, &cfg, 8);
        let before = engine.state();

        engine.pause();
        engine.pause();
        run_ticks(&mut engine, &list, &cfg, 3);

        let after = engine.state();
        assert!(!after.running);
        assert_eq!(after.remaining_seconds, before.remaining_seconds);
        assert_eq!(after.phase, before.phase);
        assert_eq!(after.round, before.round);
    }

    #[test]
    fn test_start_reseeds_exhausted_countdown() {
        let list = list_of(&["A"]);
        let cfg = config(5, 5, 1);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();
        run_ticks(&mut engine, &list, &cfg, 5);
        engine.pause();
        assert_eq!(engine.state().remaining_seconds, 0);

        engine.start(&list, &cfg).unwrap();
        assert_eq!(engine.state().remaining_seconds, 5);
        assert_eq!(engine.state().phase, Phase::Working);
    }

    #[test]
    fn test_reset() {
        let list = list_of(&["A", "B"]);
        let cfg = config(5, 5, 2);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();
        engine.skip(&list, &cfg);
        run_ticks(&mut engine, &list, &cfg, 7);

        engine.reset(&list, &cfg);
        assert_eq!(engine.state(), SessionState::initial(5));
    }

    #[test]
    fn test_skip_moves_to_next_exercise() {
        let list = list_of(&["A", "B", "C"]);
        let cfg = config(5, 5, 3);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();
        run_ticks(&mut engine, &list, &cfg, 8);

        assert_eq!(
            engine.skip(&list, &cfg),
            Some(Transition::ExerciseAdvanced { exercise_index: 1 })
        );
        let state = engine.state();
        assert_eq!(state.exercise_index, 1);
        assert_eq!(state.round, 0);
        assert_eq!(state.phase, Phase::Working);
        assert_eq!(state.remaining_seconds, 5);
        assert!(state.running);
    }

    #[test]
    fn test_skip_last_exercise_completes_session() {
        let list = list_of(&["A", "B"]);
        let cfg = config(5, 5, 3);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.select_exercise(1, &list, &cfg).unwrap();
        engine.start(&list, &cfg).unwrap();

        assert_eq!(engine.skip(&list, &cfg), Some(Transition::SessionCompleted));
        assert_eq!(engine.state(), SessionState::initial(5));
    }

    #[test]
    fn test_skip_empty_list() {
        let list = WorkoutList::new();
        let cfg = SessionConfig::default();
        let mut engine = SessionEngine::new(&list, &cfg);
        assert_eq!(engine.skip(&list, &cfg), None);
    }

    #[test]
    fn test_select_exercise_keeps_running_flag() {
        let list = list_of(&["A", "B", "C"]);
        let cfg = config(7, 5, 3);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();
        run_ticks(&mut engine, &list, &cfg, 10);

        engine.select_exercise(2, &list, &cfg).unwrap();

        let state = engine.state();
        assert_eq!(state.exercise_index, 2);
        assert_eq!(state.round, 0);
        assert_eq!(state.phase, Phase::Working);
        assert_eq!(state.remaining_seconds, 7);
        assert!(state.running);
    }

    #[test]
    fn test_select_exercise_out_of_range_leaves_state() {
        let list = list_of(&["A", "B"]);
        let cfg = config(5, 5, 3);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();
        run_ticks(&mut engine, &list, &cfg, 3);
        let before = engine.state();

        let err = engine.select_exercise(2, &list, &cfg).unwrap_err();

        assert!(matches!(err, TimerError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn test_removing_current_last_item_clamps_index() {
        let mut list = list_of(&["A", "B", "C"]);
        let cfg = config(5, 5, 3);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.select_exercise(2, &list, &cfg).unwrap();
        engine.start(&list, &cfg).unwrap();

        let edit = list.remove(2).unwrap();
        engine.list_changed(edit, &list, &cfg);

        assert!(engine.state().exercise_index < list.len());
        assert_eq!(engine.state().exercise_index, 1);
        assert!(engine.is_running());
    }

    #[test]
    fn test_shrunken_list_is_clamped_on_next_tick() {
        let mut list = list_of(&["A", "B", "C"]);
        let cfg = config(5, 5, 3);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.select_exercise(2, &list, &cfg).unwrap();
        engine.start(&list, &cfg).unwrap();

        // Host forgets to notify the engine.
        list.remove(2).unwrap();
        list.remove(1).unwrap();
        engine.tick(&list, &cfg);

        assert_eq!(engine.state().exercise_index, 0);
        assert!(engine.current_item(&list).is_some());
    }

    #[test]
    fn test_emptied_list_stops_session() {
        let mut list = list_of(&["A"]);
        let cfg = config(5, 5, 3);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();

        let edit = list.remove(0).unwrap();
        engine.list_changed(edit, &list, &cfg);

        assert!(!engine.is_running());
        assert_eq!(engine.tick(&list, &cfg), None);
    }

    #[test]
    fn test_removing_earlier_item_keeps_current_exercise() {
        let mut list = list_of(&["A", "B", "C"]);
        let cfg = config(5, 5, 3);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.select_exercise(2, &list, &cfg).unwrap();
        engine.start(&list, &cfg).unwrap();
        run_ticks(&mut engine, &list, &cfg, 2);

        let edit = list.remove(0).unwrap();
        engine.list_changed(edit, &list, &cfg);

        assert_eq!(engine.state().exercise_index, 1);
        assert_eq!(engine.current_item(&list).unwrap().display_name(), "C");
        assert_eq!(engine.state().remaining_seconds, 3);
    }

    #[test]
    fn test_swap_follows_current_item() {
        let mut list = list_of(&["A", "B", "C"]);
        let cfg = config(5, 5, 3);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.select_exercise(1, &list, &cfg).unwrap();

        let edit = list.move_up(1).unwrap();
        engine.list_changed(edit, &list, &cfg);
        assert_eq!(engine.state().exercise_index, 0);

        let edit = list.move_down(1).unwrap();
        engine.list_changed(edit, &list, &cfg);
        assert_eq!(engine.current_item(&list).unwrap().display_name(), "B");
    }

    #[test]
    fn test_replacing_current_item_restarts_it() {
        let mut list = list_of(&["A", "B"]);
        let cfg = config(5, 5, 3);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();
        run_ticks(&mut engine, &list, &cfg, 2);

        let edit = list.replace(0, WorkoutItem::rest(9)).unwrap();
        engine.list_changed(edit, &list, &cfg);

        assert_eq!(engine.state().remaining_seconds, 9);
        assert_eq!(engine.state().round, 0);
    }

    #[test]
    fn test_reload_resets_session() {
        let mut list = list_of(&["A", "B"]);
        let cfg = config(5, 5, 3);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.select_exercise(1, &list, &cfg).unwrap();
        engine.start(&list, &cfg).unwrap();

        let edit = list.to_default();
        engine.list_changed(edit, &list, &cfg);

        assert_eq!(engine.state(), SessionState::initial(5));
    }

    #[test]
    fn test_shrinking_rounds_clamps_round() {
        let list = list_of(&["A", "B"]);
        let mut cfg = config(1, 1, 5);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();
        // Two full work+rest cycles of 2 ticks each.
        run_ticks(&mut engine, &list, &cfg, 8);
        assert_eq!(engine.state().round, 2);

        engine.pause();
        cfg.set_rounds_per_exercise(2).unwrap();
        engine.config_changed(&list, &cfg);
        assert_eq!(engine.state().round, 1);
    }

    #[test]
    fn test_config_change_reseeds_untouched_phase() {
        let list = list_of(&["A"]);
        let mut cfg = config(5, 5, 3);
        let mut engine = SessionEngine::new(&list, &cfg);

        cfg.set_work_seconds(10).unwrap();
        engine.config_changed(&list, &cfg);
        assert_eq!(engine.state().remaining_seconds, 10);

        engine.start(&list, &cfg).unwrap();
        run_ticks(&mut engine, &list, &cfg, 3);
        engine.pause();

        cfg.set_work_seconds(20).unwrap();
        engine.config_changed(&list, &cfg);
        assert_eq!(engine.state().remaining_seconds, 7);
    }

    #[test]
    fn test_live_config_applies_at_next_transition() {
        let list = list_of(&["A"]);
        let mut cfg = config(2, 2, 2);
        let mut engine = SessionEngine::new(&list, &cfg);
        engine.start(&list, &cfg).unwrap();
        run_ticks(&mut engine, &list, &cfg, 2);

        cfg.set_rest_seconds(9).unwrap();
        assert!(engine.tick(&list, &cfg).is_some());
        assert_eq!(engine.state().phase, Phase::Resting);
        assert_eq!(engine.state().remaining_seconds, 9);
    }

    #[test]
    fn test_nominal_duration() {
        let list = WorkoutList::from_items(vec![
            WorkoutItem::exercise("A", ""),
            WorkoutItem::rest(30),
        ])
        .unwrap();
        let cfg = config(20, 10, 3);
        assert_eq!(nominal_duration(&list, &cfg).num_seconds(), 3 * 30 + 30);

        let cfg = cfg.with_rest_policy(RestPolicy::BetweenExercises);
        assert_eq!(nominal_duration(&list, &cfg).num_seconds(), 3 * 20 + 10 + 30);
    }
}
