//! Headless session runner.

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::TimerError;
use crate::features::session::{
    format_clock, SessionConfig, SessionEngine, SessionState, Transition,
};
use crate::features::workout::WorkoutList;
use crate::output::{format_state_pretty, format_transition_pretty, to_json};

/// Upper bound on simulated seconds when no tick count is given.
const MAX_SIMULATED_TICKS: u32 = 24 * 60 * 60;

#[derive(Debug, Serialize)]
struct TransitionEvent {
    elapsed_seconds: u32,
    transition: Transition,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    ticks: u32,
    completed: bool,
    events: Vec<TransitionEvent>,
    state: SessionState,
}

fn run(
    list: &WorkoutList,
    config: &SessionConfig,
    ticks: Option<u32>,
    from: Option<usize>,
) -> Result<SimulationReport, TimerError> {
    let mut engine = SessionEngine::new(list, config);
    if let Some(index) = from {
        engine.select_exercise(index, list, config)?;
    }
    engine.start(list, config)?;

    let limit = ticks.unwrap_or(MAX_SIMULATED_TICKS);
    let mut events = Vec::new();
    let mut elapsed = 0;
    let mut completed = false;

    while elapsed < limit {
        elapsed += 1;
        if let Some(transition) = engine.tick(list, config) {
            events.push(TransitionEvent {
                elapsed_seconds: elapsed,
                transition,
            });
            if transition == Transition::SessionCompleted {
                completed = true;
                break;
            }
        }
    }

    Ok(SimulationReport {
        ticks: elapsed,
        completed,
        events,
        state: engine.state(),
    })
}

/// Run a session against `list` and report every transition.
///
/// Without `ticks` the session runs until it completes.
///
/// # Errors
///
/// Returns `TimerError::EmptyWorkoutList` for an empty list, or
/// `TimerError::IndexOutOfRange` if `from` is not a valid index.
pub fn simulate(
    list: &WorkoutList,
    config: &SessionConfig,
    ticks: Option<u32>,
    from: Option<usize>,
    format: OutputFormat,
) -> Result<String, TimerError> {
    let report = run(list, config, ticks, from)?;

    if format == OutputFormat::Json {
        return to_json(&report);
    }

    let mut output = format!(
        "Simulating {} items: work {}, rest {}, {} rounds ({})\n",
        list.len(),
        format_clock(config.work_seconds()),
        format_clock(config.rest_seconds()),
        config.rounds_per_exercise(),
        config.rest_policy()
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for event in &report.events {
        output.push_str(&format_transition_pretty(
            event.elapsed_seconds,
            &event.transition,
            list,
        ));
        output.push('\n');
    }

    if report.completed {
        output.push_str(&format!(
            "{} after {}",
            "Finished".green().bold(),
            format_clock(report.ticks)
        ));
    } else {
        output.push_str(&format!(
            "{} after {}: {}",
            "Stopped".yellow(),
            format_clock(report.ticks),
            format_state_pretty(&report.state, list, config.rounds_per_exercise())
        ));
    }

    Ok(output)
}
