use colored::Colorize;

use crate::features::session::{
    format_clock, format_duration, nominal_duration, Phase, SessionConfig, SessionState,
    Transition,
};
use crate::features::workout::{Exercise, WorkoutItem, WorkoutList};

fn prescription(exercise: &Exercise) -> String {
    let mut parts = Vec::new();
    if exercise.repetitions > 0 {
        parts.push(format!("{} reps", exercise.repetitions));
    }
    if exercise.sets > 0 {
        parts.push(format!("{} sets", exercise.sets));
    }
    if exercise.hold_time > 0 {
        parts.push(format!("hold {}", format_clock(exercise.hold_time)));
    }
    parts.join(", ")
}

fn item_line(index: usize, item: &WorkoutItem) -> String {
    let index = format!("{index:>3}").dimmed();
    match item {
        WorkoutItem::Exercise(exercise) => {
            let mut line = format!("{index}  {}", exercise.name.bold());
            let detail = prescription(exercise);
            if !detail.is_empty() {
                line.push_str(&format!("  {}", detail.dimmed()));
            }
            line
        }
        WorkoutItem::Rest(rest) => {
            format!("{index}  {} {}", "Rest".cyan(), format_clock(rest.rest_time).cyan())
        }
    }
}

/// Format the workout list as a numbered table
pub fn format_list_pretty(list: &WorkoutList, config: &SessionConfig) -> String {
    if list.is_empty() {
        return "Workout (0 items)\n  No items".to_string();
    }

    let mut output = format!(
        "Workout ({} items, about {})\n",
        list.len(),
        format_duration(nominal_duration(list, config))
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (index, item) in list.iter().enumerate() {
        output.push_str(&item_line(index, item));
        output.push('\n');
    }

    output
}

/// Format a single item with all of its fields
pub fn format_item_pretty(index: usize, item: &WorkoutItem) -> String {
    match item {
        WorkoutItem::Exercise(exercise) => {
            let mut output = format!("{}\n", exercise.name.bold());
            output.push_str(&format!("  {}: {index}\n", "Index".dimmed()));
            if !exercise.description.is_empty() {
                output.push_str(&format!("  {}: {}\n", "Description".dimmed(), exercise.description));
            }
            output.push_str(&format!("  {}: {}\n", "Repetitions".dimmed(), exercise.repetitions));
            output.push_str(&format!("  {}: {}\n", "Sets".dimmed(), exercise.sets));
            output.push_str(&format!(
                "  {}: {}\n",
                "Hold".dimmed(),
                format_clock(exercise.hold_time)
            ));
            if let Some(image) = &exercise.image {
                output.push_str(&format!("  {}: {image}\n", "Image".dimmed()));
            }
            output
        }
        WorkoutItem::Rest(rest) => {
            let mut output = format!("{}\n", "Rest".cyan().bold());
            output.push_str(&format!("  {}: {index}\n", "Index".dimmed()));
            output.push_str(&format!(
                "  {}: {}\n",
                "Duration".dimmed(),
                format_clock(rest.rest_time)
            ));
            output
        }
    }
}

/// Format one transition of a simulated session, stamped with elapsed time
pub fn format_transition_pretty(elapsed: u32, transition: &Transition, list: &WorkoutList) -> String {
    let stamp = format!("[{}]", format_clock(elapsed)).dimmed();
    let message = match transition {
        Transition::RoundAdvanced {
            exercise_index,
            round,
        } => format!(
            "{} round {}",
            item_name(list, *exercise_index),
            round + 1
        )
        .green(),
        Transition::RestStarted {
            exercise_index,
            round,
        } => format!(
            "rest after {} round {}",
            item_name(list, *exercise_index),
            round + 1
        )
        .cyan(),
        Transition::ExerciseAdvanced { exercise_index } => {
            format!("next: {}", item_name(list, *exercise_index)).yellow().bold()
        }
        Transition::SessionCompleted => "session complete".green().bold(),
    };
    format!("{stamp} {message}")
}

/// Format a session snapshot
pub fn format_state_pretty(state: &SessionState, list: &WorkoutList, rounds: u32) -> String {
    let phase = match state.phase {
        Phase::Working => state.phase.to_string().green(),
        Phase::Resting => state.phase.to_string().cyan(),
    };
    let running = if state.running { "running" } else { "stopped" };

    format!(
        "{}  {}  {}  {}  {}",
        item_name(list, state.exercise_index).bold(),
        state.round_label(rounds),
        phase,
        state.remaining_display(),
        running.dimmed()
    )
}

fn item_name(list: &WorkoutList, index: usize) -> String {
    list.get(index)
        .map_or_else(|| "-".to_string(), |item| item.display_name().to_string())
}
