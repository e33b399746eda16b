//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::features::session::{format_clock, Phase};
use crate::features::workout::{WorkoutItem, WorkoutStore};
use crate::tui::app::App;

const HELP: &str = "space:start/pause | n:skip | r:reset | Enter:jump | ?:help | q:quit";

/// Render the application UI.
pub fn render<S: WorkoutStore>(frame: &mut Frame<'_>, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, body[0]);
    render_list(frame, app, body[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Working => Color::Green,
        Phase::Resting => Color::Cyan,
    }
}

fn render_header<S: WorkoutStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let config = app.config();
    let title = format!(
        " roundtimer | {} items | work {} | rest {} | {} rounds ",
        app.list().len(),
        format_clock(config.work_seconds()),
        format_clock(config.rest_seconds()),
        config.rounds_per_exercise()
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

fn render_timer<S: WorkoutStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let state = app.state();
    let engine = app.engine();
    let color = phase_color(state.phase);

    let title = engine
        .current_item(app.list())
        .map_or_else(|| " No exercises ".to_string(), |item| format!(" {} ", item.display_name()));
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Description
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Round and phase
            Constraint::Length(1), // Progress
        ])
        .split(inner);

    let details = match engine.current_item(app.list()) {
        Some(WorkoutItem::Exercise(exercise)) => {
            let mut lines = vec![Line::from(exercise.description.clone())];
            if exercise.repetitions > 0 || exercise.sets > 0 {
                lines.push(Line::from(Span::styled(
                    format!(
                        "{} reps x {} sets, hold {}",
                        exercise.repetitions,
                        exercise.sets,
                        format_clock(exercise.hold_time)
                    ),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
        Some(WorkoutItem::Rest(_)) => vec![Line::from("Catch your breath.")],
        None => vec![Line::from("Add an exercise to start a session.")],
    };
    frame.render_widget(Paragraph::new(details).wrap(Wrap { trim: true }), rows[0]);

    let clock = Paragraph::new(Line::from(Span::styled(
        state.remaining_display(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(clock, rows[1]);

    let running = if state.running { "" } else { "  (paused)" };
    let progress = Paragraph::new(Line::from(vec![
        Span::raw(state.round_label(engine.total_rounds(app.list(), app.config()))),
        Span::raw("  "),
        Span::styled(state.phase.to_string(), Style::default().fg(color)),
        Span::styled(running, Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(progress, rows[2]);

    let total = engine.phase_seconds(app.list(), app.config());
    let ratio = if total == 0 {
        1.0
    } else {
        f64::from(total - state.remaining_seconds.min(total)) / f64::from(total)
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label("");
    frame.render_widget(gauge, rows[3]);
}

fn render_list<S: WorkoutStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let current = app.state().exercise_index;

    let items: Vec<ListItem<'_>> = app
        .list()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = if i == current { "> " } else { "  " };
            let style = match item {
                WorkoutItem::Rest(_) => Style::default().fg(Color::Cyan),
                WorkoutItem::Exercise(_) if i == current => {
                    Style::default().add_modifier(Modifier::BOLD)
                }
                WorkoutItem::Exercise(_) => Style::default(),
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(item.to_string(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Workout ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if !app.list().is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar<S: WorkoutStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
