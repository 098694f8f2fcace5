//! Stateless render helpers: state in, display blocks out.
//!
//! Every helper produces one display block per input record, in input
//! order, without filtering. The whole frame is redrawn from a state
//! snapshot after each event; nothing is patched incrementally.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use crate::app::{AppState, Panel, View};
use crate::features::input::InputBuffer;
use crate::features::outcome::Outcome;
use crate::features::todos::{TodoFocus, TodosState};
use crate::todo::TodoItem;
use crate::topics::Topic;

/// Neutral result and highlight color.
const ACCENT: Color = Color::Blue;
/// Validation message color.
const ERROR: Color = Color::Red;

/// Draw one full frame from a state snapshot.
pub fn draw(frame: &mut Frame<'_>, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], state);
    match state.view {
        View::Topics => draw_topics(frame, chunks[1], state),
        View::Playground => draw_playground(frame, chunks[1], state),
    }
    draw_footer(frame, chunks[2], state);
}

fn draw_header(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(Span::styled(
            "Rust Syntax Tour",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(state.welcome.as_str()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_topics(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let items: Vec<ListItem<'_>> = state
        .topics
        .iter()
        .enumerate()
        .map(|(index, topic)| topic_list_item(topic, index == state.selected_topic))
        .collect();
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("Topics")),
        chunks[0],
    );

    if let Some(topic) = state.topics.get(state.selected_topic) {
        frame.render_widget(
            Paragraph::new(topic_card(topic))
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(topic.title)),
            chunks[1],
        );
    }
}

/// One list row per topic.
fn topic_list_item(topic: &Topic, selected: bool) -> ListItem<'static> {
    let style = if selected {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    ListItem::new(Span::styled(topic.title, style))
}

/// The lines of a topic card: description, blank spacer, example listing.
#[must_use]
pub fn topic_card(topic: &Topic) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(topic.description), Line::from("")];
    lines.extend(
        topic
            .example
            .lines()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(ACCENT)))),
    );
    lines
}

fn draw_playground(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(8),
        ])
        .split(area);

    draw_entry_widget(
        frame,
        chunks[0],
        Panel::Calculator,
        &state.calculator.input,
        &state.calculator.outcome,
        state.focus,
    );
    draw_entry_widget(
        frame,
        chunks[1],
        Panel::Reverser,
        &state.reverser.input,
        &state.reverser.outcome,
        state.focus,
    );
    draw_entry_widget(
        frame,
        chunks[2],
        Panel::Greeting,
        &state.greeting.input,
        &state.greeting.outcome,
        state.focus,
    );
    draw_entry_widget(
        frame,
        chunks[3],
        Panel::Fibonacci,
        &state.fibonacci.input,
        &state.fibonacci.outcome,
        state.focus,
    );
    draw_todos(frame, chunks[4], &state.todos, state.focus == Panel::Todos);
}

fn draw_entry_widget(
    frame: &mut Frame<'_>,
    area: Rect,
    panel: Panel,
    input: &InputBuffer,
    outcome: &Outcome,
    focus: Panel,
) {
    let focused = focus == panel;
    let lines = vec![input_line(input, focused), outcome_line(outcome)];
    frame.render_widget(
        Paragraph::new(lines).block(widget_block(panel.title(), focused)),
        area,
    );
}

fn widget_block(title: &'static str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

/// The input row: `> value`, with a caret at the cursor when focused.
#[must_use]
pub fn input_line(input: &InputBuffer, focused: bool) -> Line<'static> {
    let text = if focused {
        input.with_caret()
    } else {
        input.value().to_string()
    };
    Line::from(vec![Span::raw("> "), Span::raw(text)])
}

/// The outcome row: placeholder, success (neutral) or error (distinct).
#[must_use]
pub fn outcome_line(outcome: &Outcome) -> Line<'static> {
    match outcome {
        Outcome::Idle => Line::from(Span::styled(
            "Result will appear here",
            Style::default().add_modifier(Modifier::DIM),
        )),
        Outcome::Success(text) => {
            Line::from(Span::styled(text.clone(), Style::default().fg(ACCENT)))
        },
        Outcome::Error(text) => Line::from(Span::styled(text.clone(), Style::default().fg(ERROR))),
    }
}

fn draw_todos(frame: &mut Frame<'_>, area: Rect, todos: &TodosState, focused: bool) {
    let block = widget_block(Panel::Todos.title(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let input_focused = focused && todos.focus == TodoFocus::Input;
    frame.render_widget(
        Paragraph::new(input_line(&todos.input, input_focused)),
        rows[0],
    );

    // Only validation messages are shown here; a successful add speaks
    // for itself in the list below
    if todos.outcome.is_error() {
        frame.render_widget(Paragraph::new(outcome_line(&todos.outcome)), rows[1]);
    }

    if todos.list.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No todos yet. Add one above!",
                Style::default().add_modifier(Modifier::DIM),
            )),
            rows[2],
        );
    } else {
        let list_focused = focused && todos.focus == TodoFocus::List;
        let items: Vec<ListItem<'_>> = todos
            .list
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                ListItem::new(todo_line(item, list_focused && index == todos.selected))
            })
            .collect();
        frame.render_widget(List::new(items), rows[2]);
    }
}

/// One row per todo: checkbox mark, text struck through when completed.
#[must_use]
pub fn todo_line(item: &TodoItem, selected: bool) -> Line<'static> {
    let mark = if item.completed { "[x] " } else { "[ ] " };
    let mut style = if item.completed {
        Style::default()
            .add_modifier(Modifier::CROSSED_OUT)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Line::from(vec![Span::raw(mark), Span::styled(item.text.clone(), style)])
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let hints = match state.view {
        View::Topics => "↑/↓ select topic · Tab/Enter playground · q quit",
        View::Playground => {
            if state.focus == Panel::Todos && state.todos.focus == TodoFocus::List {
                "↑/↓ select · Space toggle · d delete · Tab next widget · Esc topics"
            } else {
                "type to edit · Enter submit · Tab next widget · Esc topics"
            }
        },
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            hints,
            Style::default().add_modifier(Modifier::DIM),
        )),
        area,
    );
}
