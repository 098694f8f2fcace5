//! Key event translation.
//!
//! Stateless mapping from a key press (plus the current state, which
//! decides routing) to an [`AppAction`]. No mutation happens here; the
//! reducers own all semantics.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{AppAction, AppState, Panel, View};
use crate::features::calculator::CalculatorAction;
use crate::features::fibonacci::FibonacciAction;
use crate::features::greeting::GreetingAction;
use crate::features::input::EditAction;
use crate::features::reverser::ReverserAction;
use crate::features::todos::{TodoFocus, TodosAction};

/// What the event loop should do with a key press.
#[derive(Debug, Clone)]
pub enum KeyCommand {
    /// Leave the application
    Quit,
    /// Send an action to the store
    Dispatch(AppAction),
}

/// Text-entry keys common to every widget input field.
enum Entry {
    Edit(EditAction),
    Submit,
}

/// Translate a key press into a command, given the current state.
///
/// Returns `None` for keys with no meaning in the current context.
#[must_use]
pub fn translate(state: &AppState, key: KeyEvent) -> Option<KeyCommand> {
    // Ctrl-C quits from anywhere, including text entry
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyCommand::Quit);
    }

    match state.view {
        View::Topics => translate_topics(key),
        View::Playground => translate_playground(state, key),
    }
}

fn translate_topics(key: KeyEvent) -> Option<KeyCommand> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyCommand::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(KeyCommand::Dispatch(AppAction::TopicUp)),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyCommand::Dispatch(AppAction::TopicDown)),
        KeyCode::Tab | KeyCode::Enter => Some(KeyCommand::Dispatch(AppAction::ShowPlayground)),
        _ => None,
    }
}

fn translate_playground(state: &AppState, key: KeyEvent) -> Option<KeyCommand> {
    match key.code {
        KeyCode::Esc => return Some(KeyCommand::Dispatch(AppAction::ShowTopics)),
        KeyCode::Tab => return Some(KeyCommand::Dispatch(AppAction::FocusNext)),
        KeyCode::BackTab => return Some(KeyCommand::Dispatch(AppAction::FocusPrev)),
        _ => {},
    }

    let action = match state.focus {
        Panel::Calculator => entry_for(key).map(|entry| {
            AppAction::Calculator(match entry {
                Entry::Edit(edit) => CalculatorAction::Edit(edit),
                Entry::Submit => CalculatorAction::Submit,
            })
        }),
        Panel::Reverser => entry_for(key).map(|entry| {
            AppAction::Reverser(match entry {
                Entry::Edit(edit) => ReverserAction::Edit(edit),
                Entry::Submit => ReverserAction::Submit,
            })
        }),
        Panel::Greeting => entry_for(key).map(|entry| {
            AppAction::Greeting(match entry {
                Entry::Edit(edit) => GreetingAction::Edit(edit),
                Entry::Submit => GreetingAction::Submit,
            })
        }),
        Panel::Fibonacci => entry_for(key).map(|entry| {
            AppAction::Fibonacci(match entry {
                Entry::Edit(edit) => FibonacciAction::Edit(edit),
                Entry::Submit => FibonacciAction::Submit,
            })
        }),
        Panel::Todos => todos_action(state, key).map(AppAction::Todos),
    };

    action.map(KeyCommand::Dispatch)
}

fn todos_action(state: &AppState, key: KeyEvent) -> Option<TodosAction> {
    // Selection movement works from both rows
    match key.code {
        KeyCode::Up => return Some(TodosAction::SelectUp),
        KeyCode::Down => return Some(TodosAction::SelectDown),
        _ => {},
    }

    match state.todos.focus {
        TodoFocus::Input => entry_for(key).map(|entry| match entry {
            Entry::Edit(edit) => TodosAction::Edit(edit),
            Entry::Submit => TodosAction::Submit,
        }),
        TodoFocus::List => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(TodosAction::ToggleSelected),
            KeyCode::Char('d') | KeyCode::Delete => Some(TodosAction::DeleteSelected),
            _ => None,
        },
    }
}

fn entry_for(key: KeyEvent) -> Option<Entry> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Char(ch) => Some(Entry::Edit(EditAction::Insert(ch))),
        KeyCode::Backspace => Some(Entry::Edit(EditAction::Backspace)),
        KeyCode::Left => Some(Entry::Edit(EditAction::Left)),
        KeyCode::Right => Some(Entry::Edit(EditAction::Right)),
        KeyCode::Home => Some(Entry::Edit(EditAction::Home)),
        KeyCode::End => Some(Entry::Edit(EditAction::End)),
        KeyCode::Enter => Some(Entry::Submit),
        _ => None,
    }
}
