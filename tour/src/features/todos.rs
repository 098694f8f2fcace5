//! Todo list widget.
//!
//! Wraps the [`TodoList`] domain model with an entry field, a selection
//! cursor, and a focus flag. All list mutations go through item ids, so
//! a stale selection degrades to the model's silent no-op semantics.

use std::marker::PhantomData;

use syntax_tour_core::environment::Clock;
use syntax_tour_core::{Effect, Reducer, SmallVec, smallvec};

use crate::environment::TourEnvironment;
use crate::features::input::{EditAction, InputBuffer};
use crate::features::outcome::Outcome;
use crate::todo::TodoList;

/// Which row of the todo widget has input focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFocus {
    /// The text entry row
    #[default]
    Input,
    /// The item list
    List,
}

/// Todo widget state
#[derive(Debug, Clone, Default)]
pub struct TodosState {
    /// The authoritative item list
    pub list: TodoList,
    /// Text entry field
    pub input: InputBuffer,
    /// Validation message for the entry row
    pub outcome: Outcome,
    /// Whether the entry row or the list is focused
    pub focus: TodoFocus,
    /// Index of the selected list row; meaningful when `focus` is `List`
    pub selected: usize,
}

/// Todo widget actions
#[derive(Debug, Clone)]
pub enum TodosAction {
    /// Edit the text entry field
    Edit(EditAction),
    /// Add the entered text as a new item
    Submit,
    /// Move the selection up, or back to the entry row from the top
    SelectUp,
    /// Move the selection down, or into the list from the entry row
    SelectDown,
    /// Flip the completion flag of the selected item
    ToggleSelected,
    /// Delete the selected item
    DeleteSelected,
}

/// Todo widget reducer
#[derive(Debug, Clone, Copy)]
pub struct TodosReducer<C> {
    _phantom: PhantomData<C>,
}

impl<C> TodosReducer<C> {
    /// Create a new todos reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C> Default for TodosReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Reducer for TodosReducer<C> {
    type State = TodosState;
    type Action = TodosAction;
    type Environment = TourEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodosAction::Edit(edit) => state.input.apply(edit),
            TodosAction::Submit => submit(state),
            TodosAction::SelectUp => select_up(state),
            TodosAction::SelectDown => select_down(state),
            TodosAction::ToggleSelected => {
                if state.focus == TodoFocus::List {
                    if let Some(item) = state.list.items().get(state.selected) {
                        let id = item.id;
                        state.list.toggle(id);
                    }
                }
            },
            TodosAction::DeleteSelected => delete_selected(state),
        }

        smallvec![Effect::None]
    }
}

fn submit(state: &mut TodosState) {
    if state.input.is_blank() {
        state.outcome = Outcome::Error("Please enter a todo item".to_string());
        return;
    }

    let text = state.input.take();
    state.list.add(text.trim());
    state.outcome = Outcome::Idle;
}

fn select_up(state: &mut TodosState) {
    if state.focus != TodoFocus::List {
        return;
    }
    if state.selected == 0 {
        state.focus = TodoFocus::Input;
    } else {
        state.selected -= 1;
    }
}

fn select_down(state: &mut TodosState) {
    match state.focus {
        TodoFocus::Input if !state.list.is_empty() => {
            state.focus = TodoFocus::List;
            state.selected = 0;
        },
        TodoFocus::List => {
            if state.selected + 1 < state.list.len() {
                state.selected += 1;
            }
        },
        TodoFocus::Input => {},
    }
}

fn delete_selected(state: &mut TodosState) {
    if state.focus != TodoFocus::List {
        return;
    }

    if let Some(item) = state.list.items().get(state.selected) {
        let id = item.id;
        state.list.remove(id);
    }

    // Keep the selection on a valid row, or return to the entry field
    if state.list.is_empty() {
        state.focus = TodoFocus::Input;
        state.selected = 0;
    } else if state.selected >= state.list.len() {
        state.selected = state.list.len() - 1;
    }
}
