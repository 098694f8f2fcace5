//! String reverser widget.

use std::marker::PhantomData;

use syntax_tour_core::environment::Clock;
use syntax_tour_core::{Effect, Reducer, SmallVec, smallvec};

use crate::environment::TourEnvironment;
use crate::features::input::{EditAction, InputBuffer};
use crate::features::outcome::Outcome;
use crate::functions;

/// Reverser state
#[derive(Debug, Clone, Default)]
pub struct ReverserState {
    /// Text entry field
    pub input: InputBuffer,
    /// Last reversal or validation message
    pub outcome: Outcome,
}

/// Reverser actions
#[derive(Debug, Clone)]
pub enum ReverserAction {
    /// Edit the text entry field
    Edit(EditAction),
    /// Reverse the entered text
    Submit,
}

/// Reverser reducer
#[derive(Debug, Clone, Copy)]
pub struct ReverserReducer<C> {
    _phantom: PhantomData<C>,
}

impl<C> ReverserReducer<C> {
    /// Create a new reverser reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C> Default for ReverserReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Reducer for ReverserReducer<C> {
    type State = ReverserState;
    type Action = ReverserAction;
    type Environment = TourEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ReverserAction::Edit(edit) => state.input.apply(edit),
            ReverserAction::Submit => {
                state.outcome = if state.input.is_blank() {
                    Outcome::Error("Please enter some text".to_string())
                } else {
                    let text = state.input.value();
                    Outcome::Success(format!("\"{text}\" → \"{}\"", functions::reverse(text)))
                };
            },
        }

        smallvec![Effect::None]
    }
}
