//! Greeting generator widget.
//!
//! The only feature with an ambient dependency: the time-of-day phrase
//! comes from the environment clock.

use std::marker::PhantomData;

use syntax_tour_core::environment::Clock;
use syntax_tour_core::{Effect, Reducer, SmallVec, smallvec};

use crate::environment::TourEnvironment;
use crate::features::input::{EditAction, InputBuffer};
use crate::features::outcome::Outcome;
use crate::functions;

/// Fallback when the user submits without entering a name.
const DEFAULT_NAME: &str = "Friend";

/// Greeting state
#[derive(Debug, Clone, Default)]
pub struct GreetingState {
    /// Name entry field
    pub input: InputBuffer,
    /// Last generated greeting
    pub outcome: Outcome,
}

/// Greeting actions
#[derive(Debug, Clone)]
pub enum GreetingAction {
    /// Edit the name entry field
    Edit(EditAction),
    /// Generate a greeting for the entered name
    Submit,
}

/// Greeting reducer
#[derive(Debug, Clone, Copy)]
pub struct GreetingReducer<C> {
    _phantom: PhantomData<C>,
}

impl<C> GreetingReducer<C> {
    /// Create a new greeting reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C> Default for GreetingReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Reducer for GreetingReducer<C> {
    type State = GreetingState;
    type Action = GreetingAction;
    type Environment = TourEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            GreetingAction::Edit(edit) => state.input.apply(edit),
            GreetingAction::Submit => {
                // A blank name falls back to a friendly default; this
                // widget never produces an error.
                let trimmed = state.input.value().trim();
                let name = if trimmed.is_empty() {
                    DEFAULT_NAME
                } else {
                    trimmed
                };
                state.outcome = Outcome::Success(functions::greet(name, &env.clock));
            },
        }

        smallvec![Effect::None]
    }
}
