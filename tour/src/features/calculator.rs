//! Square calculator widget.

use std::marker::PhantomData;

use syntax_tour_core::environment::Clock;
use syntax_tour_core::{Effect, Reducer, SmallVec, smallvec};

use crate::environment::TourEnvironment;
use crate::features::input::{EditAction, InputBuffer};
use crate::features::outcome::Outcome;
use crate::functions;

/// Calculator state
#[derive(Debug, Clone, Default)]
pub struct CalculatorState {
    /// Number entry field
    pub input: InputBuffer,
    /// Last computed square or validation message
    pub outcome: Outcome,
}

/// Calculator actions
#[derive(Debug, Clone)]
pub enum CalculatorAction {
    /// Edit the number entry field
    Edit(EditAction),
    /// Compute the square of the entered number
    Submit,
}

/// Calculator reducer
///
/// A pure state machine: parse, compute, store the outcome. Generic
/// over the clock type so it shares the application environment.
#[derive(Debug, Clone, Copy)]
pub struct CalculatorReducer<C> {
    _phantom: PhantomData<C>,
}

impl<C> CalculatorReducer<C> {
    /// Create a new calculator reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C> Default for CalculatorReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Reducer for CalculatorReducer<C> {
    type State = CalculatorState;
    type Action = CalculatorAction;
    type Environment = TourEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CalculatorAction::Edit(edit) => state.input.apply(edit),
            CalculatorAction::Submit => {
                state.outcome = match state.input.value().trim().parse::<f64>() {
                    Ok(n) => Outcome::Success(format!("{n}² = {}", functions::square(n))),
                    Err(_) => Outcome::Error("Please enter a valid number".to_string()),
                };
            },
        }

        smallvec![Effect::None]
    }
}
