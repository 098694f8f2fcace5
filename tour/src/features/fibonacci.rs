//! Fibonacci sequence widget.

use std::marker::PhantomData;

use syntax_tour_core::environment::Clock;
use syntax_tour_core::{Effect, Reducer, SmallVec, smallvec};

use crate::environment::TourEnvironment;
use crate::features::input::{EditAction, InputBuffer};
use crate::features::outcome::Outcome;
use crate::functions;

/// Largest sequence length the widget accepts. The bound lives here,
/// not in [`functions::fibonacci`] itself.
const MAX_COUNT: usize = 20;

/// Fibonacci state
#[derive(Debug, Clone, Default)]
pub struct FibonacciState {
    /// Count entry field
    pub input: InputBuffer,
    /// Last generated sequence or validation message
    pub outcome: Outcome,
}

/// Fibonacci actions
#[derive(Debug, Clone)]
pub enum FibonacciAction {
    /// Edit the count entry field
    Edit(EditAction),
    /// Generate the sequence for the entered count
    Submit,
}

/// Fibonacci reducer
#[derive(Debug, Clone, Copy)]
pub struct FibonacciReducer<C> {
    _phantom: PhantomData<C>,
}

impl<C> FibonacciReducer<C> {
    /// Create a new fibonacci reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C> Default for FibonacciReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Reducer for FibonacciReducer<C> {
    type State = FibonacciState;
    type Action = FibonacciAction;
    type Environment = TourEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FibonacciAction::Edit(edit) => state.input.apply(edit),
            FibonacciAction::Submit => {
                state.outcome = match state.input.value().trim().parse::<usize>() {
                    Ok(n) if (1..=MAX_COUNT).contains(&n) => {
                        let listing = functions::fibonacci(n)
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(", ");
                        Outcome::Success(format!("Fibonacci({n}): [{listing}]"))
                    },
                    _ => Outcome::Error(format!(
                        "Please enter a number between 1 and {MAX_COUNT}"
                    )),
                };
            },
        }

        smallvec![Effect::None]
    }
}
