//! Application-level state, actions, and reducer composition.
//!
//! The application reducer is assembled from the feature reducers: one
//! [`scope_reducer`] per widget routes the matching `AppAction` variant
//! to its feature, and a navigation reducer handles screen and focus
//! changes. [`combine_reducers`] runs them all in sequence.

use std::marker::PhantomData;

use syntax_tour_core::composition::{
    BoxedReducer, CombinedReducer, combine_reducers, scope_reducer,
};
use syntax_tour_core::environment::Clock;
use syntax_tour_core::{Effect, Reducer, SmallVec, smallvec};

use crate::environment::TourEnvironment;
use crate::features::calculator::{CalculatorAction, CalculatorReducer, CalculatorState};
use crate::features::fibonacci::{FibonacciAction, FibonacciReducer, FibonacciState};
use crate::features::greeting::{GreetingAction, GreetingReducer, GreetingState};
use crate::features::reverser::{ReverserAction, ReverserReducer, ReverserState};
use crate::features::todos::{TodosAction, TodosReducer, TodosState};
use crate::topics::{TOPICS, Topic};

/// Which screen is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Read-only topic cards
    #[default]
    Topics,
    /// The interactive widgets
    Playground,
}

/// Which widget has focus in the playground.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Panel {
    /// Square calculator
    #[default]
    Calculator,
    /// String reverser
    Reverser,
    /// Greeting generator
    Greeting,
    /// Fibonacci sequence
    Fibonacci,
    /// Todo list
    Todos,
}

impl Panel {
    /// The panel after this one, wrapping at the end.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Panel::Calculator => Panel::Reverser,
            Panel::Reverser => Panel::Greeting,
            Panel::Greeting => Panel::Fibonacci,
            Panel::Fibonacci => Panel::Todos,
            Panel::Todos => Panel::Calculator,
        }
    }

    /// The panel before this one, wrapping at the start.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Panel::Calculator => Panel::Todos,
            Panel::Reverser => Panel::Calculator,
            Panel::Greeting => Panel::Reverser,
            Panel::Fibonacci => Panel::Greeting,
            Panel::Todos => Panel::Fibonacci,
        }
    }

    /// Display title of the widget.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Panel::Calculator => "Square Calculator",
            Panel::Reverser => "String Reverser",
            Panel::Greeting => "Smart Greeting Generator",
            Panel::Fibonacci => "Fibonacci Sequence",
            Panel::Todos => "Todo List Manager",
        }
    }
}

/// Top-level application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active screen
    pub view: View,
    /// Welcome line shown in the header
    pub welcome: String,
    /// Cursor into `topics`
    pub selected_topic: usize,
    /// Focused playground widget
    pub focus: Panel,
    /// The static topic cards
    pub topics: &'static [Topic],
    /// Square calculator widget
    pub calculator: CalculatorState,
    /// String reverser widget
    pub reverser: ReverserState,
    /// Greeting generator widget
    pub greeting: GreetingState,
    /// Fibonacci sequence widget
    pub fibonacci: FibonacciState,
    /// Todo list widget
    pub todos: TodosState,
}

impl AppState {
    /// Create the initial state with the given welcome line.
    #[must_use]
    pub fn new(welcome: impl Into<String>) -> Self {
        Self {
            view: View::default(),
            welcome: welcome.into(),
            selected_topic: 0,
            focus: Panel::default(),
            topics: TOPICS,
            calculator: CalculatorState::default(),
            reverser: ReverserState::default(),
            greeting: GreetingState::default(),
            fibonacci: FibonacciState::default(),
            todos: TodosState::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("Welcome to the tour!")
    }
}

/// Top-level actions.
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Show the topic cards screen
    ShowTopics,
    /// Show the interactive playground
    ShowPlayground,
    /// Move the topic cursor up
    TopicUp,
    /// Move the topic cursor down
    TopicDown,
    /// Focus the next playground widget
    FocusNext,
    /// Focus the previous playground widget
    FocusPrev,
    /// Square calculator actions
    Calculator(CalculatorAction),
    /// String reverser actions
    Reverser(ReverserAction),
    /// Greeting generator actions
    Greeting(GreetingAction),
    /// Fibonacci sequence actions
    Fibonacci(FibonacciAction),
    /// Todo list actions
    Todos(TodosAction),
}

/// Handles navigation between screens, topics, and widget focus.
#[derive(Debug, Clone, Copy)]
pub struct NavigationReducer<C> {
    _phantom: PhantomData<C>,
}

impl<C> NavigationReducer<C> {
    /// Create a new navigation reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C> Default for NavigationReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Reducer for NavigationReducer<C> {
    type State = AppState;
    type Action = AppAction;
    type Environment = TourEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AppAction::ShowTopics => state.view = View::Topics,
            AppAction::ShowPlayground => state.view = View::Playground,
            AppAction::TopicUp => state.selected_topic = state.selected_topic.saturating_sub(1),
            AppAction::TopicDown => {
                if state.selected_topic + 1 < state.topics.len() {
                    state.selected_topic += 1;
                }
            },
            AppAction::FocusNext => state.focus = state.focus.next(),
            AppAction::FocusPrev => state.focus = state.focus.prev(),
            // Widget actions are handled by the scoped feature reducers
            _ => {},
        }

        smallvec![Effect::None]
    }
}

/// Build the application reducer: navigation plus one scoped reducer
/// per widget.
#[must_use]
pub fn app_reducer<C: Clock + 'static>()
-> CombinedReducer<AppState, AppAction, TourEnvironment<C>> {
    let reducers: Vec<BoxedReducer<AppState, AppAction, TourEnvironment<C>>> = vec![
        Box::new(NavigationReducer::new()),
        Box::new(scope_reducer(
            CalculatorReducer::new(),
            |state: &AppState| &state.calculator,
            |state: &mut AppState, calculator: CalculatorState| state.calculator = calculator,
            |action: AppAction| match action {
                AppAction::Calculator(child) => Some(child),
                _ => None,
            },
            AppAction::Calculator,
        )),
        Box::new(scope_reducer(
            ReverserReducer::new(),
            |state: &AppState| &state.reverser,
            |state: &mut AppState, reverser: ReverserState| state.reverser = reverser,
            |action: AppAction| match action {
                AppAction::Reverser(child) => Some(child),
                _ => None,
            },
            AppAction::Reverser,
        )),
        Box::new(scope_reducer(
            GreetingReducer::new(),
            |state: &AppState| &state.greeting,
            |state: &mut AppState, greeting: GreetingState| state.greeting = greeting,
            |action: AppAction| match action {
                AppAction::Greeting(child) => Some(child),
                _ => None,
            },
            AppAction::Greeting,
        )),
        Box::new(scope_reducer(
            FibonacciReducer::new(),
            |state: &AppState| &state.fibonacci,
            |state: &mut AppState, fibonacci: FibonacciState| state.fibonacci = fibonacci,
            |action: AppAction| match action {
                AppAction::Fibonacci(child) => Some(child),
                _ => None,
            },
            AppAction::Fibonacci,
        )),
        Box::new(scope_reducer(
            TodosReducer::new(),
            |state: &AppState| &state.todos,
            |state: &mut AppState, todos: TodosState| state.todos = todos,
            |action: AppAction| match action {
                AppAction::Todos(child) => Some(child),
                _ => None,
            },
            AppAction::Todos,
        )),
    ];

    combine_reducers(reducers)
}
