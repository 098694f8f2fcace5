//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Embed a child feature (its own state and action
//!   types) into a parent reducer
//!
//! Together they let an application be assembled from independent
//! features: each feature ships its own `State`/`Action`/`Reducer`, the
//! parent owns a slice of state per feature plus one action variant per
//! feature, and the composed reducer routes everything.

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// A reducer that can participate in [`combine_reducers`].
///
/// The combined reducer is handed to the store, which shares it across
/// tasks, so the boxed members must be `Send + Sync`.
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, and all effects are collected and
/// concatenated. This is useful when you want to split reducer logic
/// across multiple implementations - typically one reducer per feature,
/// each scoped with [`scope_reducer`], plus any parent-level reducers.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
///
/// # Examples
///
/// ```
/// use syntax_tour_core::{Effect, Reducer, SmallVec, smallvec};
/// use syntax_tour_core::composition::{BoxedReducer, combine_reducers};
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: i32,
///     logged: bool,
/// }
///
/// #[derive(Clone)]
/// enum AppAction {
///     Increment,
///     Log,
/// }
///
/// struct CounterReducer;
/// struct LoggingReducer;
///
/// impl Reducer for CounterReducer {
///     type State = AppState;
///     type Action = AppAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) -> SmallVec<[Effect<Self::Action>; 4]> {
///         if matches!(action, AppAction::Increment) {
///             state.counter += 1;
///         }
///         smallvec![Effect::None]
///     }
/// }
///
/// impl Reducer for LoggingReducer {
///     type State = AppState;
///     type Action = AppAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) -> SmallVec<[Effect<Self::Action>; 4]> {
///         if matches!(action, AppAction::Log) {
///             state.logged = true;
///         }
///         smallvec![Effect::None]
///     }
/// }
///
/// let reducers: Vec<BoxedReducer<_, _, _>> = vec![Box::new(CounterReducer), Box::new(LoggingReducer)];
/// let combined = combine_reducers(reducers);
///
/// let mut state = AppState::default();
/// let _ = combined.reduce(&mut state, AppAction::Increment, &());
/// assert_eq!(state.counter, 1);
/// ```
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Embeds a child feature's reducer into a parent state and action type.
///
/// The child reducer keeps its own `State` and `Action` types. The scope
/// is described by two state accessors (read the child slice out of the
/// parent, write it back) and two action mappers: `to_child` extracts the
/// child action from a parent action (returning `None` for actions the
/// child does not handle, which makes the scoped reducer a no-op), and
/// `from_child` wraps child actions produced by effects back into the
/// parent action type.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (a slice of `S`)
/// - `A`: The parent action type
/// - `SubA`: The child action type
/// - `E`: The shared environment type
///
/// # Examples
///
/// ```
/// use syntax_tour_core::{Effect, Reducer, SmallVec, smallvec};
/// use syntax_tour_core::composition::scope_reducer;
///
/// #[derive(Clone, Default)]
/// struct CounterState {
///     count: i32,
/// }
///
/// #[derive(Clone)]
/// enum CounterAction {
///     Increment,
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = CounterState;
///     type Action = CounterAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) -> SmallVec<[Effect<Self::Action>; 4]> {
///         match action {
///             CounterAction::Increment => state.count += 1,
///         }
///         smallvec![Effect::None]
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: CounterState,
///     title: String,
/// }
///
/// #[derive(Clone)]
/// enum AppAction {
///     Counter(CounterAction),
///     Quit,
/// }
///
/// let scoped = scope_reducer(
///     CounterReducer,
///     |app: &AppState| &app.counter,
///     |app: &mut AppState, counter: CounterState| app.counter = counter,
///     |action: AppAction| match action {
///         AppAction::Counter(child) => Some(child),
///         AppAction::Quit => None,
///     },
///     AppAction::Counter,
/// );
///
/// let mut state = AppState::default();
/// let _ = scoped.reduce(&mut state, AppAction::Counter(CounterAction::Increment), &());
/// assert_eq!(state.counter.count, 1);
///
/// // Actions outside the scope leave the child untouched
/// let _ = scoped.reduce(&mut state, AppAction::Quit, &());
/// assert_eq!(state.counter.count, 1);
/// ```
pub fn scope_reducer<S, SubS, A, SubA, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    to_child: fn(A) -> Option<SubA>,
    from_child: fn(SubA) -> A,
) -> ScopedReducer<S, SubS, A, SubA, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    SubA: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        to_child,
        from_child,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that embeds a child feature in a parent.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, SubA, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    SubA: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    to_child: fn(A) -> Option<SubA>,
    from_child: fn(SubA) -> A,
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, SubS, A, SubA, E, R> Reducer for ScopedReducer<S, SubS, A, SubA, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    SubA: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(child_action) = (self.to_child)(action) else {
            return SmallVec::new();
        };

        // Run the child reducer on a copy of its slice, then write it back
        let mut sub_state = (self.get_state)(state).clone();
        let effects = self.reducer.reduce(&mut sub_state, child_action, env);
        (self.set_state)(state, sub_state);

        effects
            .into_iter()
            .map(|effect| effect.map(self.from_child))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[derive(Clone, Default)]
    struct TestState {
        counter: i32,
        name: String,
    }

    #[derive(Clone)]
    enum TestAction {
        Increment,
        Decrement,
        SetName(String),
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => state.counter += 1,
                TestAction::Decrement => state.counter -= 1,
                TestAction::SetName(_) => {},
            }
            smallvec![Effect::None]
        }
    }

    struct NameReducer;

    impl Reducer for NameReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            if let TestAction::SetName(name) = action {
                state.name = name;
            }
            smallvec![Effect::None]
        }
    }

    #[test]
    fn test_combine_reducers() {
        let reducers: Vec<BoxedReducer<_, _, _>> =
            vec![Box::new(CounterReducer), Box::new(NameReducer)];
        let combined = combine_reducers(reducers);

        let mut state = TestState::default();

        // Test counter reducer
        let _ = combined.reduce(&mut state, TestAction::Increment, &());
        assert_eq!(state.counter, 1);

        // Test name reducer
        let _ = combined.reduce(&mut state, TestAction::SetName("Alice".to_string()), &());
        assert_eq!(state.name, "Alice");

        // Both reducers work
        let _ = combined.reduce(&mut state, TestAction::Decrement, &());
        assert_eq!(state.counter, 0);
        assert_eq!(state.name, "Alice");
    }

    // Scoped reducer tests
    #[derive(Clone, Default)]
    struct SubState {
        value: i32,
    }

    #[derive(Clone)]
    enum SubAction {
        Add(i32),
        Multiply(i32),
    }

    struct SubReducer;

    impl Reducer for SubReducer {
        type State = SubState;
        type Action = SubAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                SubAction::Add(n) => state.value += n,
                SubAction::Multiply(n) => state.value *= n,
            }
            smallvec![Effect::None]
        }
    }

    #[derive(Clone, Default)]
    struct ParentState {
        sub: SubState,
        other: String,
    }

    #[derive(Clone)]
    enum ParentAction {
        Sub(SubAction),
        Noop,
    }

    fn scoped_sub() -> ScopedReducer<ParentState, SubState, ParentAction, SubAction, (), SubReducer>
    {
        scope_reducer(
            SubReducer,
            |parent: &ParentState| &parent.sub,
            |parent: &mut ParentState, sub| parent.sub = sub,
            |action| match action {
                ParentAction::Sub(child) => Some(child),
                ParentAction::Noop => None,
            },
            ParentAction::Sub,
        )
    }

    #[test]
    fn test_scope_reducer() {
        let scoped = scoped_sub();

        let mut state = ParentState {
            sub: SubState { value: 5 },
            other: "test".to_string(),
        };

        let _ = scoped.reduce(&mut state, ParentAction::Sub(SubAction::Add(3)), &());
        assert_eq!(state.sub.value, 8);
        assert_eq!(state.other, "test"); // Other state unchanged

        let _ = scoped.reduce(&mut state, ParentAction::Sub(SubAction::Multiply(2)), &());
        assert_eq!(state.sub.value, 16);
        assert_eq!(state.other, "test");
    }

    #[test]
    fn test_scope_reducer_ignores_foreign_actions() {
        let scoped = scoped_sub();

        let mut state = ParentState {
            sub: SubState { value: 5 },
            other: "test".to_string(),
        };

        let effects = scoped.reduce(&mut state, ParentAction::Noop, &());
        assert_eq!(state.sub.value, 5);
        assert!(effects.is_empty());
    }

    // Effect mapping through a scope
    struct EchoReducer;

    impl Reducer for EchoReducer {
        type State = SubState;
        type Action = SubAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                SubAction::Add(n) => {
                    state.value += n;
                    // Follow up every add with a doubling pass
                    smallvec![Effect::dispatch(SubAction::Multiply(2))]
                },
                SubAction::Multiply(n) => {
                    state.value *= n;
                    smallvec![Effect::None]
                },
            }
        }
    }

    #[test]
    fn test_scope_reducer_maps_effects_into_parent_actions() {
        let scoped = scope_reducer(
            EchoReducer,
            |parent: &ParentState| &parent.sub,
            |parent: &mut ParentState, sub| parent.sub = sub,
            |action| match action {
                ParentAction::Sub(child) => Some(child),
                ParentAction::Noop => None,
            },
            ParentAction::Sub,
        );

        let mut state = ParentState::default();
        let effects = scoped.reduce(&mut state, ParentAction::Sub(SubAction::Add(1)), &());

        assert_eq!(state.sub.value, 1);
        assert_eq!(effects.len(), 1);
        assert!(matches!(
            &effects[0],
            Effect::Dispatch(action) if matches!(**action, ParentAction::Sub(SubAction::Multiply(2)))
        ));
    }
}
