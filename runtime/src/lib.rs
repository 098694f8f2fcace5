//! # Syntax Tour Runtime
//!
//! Runtime implementation for the syntax-tour architecture.
//!
//! This crate provides the Store runtime that coordinates reducer
//! execution and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Event Loop**: The action → reducer → effects → action feedback
//!   loop, drained to completion inside every `send`
//!
//! ## Execution model
//!
//! All mutations flow through a single write lock: one action (plus all
//! of its follow-up dispatches) is fully applied before the next `send`
//! acquires the lock. Callers therefore observe run-to-completion
//! semantics - there is no interleaving of mutations, matching a
//! single-threaded cooperative event model.
//!
//! ## Example
//!
//! ```ignore
//! use syntax_tour_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use syntax_tour_core::effect::Effect;
use syntax_tour_core::reducer::Reducer;
use tokio::sync::RwLock;

/// The Store - runtime coordinator for a feature or application
///
/// The Store:
/// - Owns the state behind a read-write lock
/// - Processes one action at a time through the reducer
/// - Drains follow-up dispatches before releasing the write lock
/// - Provides scoped read access via [`Store::state`]
///
/// Cloning a Store is cheap and yields a handle to the same state.
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Example
///
/// ```ignore
/// let store = Store::new(AppState::default(), app_reducer(), environment);
///
/// store.send(AppAction::Todos(TodosAction::Submit)).await;
/// let count = store.state(|s| s.todos.list.len()).await;
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: Arc<R>,
    environment: Arc<E>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Send + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting state for the store
    /// - `reducer`: The reducer implementation (business logic)
    /// - `environment`: Injected dependencies
    ///
    /// # Returns
    ///
    /// A new Store instance ready to process actions
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer: Arc::new(reducer),
            environment: Arc::new(environment),
        }
    }

    /// Send an action through the reducer
    ///
    /// Acquires the write lock, applies the action, then applies every
    /// follow-up action described by [`Effect::Dispatch`] in FIFO order.
    /// The lock is held for the whole drain: once `send` returns, the
    /// action and all of its follow-ups are fully committed, and no
    /// other `send` has observed a partial update.
    ///
    /// Dispatch chains are expected to terminate; reducers must not
    /// dispatch cyclically.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) {
        let mut queue = VecDeque::new();
        queue.push_back(action);

        let mut state = self.state.write().await;
        tracing::trace!("Acquired write lock on state");

        while let Some(action) = queue.pop_front() {
            tracing::debug!("Processing action");
            let effects = self.reducer.reduce(&mut state, action, &self.environment);
            tracing::trace!("Reducer completed, returned {} effects", effects.len());

            for effect in effects {
                match effect {
                    Effect::None => {},
                    Effect::Dispatch(next) => queue.push_back(*next),
                }
            }
        }
    }

    /// Read a projection of the current state
    ///
    /// The closure runs under the read lock; return owned data rather
    /// than borrowing out of the state.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let completed = store.state(|s| s.todos.list.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
            environment: Arc::clone(&self.environment),
        }
    }
}
