//! # Syntax Tour
//!
//! An interactive terminal tour of basic Rust syntax: read-only topic
//! cards plus a playground of small interactive widgets (square
//! calculator, string reverser, greeting generator, Fibonacci
//! generator, todo list).
//!
//! Built on the syntax-tour architecture:
//! - every widget is a feature with its own state, actions, and pure
//!   reducer (see [`features`]);
//! - the application reducer is assembled from the features with
//!   `combine_reducers` and `scope_reducer` (see [`app`]);
//! - the store serializes every user event, so each key press runs to
//!   completion before the next is processed;
//! - the terminal UI re-renders wholesale from a state snapshot after
//!   each event (see [`tui`]).

pub mod app;
pub mod environment;
pub mod features;
pub mod functions;
pub mod todo;
pub mod topics;
pub mod tui;
