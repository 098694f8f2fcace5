//! Playground features, one module per interactive widget.
//!
//! Every feature follows the same shape: a `State` struct, an `Action`
//! enum, and a reducer generic over the clock so all features share
//! [`crate::environment::TourEnvironment`] and can be composed under a
//! single store.

pub mod calculator;
pub mod fibonacci;
pub mod greeting;
pub mod input;
pub mod outcome;
pub mod reverser;
pub mod todos;
