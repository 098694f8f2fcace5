//! Dependency injection for the tour application.

use chrono::{DateTime, Utc};
use syntax_tour_core::environment::Clock;

/// Application environment
///
/// The tour's only ambient dependency is wall-clock time, used by the
/// greeting generator. Every feature reducer shares this environment
/// type so they can be composed under one store.
#[derive(Debug, Clone)]
pub struct TourEnvironment<C: Clock> {
    /// Clock for time-of-day dependent features
    pub clock: C,
}

impl<C: Clock> TourEnvironment<C> {
    /// Create a new environment with the given clock
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
