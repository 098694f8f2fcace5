//! # Syntax Tour Testing
//!
//! Testing utilities and helpers for the syntax-tour architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - Assertion helpers for reducers
//!
//! ## Example
//!
//! ```ignore
//! use syntax_tour_testing::{ReducerTest, clock_at_hour};
//!
//! ReducerTest::new(GreetingReducer::new())
//!     .with_env(TourEnvironment::new(clock_at_hour(9)))
//!     .given_state(GreetingState::default())
//!     .when_action(GreetingAction::Submit)
//!     .then_state(|state| {
//!         assert!(state.outcome.is_success());
//!     })
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use syntax_tour_core::environment::Clock;

pub mod reducer_test;

/// Mock implementations of Environment traits.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use syntax_tour_testing::mocks::FixedClock;
    /// use syntax_tour_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Create a fixed clock pinned to a specific hour of the day
    ///
    /// Useful for features whose behavior depends on the time of day
    /// (the greeting generator).
    ///
    /// # Panics
    ///
    /// This function will panic if `hour` is not in `0..24`.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn clock_at_hour(hour: u32) -> FixedClock {
        assert!(hour < 24, "hour must be in 0..24, got {hour}");
        FixedClock::new(
            DateTime::parse_from_rfc3339(&format!("2025-01-01T{hour:02}:00:00Z"))
                .expect("constructed timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, clock_at_hour, test_clock};
pub use reducer_test::ReducerTest;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn test_clock_at_hour() {
        let clock = clock_at_hour(9);
        assert_eq!(clock.now().hour(), 9);

        let clock = clock_at_hour(20);
        assert_eq!(clock.now().hour(), 20);
    }
}
