//! The demo functions showcased by the playground widgets.
//!
//! Everything here is a pure function; the single exception is
//! [`greet`], which reads the current hour through the injected
//! [`Clock`] rather than touching the system time directly.

use chrono::Timelike;
use syntax_tour_core::environment::Clock;

/// Square a number.
#[must_use]
pub fn square(n: f64) -> f64 {
    n * n
}

/// Reverse a string, character by character.
///
/// Operates on `char` units; combining characters and multi-codepoint
/// symbols are not special-cased.
#[must_use]
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Build a greeting for `name` using a time-of-day phrase for `hour`.
///
/// Hours below 12 are "morning", 12 through 17 "afternoon", the rest
/// "evening". `name` is interpolated verbatim.
#[must_use]
pub fn greeting_for_hour(name: &str, hour: u32) -> String {
    let period = if hour < 12 {
        "morning"
    } else if hour < 18 {
        "afternoon"
    } else {
        "evening"
    };

    format!("Good {period}, {name}! 👋")
}

/// Build a greeting for `name` at the clock's current hour.
#[must_use]
pub fn greet(name: &str, clock: &impl Clock) -> String {
    greeting_for_hour(name, clock.now().hour())
}

/// First `n` Fibonacci numbers: `[0, 1, 1, 2, 3, ...]`.
///
/// Returns an empty sequence for `n == 0`. No upper bound is enforced
/// here; the playground restricts input to 1-20.
#[must_use]
pub fn fibonacci(n: usize) -> Vec<u64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0];
    }

    let mut sequence = vec![0, 1];
    for i in 2..n {
        let next = sequence[i - 1] + sequence[i - 2];
        sequence.push(next);
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use syntax_tour_testing::clock_at_hour;

    #[test]
    fn test_square() {
        assert_eq!(square(4.0), 16.0);
        assert_eq!(square(-3.0), 9.0);
        assert_eq!(square(0.0), 0.0);
        assert_eq!(square(2.5), 6.25);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("héllo"), "olléh");
    }

    #[test]
    fn test_greeting_periods() {
        assert!(greeting_for_hour("Sam", 0).contains("morning"));
        assert!(greeting_for_hour("Sam", 9).contains("morning"));
        assert!(greeting_for_hour("Sam", 12).contains("afternoon"));
        assert!(greeting_for_hour("Sam", 17).contains("afternoon"));
        assert!(greeting_for_hour("Sam", 18).contains("evening"));
        assert!(greeting_for_hour("Sam", 20).contains("evening"));
        assert!(greeting_for_hour("Sam", 23).contains("evening"));
    }

    #[test]
    fn test_greeting_interpolates_name() {
        assert_eq!(greeting_for_hour("Sam", 9), "Good morning, Sam! 👋");
    }

    #[test]
    fn test_greet_reads_the_injected_clock() {
        assert!(greet("Sam", &clock_at_hour(9)).contains("morning"));
        assert!(greet("Sam", &clock_at_hour(20)).contains("evening"));
    }

    #[test]
    fn test_fibonacci_base_cases() {
        assert_eq!(fibonacci(0), Vec::<u64>::new());
        assert_eq!(fibonacci(1), vec![0]);
        assert_eq!(fibonacci(2), vec![0, 1]);
        assert_eq!(fibonacci(5), vec![0, 1, 1, 2, 3]);
    }

    #[test]
    fn test_fibonacci_playground_maximum() {
        let sequence = fibonacci(20);
        assert_eq!(sequence.len(), 20);
        assert_eq!(sequence.last(), Some(&4181));
    }

    proptest! {
        #[test]
        fn prop_square_matches_self_multiplication(n in -10_000i32..10_000) {
            let x = f64::from(n);
            prop_assert_eq!(square(x), x * x);
        }

        #[test]
        fn prop_reverse_round_trips(s in ".*") {
            prop_assert_eq!(reverse(&reverse(&s)), s);
        }

        #[test]
        fn prop_fibonacci_adjacent_sums(n in 3usize..30) {
            let sequence = fibonacci(n);
            for i in 2..sequence.len() {
                prop_assert_eq!(sequence[i], sequence[i - 1] + sequence[i - 2]);
            }
        }
    }
}
