//! Static topic cards for the tour.
//!
//! Topics are read-only records rendered in definition order; nothing
//! in the application mutates them.

/// A syntax topic: title, short description, code example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    /// Card heading
    pub title: &'static str,
    /// One- or two-sentence summary
    pub description: &'static str,
    /// Code listing shown under the description
    pub example: &'static str,
}

/// The canonical topic set, in display order.
pub static TOPICS: &[Topic] = &[
    Topic {
        title: "Ownership & Borrowing",
        description: "Every value has a single owner. References borrow access without \
                      transferring ownership, and the compiler checks the rules at build time.",
        example: r#"let name = String::from("Alice");
let len = length(&name); // borrowed, not moved
println!("{name} is {len} chars long");

fn length(s: &str) -> usize {
    s.len()
}"#,
    },
    Topic {
        title: "Structs & Methods",
        description: "Structs group related data; impl blocks attach methods and associated \
                      functions to them.",
        example: r#"struct User {
    id: u64,
    username: String,
    active: bool,
}

impl User {
    fn deactivate(&mut self) {
        self.active = false;
    }
}"#,
    },
    Topic {
        title: "Enums & Pattern Matching",
        description: "Enums model a value that is exactly one of several variants; match forces \
                      every variant to be handled.",
        example: r#"enum Shape {
    Circle { radius: f64 },
    Rect { width: f64, height: f64 },
}

fn area(shape: &Shape) -> f64 {
    match shape {
        Shape::Circle { radius } => std::f64::consts::PI * radius * radius,
        Shape::Rect { width, height } => width * height,
    }
}"#,
    },
    Topic {
        title: "Traits",
        description: "Traits define shared behavior; any type implementing a trait can be used \
                      where the trait is expected.",
        example: r#"trait Speak {
    fn speak(&self) -> String;
}

struct Dog;

impl Speak for Dog {
    fn speak(&self) -> String {
        "Rex barks.".to_string()
    }
}"#,
    },
    Topic {
        title: "Generics",
        description: "Generics allow reusable functions and types that work with any data type.",
        example: r#"fn identity<T>(value: T) -> T {
    value
}

let num = identity(42);
let text = identity("Hello");"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_topics_are_present_and_complete() {
        assert!(!TOPICS.is_empty());
        for topic in TOPICS {
            assert!(!topic.title.is_empty());
            assert!(!topic.description.is_empty());
            assert!(!topic.example.is_empty());
        }
    }

    #[test]
    fn test_topic_titles_are_unique() {
        let titles: HashSet<_> = TOPICS.iter().map(|topic| topic.title).collect();
        assert_eq!(titles.len(), TOPICS.len());
    }
}
