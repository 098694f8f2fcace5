//! Per-widget result display.

/// What a widget currently shows in its result line.
///
/// Validation failures are modeled as data, never as errors: the
/// reducer writes an `Error` outcome and the render layer gives it
/// distinct styling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Result of a successful submission
    Success(String),
    /// User-visible validation message
    Error(String),
}

impl Outcome {
    /// Whether this outcome is a successful result.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Whether this outcome is a validation message.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// The displayable text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Outcome::Idle => None,
            Outcome::Success(text) | Outcome::Error(text) => Some(text),
        }
    }
}
