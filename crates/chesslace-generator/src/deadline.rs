use std::time::{Duration, Instant};

/// A wall-clock budget polled at loop boundaries.
///
/// Cancellation in the generator is budget-based, not signal-based: every
/// sampling attempt, hill-climb restart, and per-level loop checks its
/// deadline at the top of the iteration and gives up when it has passed. A
/// search that is already underway is never interrupted mid-recursion.
///
/// Running out of budget is a normal outcome — callers get `None` (or a
/// short level set) and fall back to curated puzzles.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use chesslace_generator::Deadline;
///
/// assert!(!Deadline::NONE.expired());
///
/// let deadline = Deadline::within(Duration::from_secs(5));
/// assert!(!deadline.expired());
/// assert!(deadline.remaining().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// No budget: never expires.
    pub const NONE: Self = Self(None);

    /// A deadline `budget` from now.
    #[must_use]
    pub fn within(budget: Duration) -> Self {
        Self(Some(Instant::now() + budget))
    }

    /// A deadline at a fixed instant.
    #[must_use]
    pub const fn at(when: Instant) -> Self {
        Self(Some(when))
    }

    /// `true` once the budget has run out.
    #[must_use]
    pub fn expired(self) -> bool {
        self.0.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Time left, or `None` for an unbounded deadline.
    #[must_use]
    pub fn remaining(self) -> Option<Duration> {
        self.0
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// The tighter of two deadlines.
    #[must_use]
    pub fn earliest(self, other: Self) -> Self {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Self(Some(a.min(b))),
            (a, b) => Self(a.or(b)),
        }
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::NONE
    }
}
