//! Probe outcomes and terminal poll results.

/// What a probe observed on one sampling of external state.
///
/// A probe re-queries live state on every invocation; it carries no state
/// between calls. `Halted` means the condition can no longer become true
/// (an element permanently removed, as opposed to not yet visible) and
/// tells the poller to stop retrying immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Condition not satisfied yet; worth probing again
    Pending,

    /// Condition satisfied, carrying the observed value
    Ready(T),

    /// Condition permanently unreachable, with the reason
    Halted(String),
}

impl<T> Outcome<T> {
    /// Check whether this outcome carries a value.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Check whether the condition is still worth probing.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Terminal result of one poll invocation.
///
/// Produced exactly once per [`poll`](crate::poll) call. `TimedOut` and
/// `Failed` are ordinary values the caller decides about, never panics;
/// a fault in the probe itself propagates as an `Err` instead and is not
/// represented here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollResult<T> {
    /// The probe reported `Ready` within the budget
    Success(T),

    /// The budget elapsed with the probe still reporting `Pending`
    TimedOut,

    /// The probe reported `Halted` with this reason
    Failed(String),
}

impl<T> PollResult<T> {
    /// Check whether the poll succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check whether the poll ran out of budget.
    #[must_use]
    pub fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut)
    }

    /// Check whether the condition became permanently unreachable.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Convert into the success value, discarding the failure modes.
    #[must_use]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::TimedOut | Self::Failed(_) => None,
        }
    }
}
