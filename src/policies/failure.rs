//! # Subscriber failure policies.
//!
//! [`FailurePolicy`] decides what a dispatch does when a subscriber returns an error.
//!
//! - [`FailurePolicy::Propagate`] the first failure aborts the dispatch and the loop (default).
//! - [`FailurePolicy::Isolate`] failures and panics are logged and the dispatch continues.
//!
//! ## Choosing the right policy
//!
//! **Fail fast** (one broken subscriber should stop the program):
//! ```text
//! FailurePolicy::Propagate   → A ok → B err → C skipped → run() returns Err
//! ```
//!
//! **Best effort** (subscribers are independent side channels):
//! ```text
//! FailurePolicy::Isolate     → A ok → B err (warn) → C ok → loop continues
//! ```
//!
//! Panics are caught in both modes. Under `Propagate` they surface as
//! `ClockError::SubscriberPanicked`; under `Isolate` they are logged like an error.

/// Policy controlling how a dispatch reacts to a failing subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing subscriber and surface the error (default).
    #[default]
    Propagate,
    /// Log the failure, keep delivering to the remaining subscribers.
    Isolate,
}

impl FailurePolicy {
    /// True for [`FailurePolicy::Isolate`].
    #[inline]
    pub fn isolates(&self) -> bool {
        matches!(self, FailurePolicy::Isolate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_propagates() {
        assert_eq!(FailurePolicy::default(), FailurePolicy::Propagate);
        assert!(!FailurePolicy::Propagate.isolates());
        assert!(FailurePolicy::Isolate.isolates());
    }
}
