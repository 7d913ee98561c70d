//! # SubscriberSet: ordered, sequential fan-out
//!
//! [`SubscriberSet`] is the clock's registry. It holds subscribers in insertion
//! order and delivers one [`TimeInfo`] to each of them, awaiting every call before
//! moving to the next.
//!
//! ## What it guarantees
//! - Insertion order is invocation order.
//! - No deduplication: a subscriber pushed twice is called twice, at both positions.
//! - `dispatch` returns only after every subscriber has returned (or one has failed
//!   under [`FailurePolicy::Propagate`]).
//! - Panics inside subscribers are caught and reported through the policy.
//!
//! ## What it does **not** guarantee
//! - No retries; a failed delivery is not repeated.
//! - No timeouts; a subscriber that never returns stalls the clock.
//!
//! ## Diagram
//! ```text
//!    dispatch(source, &tick, policy)
//!        │
//!        ├──► S1.on_tick() ── await ──┐
//!        ├──► S2.on_tick() ── await ──┤   Propagate: first Err stops here
//!        └──► SN.on_tick() ── await ──┘   Isolate:   Err/panic → warn, continue
//! ```
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if a subscriber panics while holding a lock.

use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use log::{trace, warn};

use crate::error::ClockError;
use crate::events::{ClockId, TimeInfo};
use crate::policies::FailurePolicy;

use super::Subscribe;

/// Ordered registry of subscribers.
#[derive(Clone, Default)]
pub struct SubscriberSet {
    subs: Vec<Arc<dyn Subscribe>>,
}

impl SubscriberSet {
    /// Creates a set from subscribers in the given order.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        Self { subs }
    }

    /// Appends a subscriber. Duplicates are kept.
    pub fn push(&mut self, sub: Arc<dyn Subscribe>) {
        self.subs.push(sub);
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    /// Subscriber names in invocation order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.subs.iter().map(|s| s.name())
    }

    /// Delivers `tick` to every subscriber, in order.
    ///
    /// Returns how many subscribers handled the tick successfully. With an empty set
    /// this is `Ok(0)` and nothing else happens.
    ///
    /// # Errors
    /// Under [`FailurePolicy::Propagate`], the first failing subscriber ends the
    /// dispatch with [`ClockError::SubscriberFailed`] or
    /// [`ClockError::SubscriberPanicked`]; later subscribers are not called.
    /// Under [`FailurePolicy::Isolate`] this never returns `Err`.
    pub async fn dispatch(
        &self,
        source: &ClockId,
        tick: &TimeInfo,
        policy: FailurePolicy,
    ) -> Result<usize, ClockError> {
        let mut delivered = 0;

        for sub in &self.subs {
            let fut = sub.on_tick(source, tick);
            let err = match AssertUnwindSafe(fut).catch_unwind().await {
                Ok(Ok(())) => {
                    trace!("[{source}] delivered {tick} to '{}'", sub.name());
                    delivered += 1;
                    continue;
                }
                Ok(Err(error)) => ClockError::SubscriberFailed {
                    subscriber: sub.name().to_string(),
                    error,
                },
                Err(panic_err) => ClockError::SubscriberPanicked {
                    subscriber: sub.name().to_string(),
                    info: panic_message(panic_err.as_ref()),
                },
            };

            if !policy.isolates() {
                return Err(err);
            }
            warn!("[{source}] {} ({}); continuing", err, err.as_label());
        }

        Ok(delivered)
    }
}

impl fmt::Debug for SubscriberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
