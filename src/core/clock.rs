//! # Clock: samples a time source and notifies subscribers on every new second.
//!
//! The [`Clock`] owns a [`TimeSource`], a [`SubscriberSet`] and the last observed
//! time. Its loop has a single steady state:
//!
//! ## Loop
//! ```text
//! run(token)
//! loop {
//!   ├─► token cancelled? ─► exit Ok(())
//!   ├─► sleep(interval)          (cancellable; the only suspension point)
//!   └─► poll_once()
//!         ├─► sample = source.sample()?              (Err ─► exit Err(SourceUnavailable))
//!         ├─► sample.second != last.second ?
//!         │      └─► dispatch(id, &sample) to every subscriber, in order
//!         │             (Propagate: Err ─► exit Err(SubscriberFailed | SubscriberPanicked))
//!         └─► last = sample                          (always, transition or not)
//! }
//! ```
//!
//! ## Rules
//! - Detection looks at the `second` component only.
//! - The very first sample only primes `last` (nothing to compare against) unless
//!   an initial time was seeded with [`ClockBuilder::with_initial`](crate::ClockBuilder::with_initial).
//! - One transition is fully dispatched before the next sample is taken.
//! - Registration needs `&mut Clock`, and so does `run`: the registry cannot change
//!   while the loop is running.
//! - A clock whose time source moves backwards still fires on every second change;
//!   nothing checks monotonicity.

use std::sync::Arc;

use log::{debug, info, trace, warn};
use tokio::{select, time};
use tokio_util::sync::CancellationToken;

use crate::core::{ClockBuilder, ClockConfig};
use crate::error::ClockError;
use crate::events::{ClockId, TimeInfo};
use crate::subscribers::{Subscribe, SubscriberSet};
use crate::time::TimeSource;

/// Second-resolution notifier.
///
/// ### Responsibilities
/// - **Sampling**: reads the time source once per iteration
/// - **Detection**: compares the sampled second with the stored one
/// - **Dispatch**: delivers a fresh [`TimeInfo`] to every subscriber, in order
/// - **Bookkeeping**: overwrites the stored time after every sample
pub struct Clock {
    id: ClockId,
    cfg: ClockConfig,
    source: Box<dyn TimeSource>,
    subs: SubscriberSet,
    last: Option<TimeInfo>,
}

impl Clock {
    /// Creates a clock with no subscribers and no observed time.
    pub fn new(cfg: ClockConfig, source: impl TimeSource + 'static) -> Self {
        Self::from_parts(cfg, Box::new(source), SubscriberSet::default(), None)
    }

    /// Returns a builder for a clock with the given configuration.
    pub fn builder(cfg: ClockConfig) -> ClockBuilder {
        ClockBuilder::new(cfg)
    }

    pub(crate) fn from_parts(
        cfg: ClockConfig,
        source: Box<dyn TimeSource>,
        subs: SubscriberSet,
        last: Option<TimeInfo>,
    ) -> Self {
        Self {
            id: ClockId::new(cfg.name.as_str()),
            cfg,
            source,
            subs,
            last,
        }
    }

    /// Identity passed to subscribers.
    pub fn id(&self) -> &ClockId {
        &self.id
    }

    /// Active configuration.
    pub fn config(&self) -> &ClockConfig {
        &self.cfg
    }

    /// Registered subscribers, in invocation order.
    pub fn subscribers(&self) -> &SubscriberSet {
        &self.subs
    }

    /// Most recent sample, if any has been taken (or seeded).
    pub fn last_observed(&self) -> Option<TimeInfo> {
        self.last
    }

    /// Appends a subscriber to the registry.
    ///
    /// It is called on every transition detected from now on, never for past ones.
    /// Registering the same subscriber twice makes it run twice per transition.
    pub fn register(&mut self, sub: Arc<dyn Subscribe>) {
        debug!("[{}] registered subscriber '{}'", self.id, sub.name());
        self.subs.push(sub);
    }

    /// Runs one iteration without the sleep: sample, detect, dispatch, store.
    ///
    /// Returns the dispatched payload when a transition was detected.
    ///
    /// # Errors
    /// - [`ClockError::SourceUnavailable`] if sampling fails (stored time unchanged)
    /// - [`ClockError::SubscriberFailed`] / [`ClockError::SubscriberPanicked`] under
    ///   [`FailurePolicy::Propagate`](crate::FailurePolicy::Propagate); the stored
    ///   time is not updated in that case
    pub async fn poll_once(&mut self) -> Result<Option<TimeInfo>, ClockError> {
        let sample = self.source.sample()?;

        let fired = match self.last {
            Some(prev) if prev.second() != sample.second() => {
                debug!("[{}] transition {prev} -> {sample}", self.id);
                self.subs
                    .dispatch(&self.id, &sample, self.cfg.failure)
                    .await?;
                Some(sample)
            }
            Some(_) => {
                trace!("[{}] same second {sample}", self.id);
                None
            }
            None => {
                trace!("[{}] primed at {sample}", self.id);
                None
            }
        };

        self.last = Some(sample);
        Ok(fired)
    }

    /// Runs the polling loop until `token` is cancelled or an error occurs.
    ///
    /// Without cancellation this never returns `Ok`. The token is checked at the
    /// top of every iteration and while sleeping; a dispatch in progress is
    /// always completed first.
    ///
    /// # Errors
    /// Whatever [`Clock::poll_once`] returns; the loop stops at the first error.
    pub async fn run(&mut self, token: CancellationToken) -> Result<(), ClockError> {
        info!(
            "[{}] running: source='{}' interval={:?} subscribers={}",
            self.id,
            self.source.name(),
            self.cfg.interval,
            self.subs.len()
        );

        loop {
            if token.is_cancelled() {
                break;
            }
            if !self.suspend(&token).await {
                break;
            }
            if let Err(e) = self.poll_once().await {
                warn!("[{}] stopping: {e} ({})", self.id, e.as_label());
                return Err(e);
            }
        }

        info!("[{}] stopped", self.id);
        Ok(())
    }

    /// Runs exactly `iterations` loop iterations (sleep included) and returns the
    /// payloads that were dispatched, in order.
    ///
    /// # Errors
    /// Stops at the first error, like [`Clock::run`].
    pub async fn run_for(&mut self, iterations: usize) -> Result<Vec<TimeInfo>, ClockError> {
        let never = CancellationToken::new();
        let mut fired = Vec::new();
        for _ in 0..iterations {
            self.suspend(&never).await;
            if let Some(tick) = self.poll_once().await? {
                fired.push(tick);
            }
        }
        Ok(fired)
    }

    /// Sleeps for the configured interval. Returns `false` if cancelled meanwhile.
    async fn suspend(&self, token: &CancellationToken) -> bool {
        match self.cfg.sleep_interval() {
            Some(interval) => {
                let sleep = time::sleep(interval);
                tokio::pin!(sleep);
                select! {
                    _ = &mut sleep => true,
                    _ = token.cancelled() => false,
                }
            }
            None => {
                tokio::task::yield_now().await;
                !token.is_cancelled()
            }
        }
    }
}

impl std::fmt::Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock")
            .field("id", &self.id)
            .field("cfg", &self.cfg)
            .field("source", &self.source.name())
            .field("subs", &self.subs)
            .field("last", &self.last)
            .finish()
    }
}
