//! # tickcast
//!
//! **tickcast** is a small in-process notifier: a [`Clock`] samples a time source
//! at a fixed interval and, every time the second changes, hands a [`TimeInfo`]
//! to each registered [`Subscribe`] implementation, in registration order.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌──────────────┐
//!   │  TimeSource  │  SystemTimeSource (chrono) / ScriptedSource (replay)
//!   └──────┬───────┘
//!          │ sample() once per iteration
//!          ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Clock                                                        │
//! │  - last observed TimeInfo                                     │
//! │  - SubscriberSet (ordered registry, duplicates allowed)       │
//! │  - ClockConfig (interval, name, FailurePolicy)                │
//! └──────┬────────────────────────────────────────────────────────┘
//!        │ second changed → dispatch(&ClockId, &TimeInfo)
//!        ▼
//!   S1.on_tick() ──► S2.on_tick() ──► ... ──► SN.on_tick()
//!   (awaited one after another; the next sample waits for all of them)
//! ```
//!
//! ### Lifecycle
//! ```text
//! Clock::builder(cfg) ──► with_subscriber(..) ──► build() ──► run(token)
//!
//! loop {
//!   ├─► token cancelled ─► Ok(())
//!   ├─► sleep(interval) (cancellable)
//!   ├─► sample ─► Err ─► SourceUnavailable
//!   ├─► second changed? ─► dispatch to all subscribers
//!   │       └─ failure: Propagate ─► Err(SubscriberFailed) / Isolate ─► warn, continue
//!   └─► store sample
//! }
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                         |
//! |-------------------|----------------------------------------------------------|--------------------------------------------|
//! | **Subscriber API**| React to second transitions.                             | [`Subscribe`], [`SubscribeFn`]             |
//! | **Registry**      | Ordered fan-out with a failure policy.                   | [`SubscriberSet`], [`FailurePolicy`]       |
//! | **Notifier**      | Sampling loop with cancellation.                         | [`Clock`], [`ClockBuilder`]                |
//! | **Time**          | Injectable time sources.                                 | [`TimeSource`], [`SystemTimeSource`], [`ScriptedSource`] |
//! | **Errors**        | Typed errors for the loop and for subscribers.           | [`ClockError`], [`SubscriberError`]        |
//! | **Configuration** | Interval, name and failure handling.                     | [`ClockConfig`]                            |
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//! use tickcast::{Clock, ClockConfig, ClockId, ScriptedSource, SubscribeFn, SubscriberError, TimeInfo};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = ClockConfig { interval: Duration::ZERO, ..ClockConfig::default() };
//!     let source = ScriptedSource::from_triples([(10, 0, 5), (10, 0, 5), (10, 0, 6), (10, 1, 0)])?;
//!
//!     let seen = Arc::new(Mutex::new(Vec::new()));
//!     let sink = Arc::clone(&seen);
//!
//!     let mut clock = Clock::builder(cfg)
//!         .with_source(source)
//!         .with_subscriber(SubscribeFn::arc("recorder", move |_src: ClockId, tick: TimeInfo| {
//!             let sink = Arc::clone(&sink);
//!             async move {
//!                 sink.lock().unwrap().push(tick.to_string());
//!                 Ok::<_, SubscriberError>(())
//!             }
//!         }))
//!         .build();
//!
//!     clock.run_for(4).await?;
//!     assert_eq!(*seen.lock().unwrap(), vec!["10:0:6", "10:1:0"]);
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod policies;
mod subscribers;
mod time;

// ---- Public re-exports ----

pub use crate::core::{Clock, ClockBuilder, ClockConfig, wait_for_shutdown_signal};
pub use error::{ClockError, SubscriberError};
pub use events::{ClockId, TimeInfo};
pub use policies::FailurePolicy;
pub use subscribers::{
    DisplayClock, LineSink, LogCurrentTime, Subscribe, SubscribeFn, SubscriberSet,
};
pub use time::{ScriptedSource, SystemTimeSource, TimeSource};
