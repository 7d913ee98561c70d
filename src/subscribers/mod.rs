//! # Clock subscribers.
//!
//! This module provides the [`Subscribe`] trait, the ordered [`SubscriberSet`]
//! registry, and the built-in subscribers.
//!
//! ## Architecture
//! ```text
//! Clock::poll_once ── TimeInfo ──► SubscriberSet::dispatch
//!                                      │ (in registration order, awaited one by one)
//!                                      ├──► DisplayClock::on_tick   → "Current time: h:m:s"
//!                                      ├──► LogCurrentTime::on_tick → "Logging to file: h:m:s"
//!                                      └──► SubscribeFn / custom ...
//! ```
//!
//! ## Implementing custom subscribers
//! ```no_run
//! use async_trait::async_trait;
//! use tickcast::{ClockId, Subscribe, SubscriberError, TimeInfo};
//!
//! struct MinuteBell;
//!
//! #[async_trait]
//! impl Subscribe for MinuteBell {
//!     async fn on_tick(&self, _src: &ClockId, tick: &TimeInfo) -> Result<(), SubscriberError> {
//!         if tick.second() == 0 {
//!             println!("ding");
//!         }
//!         Ok(())
//!     }
//! }
//! ```

mod display;
mod log_time;
mod set;
pub(crate) mod sink;
mod subscribe;
mod subscribe_fn;

pub use display::DisplayClock;
pub use log_time::LogCurrentTime;
pub use set::SubscriberSet;
pub use sink::LineSink;
pub use subscribe::Subscribe;
pub use subscribe_fn::SubscribeFn;
