//! # Subscriber trait.
//!
//! `Subscribe` is the registration contract: anything that wants to hear about
//! second transitions implements it and is registered on a [`Clock`](crate::Clock).
//!
//! ## Contract
//! - Called **inline** by the clock loop; the clock does not sample again until
//!   every subscriber has returned for the current transition.
//! - Subscribers run in registration order. Do not assume you are the only (or the
//!   first) subscriber.
//! - The payload is borrowed for the duration of the call only.
//! - Return `Err` to report a failure; the clock's
//!   [`FailurePolicy`](crate::FailurePolicy) decides whether it stops the loop.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use tickcast::{ClockId, Subscribe, SubscriberError, TimeInfo};
//!
//! struct Beeper;
//!
//! #[async_trait]
//! impl Subscribe for Beeper {
//!     async fn on_tick(&self, _source: &ClockId, tick: &TimeInfo) -> Result<(), SubscriberError> {
//!         if tick.second() == 0 {
//!             // beep once a minute
//!         }
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "beeper" }
//! }
//! ```

use async_trait::async_trait;

use crate::error::SubscriberError;
use crate::events::{ClockId, TimeInfo};

/// Receiver of second-transition notifications.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles one transition.
    ///
    /// # Parameters
    /// - `source`: identity of the dispatching clock
    /// - `tick`: the freshly sampled time (does not transfer ownership)
    async fn on_tick(&self, source: &ClockId, tick: &TimeInfo) -> Result<(), SubscriberError>;

    /// Human-readable name (for logs and errors).
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
