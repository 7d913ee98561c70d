//! Clock events: the payload delivered on every second transition.
//!
//! ## Contents
//! - [`TimeInfo`] immutable hour/minute/second payload, created once per transition
//! - [`ClockId`] identity of the clock that dispatched the payload
//!
//! ## Quick reference
//! - **Publisher**: `Clock::poll_once` builds one `TimeInfo` per detected transition.
//! - **Consumers**: every registered [`Subscribe`](crate::Subscribe) implementation,
//!   which receives it by shared reference for the duration of the callback only.

mod tick;

pub use tick::{ClockId, TimeInfo};
