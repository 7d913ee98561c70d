//! Dispatch policies.
//!
//! ## Contents
//! - [`FailurePolicy`] what happens when a subscriber fails mid-dispatch
//!
//! ## Quick wiring
//! ```text
//! ClockConfig { failure: FailurePolicy, .. }
//!      └─► Clock::poll_once → SubscriberSet::dispatch(source, tick, failure)
//! ```
//!
//! ## Defaults
//! - `FailurePolicy::Propagate`: a failing subscriber terminates `Clock::run`.

mod failure;

pub use failure::FailurePolicy;
