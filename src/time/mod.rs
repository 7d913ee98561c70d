//! Time sources sampled by the clock.
//!
//! The clock never reads the wall clock directly; it asks a [`TimeSource`] once per
//! iteration. This keeps the notifier deterministic under test.
//!
//! ## Contents
//! - [`TimeSource`] the sampling capability
//! - [`SystemTimeSource`] local wall-clock time (chrono)
//! - [`ScriptedSource`] replays a fixed sequence, then reports itself unavailable

mod scripted;
mod source;

pub use scripted::ScriptedSource;
pub use source::{SystemTimeSource, TimeSource};
