//! Clock core: configuration, the polling loop, and shutdown wiring.
//!
//! The public API from this module is [`Clock`], built directly or through
//! [`ClockBuilder`], configured by [`ClockConfig`].
//!
//! Internal modules:
//! - [`clock`]: sampling, transition detection and dispatch loop;
//! - [`builder`]: assembles a clock with source and subscribers;
//! - [`config`]: interval, name and failure policy;
//! - [`shutdown`]: cross-platform shutdown signal handling.

mod builder;
mod clock;
mod config;
mod shutdown;

pub use builder::ClockBuilder;
pub use clock::Clock;
pub use config::ClockConfig;
pub use shutdown::wait_for_shutdown_signal;
