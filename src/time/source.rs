//! # Time source capability.

use chrono::Local;

use crate::error::ClockError;
use crate::events::TimeInfo;

/// Samples the current hour/minute/second.
///
/// The clock calls [`sample`](TimeSource::sample) exactly once per loop iteration.
/// An `Err` aborts [`Clock::run`](crate::Clock::run).
pub trait TimeSource: Send + Sync {
    /// Takes one sample.
    fn sample(&self) -> Result<TimeInfo, ClockError>;

    /// Human-readable name (for logs and errors).
    fn name(&self) -> &str {
        "time-source"
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn sample(&self) -> Result<TimeInfo, ClockError> {
        (**self).sample()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Local wall-clock time via [`chrono::Local`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl SystemTimeSource {
    /// Construct a new [`SystemTimeSource`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemTimeSource {
    fn sample(&self) -> Result<TimeInfo, ClockError> {
        Ok(TimeInfo::from_timelike(&Local::now()))
    }

    fn name(&self) -> &str {
        "system"
    }
}
