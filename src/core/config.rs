//! # Clock configuration.
//!
//! Provides [`ClockConfig`] centralized settings for a [`Clock`](crate::Clock).
//!
//! ## Sentinel values
//! - `interval = 0s` → no sleep between samples (the loop still yields to the runtime)

use std::time::Duration;

use crate::policies::FailurePolicy;

/// Configuration for a single clock.
///
/// ## Field semantics
/// - `name`: identity handed to subscribers as [`ClockId`](crate::ClockId)
/// - `interval`: suspension between two samples; bounds detection latency
/// - `failure`: what a failing subscriber does to the loop
#[derive(Clone, Debug)]
pub struct ClockConfig {
    /// Clock name, used as its identity and in logs.
    pub name: String,

    /// Sleep between samples.
    ///
    /// A transition is observed at most one `interval` (plus dispatch time) after
    /// it happens. `Duration::ZERO` disables the sleep.
    pub interval: Duration,

    /// Reaction to subscriber failures during dispatch.
    pub failure: FailurePolicy,
}

impl ClockConfig {
    /// Returns the sleep between samples as an `Option`.
    ///
    /// - `None` → sample back to back
    /// - `Some(d)` → sleep `d` before each sample
    #[inline]
    pub fn sleep_interval(&self) -> Option<Duration> {
        if self.interval == Duration::ZERO {
            None
        } else {
            Some(self.interval)
        }
    }
}

impl Default for ClockConfig {
    /// Default configuration:
    ///
    /// - `name = "clock"`
    /// - `interval = 100ms`
    /// - `failure = FailurePolicy::Propagate`
    fn default() -> Self {
        Self {
            name: "clock".to_string(),
            interval: Duration::from_millis(100),
            failure: FailurePolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ClockConfig::default();
        assert_eq!(cfg.name, "clock");
        assert_eq!(cfg.sleep_interval(), Some(Duration::from_millis(100)));
        assert_eq!(cfg.failure, FailurePolicy::Propagate);
    }

    #[test]
    fn test_zero_interval_means_no_sleep() {
        let cfg = ClockConfig {
            interval: Duration::ZERO,
            ..ClockConfig::default()
        };
        assert_eq!(cfg.sleep_interval(), None);
    }
}
