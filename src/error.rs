//! Error types used by the clock and its subscribers.
//!
//! This module defines two main error enums:
//!
//! - [`ClockError`] errors raised by the notifier loop itself (time source,
//!   dispatch, payload construction).
//! - [`SubscriberError`] errors raised by an individual subscriber callback.
//!
//! Both types provide `as_label` for logs and stable matching in tests.

use std::io;
use thiserror::Error;

/// # Errors produced by the clock.
///
/// Any of these returned from [`Clock::run`](crate::Clock::run) terminates the loop.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ClockError {
    /// The time source could not be sampled.
    #[error("time source '{source_name}' unavailable: {reason}")]
    SourceUnavailable {
        /// Name reported by the time source.
        source_name: String,
        /// Why sampling failed.
        reason: String,
    },

    /// A subscriber returned an error during dispatch (propagating policy only).
    #[error("subscriber '{subscriber}' failed: {error}")]
    SubscriberFailed {
        /// Name of the failing subscriber.
        subscriber: String,
        /// The error returned by the subscriber.
        #[source]
        error: SubscriberError,
    },

    /// A subscriber panicked during dispatch and the panic was caught.
    #[error("subscriber '{subscriber}' panicked: {info}")]
    SubscriberPanicked {
        /// Name of the panicking subscriber.
        subscriber: String,
        /// Panic message, if it was a string.
        info: String,
    },

    /// Time components out of range.
    #[error("invalid time {hour}:{minute}:{second}")]
    InvalidTime {
        /// Rejected hour.
        hour: u32,
        /// Rejected minute.
        minute: u32,
        /// Rejected second.
        second: u32,
    },
}

impl ClockError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use tickcast::ClockError;
    ///
    /// let err = ClockError::SourceUnavailable { source_name: "system".into(), reason: "gone".into() };
    /// assert_eq!(err.as_label(), "clock_source_unavailable");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ClockError::SourceUnavailable { .. } => "clock_source_unavailable",
            ClockError::SubscriberFailed { .. } => "clock_subscriber_failed",
            ClockError::SubscriberPanicked { .. } => "clock_subscriber_panicked",
            ClockError::InvalidTime { .. } => "clock_invalid_time",
        }
    }

    /// True if the error originated in a subscriber rather than the clock.
    pub fn is_subscriber_fault(&self) -> bool {
        matches!(
            self,
            ClockError::SubscriberFailed { .. } | ClockError::SubscriberPanicked { .. }
        )
    }
}

/// # Errors produced by subscriber callbacks.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SubscriberError {
    /// The output sink rejected the write.
    #[error("sink write failed: {0}")]
    Sink(#[from] io::Error),

    /// Any other failure reported by the subscriber.
    #[error("{error}")]
    Failed {
        /// The underlying error message.
        error: String,
    },
}

impl SubscriberError {
    /// Convenience constructor for [`SubscriberError::Failed`].
    pub fn failed(error: impl Into<String>) -> Self {
        SubscriberError::Failed {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            SubscriberError::Sink(_) => "subscriber_sink",
            SubscriberError::Failed { .. } => "subscriber_failed",
        }
    }
}
