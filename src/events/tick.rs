//! # Second-transition payload.
//!
//! [`TimeInfo`] is a plain `Copy` value: each subscriber sees the same instance by
//! reference during a dispatch and cannot keep it beyond the callback without
//! copying it out.
//!
//! ## Example
//! ```rust
//! use tickcast::TimeInfo;
//!
//! let t = TimeInfo::new(10, 0, 5).unwrap();
//! assert_eq!((t.hour(), t.minute(), t.second()), (10, 0, 5));
//! assert_eq!(t.to_string(), "10:0:5");
//! assert!(TimeInfo::new(24, 0, 0).is_err());
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::Timelike;

use crate::error::ClockError;

/// Hour/minute/second observed by the clock at a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeInfo {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeInfo {
    /// Builds a payload, rejecting components outside `0..24`, `0..60`, `0..60`.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, ClockError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ClockError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
        })
    }

    /// `0:0:0`.
    pub const fn midnight() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Converts any chrono time value. Sub-second precision is dropped.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            second: t.second().min(59) as u8,
        }
    }

    /// Hour in `0..24`.
    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute in `0..60`.
    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second in `0..60`.
    #[inline]
    pub fn second(&self) -> u8 {
        self.second
    }
}

impl fmt::Display for TimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hour, self.minute, self.second)
    }
}

/// Identity of a clock, handed to every subscriber alongside the payload.
///
/// Cheap to clone (`Arc<str>` inside).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockId(Arc<str>);

impl ClockId {
    /// Creates an identity from a name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The clock name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_bounds() {
        assert!(TimeInfo::new(23, 59, 59).is_ok());
        assert!(TimeInfo::new(0, 0, 0).is_ok());

        let err = TimeInfo::new(12, 60, 0).unwrap_err();
        assert_eq!(err.as_label(), "clock_invalid_time");
        assert!(TimeInfo::new(12, 0, 60).is_err());
        assert!(TimeInfo::new(24, 0, 0).is_err());
    }

    #[test]
    fn test_from_chrono() {
        let t = NaiveTime::from_hms_opt(7, 8, 9).unwrap();
        assert_eq!(TimeInfo::from_timelike(&t), TimeInfo::new(7, 8, 9).unwrap());
    }

    #[test]
    fn test_display_is_unpadded() {
        assert_eq!(TimeInfo::new(9, 5, 0).unwrap().to_string(), "9:5:0");
        assert_eq!(TimeInfo::midnight().to_string(), "0:0:0");
    }

    #[test]
    fn test_clock_id() {
        let id = ClockId::new("main");
        assert_eq!(id.as_str(), "main");
        assert_eq!(id.clone(), id);
        assert_eq!(format!("{id}"), "main");
    }
}
