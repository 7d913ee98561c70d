//! # ScriptedSource: deterministic replay of samples.
//!
//! Returns the configured samples in order, one per call. Once the script is
//! exhausted every further call fails with [`ClockError::SourceUnavailable`],
//! which ends a running clock. Tests use this to bound the otherwise endless loop.
//!
//! ## Example
//! ```rust
//! use tickcast::{ScriptedSource, TimeSource};
//!
//! let src = ScriptedSource::from_triples([(10, 0, 5), (10, 0, 6)]).unwrap();
//! assert_eq!(src.sample().unwrap().second(), 5);
//! assert_eq!(src.sample().unwrap().second(), 6);
//! assert!(src.sample().is_err());
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::ClockError;
use crate::events::TimeInfo;

use super::TimeSource;

/// Replays a fixed list of samples.
#[derive(Debug)]
pub struct ScriptedSource {
    samples: Mutex<VecDeque<TimeInfo>>,
}

impl ScriptedSource {
    /// Creates a source replaying `samples` in order.
    pub fn new(samples: impl IntoIterator<Item = TimeInfo>) -> Self {
        Self {
            samples: Mutex::new(samples.into_iter().collect()),
        }
    }

    /// Creates a source from raw `(hour, minute, second)` triples.
    ///
    /// Fails on the first out-of-range triple.
    pub fn from_triples(
        triples: impl IntoIterator<Item = (u32, u32, u32)>,
    ) -> Result<Self, ClockError> {
        let samples = triples
            .into_iter()
            .map(|(h, m, s)| TimeInfo::new(h, m, s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(samples))
    }

    /// Samples left before the source reports itself unavailable.
    pub fn remaining(&self) -> usize {
        self.samples.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl TimeSource for ScriptedSource {
    fn sample(&self) -> Result<TimeInfo, ClockError> {
        let mut queue = self.samples.lock().map_err(|_| ClockError::SourceUnavailable {
            source_name: self.name().to_string(),
            reason: "script lock poisoned".to_string(),
        })?;
        queue.pop_front().ok_or_else(|| ClockError::SourceUnavailable {
            source_name: self.name().to_string(),
            reason: "script exhausted".to_string(),
        })
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order_then_fails() {
        let src = ScriptedSource::from_triples([(1, 2, 3), (1, 2, 4)]).unwrap();
        assert_eq!(src.remaining(), 2);
        assert_eq!(src.sample().unwrap(), TimeInfo::new(1, 2, 3).unwrap());
        assert_eq!(src.sample().unwrap(), TimeInfo::new(1, 2, 4).unwrap());
        assert_eq!(src.remaining(), 0);

        let err = src.sample().unwrap_err();
        assert_eq!(err.as_label(), "clock_source_unavailable");
        assert!(err.to_string().contains("script exhausted"));
    }

    #[test]
    fn test_rejects_invalid_triple() {
        assert!(ScriptedSource::from_triples([(0, 0, 0), (0, 61, 0)]).is_err());
    }

    #[test]
    fn test_empty_script_is_unavailable() {
        let src = ScriptedSource::new(Vec::new());
        assert!(src.sample().is_err());
    }
}
