//! # DisplayClock: prints the current time.
//!
//! ## Example output
//! ```text
//! Current time: 10:0:6
//! Current time: 10:0:7
//! ```

use async_trait::async_trait;

use crate::error::SubscriberError;
use crate::events::{ClockId, TimeInfo};
use crate::subscribers::{LineSink, Subscribe};

/// Renders each transition to a human-facing sink (stdout by default).
///
/// Stateless between invocations.
#[derive(Debug)]
pub struct DisplayClock {
    sink: LineSink,
}

impl DisplayClock {
    /// Writes to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(LineSink::stdout())
    }

    /// Writes to the given sink.
    #[must_use]
    pub fn with_sink(sink: LineSink) -> Self {
        Self { sink }
    }
}

impl Default for DisplayClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Subscribe for DisplayClock {
    async fn on_tick(&self, _source: &ClockId, tick: &TimeInfo) -> Result<(), SubscriberError> {
        self.sink.write_line(&format!("Current time: {tick}"))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "display-clock"
    }
}
