//! # LogCurrentTime: appends the current time to a log sink.
//!
//! Meant for a durable destination; [`LogCurrentTime::append_to`] opens a file in
//! append mode. [`LogCurrentTime::new`] writes to stdout instead, which is handy
//! for demos.
//!
//! ## Example output
//! ```text
//! Logging to file: 10:0:6
//! ```

use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::error::SubscriberError;
use crate::events::{ClockId, TimeInfo};
use crate::subscribers::{LineSink, Subscribe};

/// Appends each transition to a sink. Stateless between invocations.
#[derive(Debug)]
pub struct LogCurrentTime {
    sink: LineSink,
}

impl LogCurrentTime {
    /// Writes to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(LineSink::stdout())
    }

    /// Appends to the file at `path`, creating it if needed.
    pub fn append_to(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::with_sink(LineSink::append_to(path)?))
    }

    /// Writes to the given sink.
    #[must_use]
    pub fn with_sink(sink: LineSink) -> Self {
        Self { sink }
    }
}

impl Default for LogCurrentTime {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Subscribe for LogCurrentTime {
    async fn on_tick(&self, _source: &ClockId, tick: &TimeInfo) -> Result<(), SubscriberError> {
        self.sink.write_line(&format!("Logging to file: {tick}"))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "log-current-time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscribers::sink::testing::SharedBuf;

    #[tokio::test]
    async fn test_logs_line() {
        let buf = SharedBuf::default();
        let lc = LogCurrentTime::with_sink(LineSink::new(buf.clone()));

        lc.on_tick(&ClockId::new("c"), &TimeInfo::new(23, 59, 59).unwrap())
            .await
            .unwrap();

        assert_eq!(buf.contents(), "Logging to file: 23:59:59\n");
        assert_eq!(lc.name(), "log-current-time");
    }

    #[tokio::test]
    async fn test_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clock.log");

        let lc = LogCurrentTime::append_to(&path).unwrap();
        lc.on_tick(&ClockId::new("c"), &TimeInfo::new(1, 2, 3).unwrap())
            .await
            .unwrap();
        drop(lc);

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Logging to file: 1:2:3\n"
        );
    }
}
