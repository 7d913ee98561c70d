use std::sync::Arc;

use crate::{
    core::{Clock, ClockConfig},
    events::TimeInfo,
    subscribers::{Subscribe, SubscriberSet},
    time::{SystemTimeSource, TimeSource},
};

/// Builder for constructing a [`Clock`] with subscribers already registered.
pub struct ClockBuilder {
    cfg: ClockConfig,
    source: Option<Box<dyn TimeSource>>,
    subscribers: Vec<Arc<dyn Subscribe>>,
    initial: Option<TimeInfo>,
}

impl ClockBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: ClockConfig) -> Self {
        Self {
            cfg,
            source: None,
            subscribers: Vec::new(),
            initial: None,
        }
    }

    /// Sets the time source. Defaults to [`SystemTimeSource`].
    pub fn with_source(mut self, source: impl TimeSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Appends one subscriber.
    pub fn with_subscriber(mut self, subscriber: Arc<dyn Subscribe>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Appends subscribers, keeping their order.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers.extend(subscribers);
        self
    }

    /// Seeds the stored time, so the first sample is compared against it instead of
    /// only priming the clock. `TimeInfo::midnight()` makes the first sample fire
    /// unless its second is `0`.
    pub fn with_initial(mut self, initial: TimeInfo) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Builds the clock.
    pub fn build(self) -> Clock {
        let source = self
            .source
            .unwrap_or_else(|| Box::new(SystemTimeSource::new()) as Box<dyn TimeSource>);
        Clock::from_parts(
            self.cfg,
            source,
            SubscriberSet::new(self.subscribers),
            self.initial,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscribers::{DisplayClock, LogCurrentTime};

    #[test]
    fn test_defaults_to_system_source() {
        let clock = ClockBuilder::new(ClockConfig::default()).build();
        assert!(format!("{clock:?}").contains("system"));
        assert!(clock.subscribers().is_empty());
        assert_eq!(clock.last_observed(), None);
    }

    #[test]
    fn test_keeps_subscriber_order() {
        let a: Arc<dyn Subscribe> = Arc::new(DisplayClock::new());
        let clock = ClockBuilder::new(ClockConfig::default())
            .with_subscriber(Arc::clone(&a))
            .with_subscribers(vec![Arc::new(LogCurrentTime::new()) as Arc<dyn Subscribe>, a])
            .with_initial(TimeInfo::midnight())
            .build();
        assert_eq!(
            clock.subscribers().names().collect::<Vec<_>>(),
            vec!["display-clock", "log-current-time", "display-clock"]
        );
        assert_eq!(clock.last_observed(), Some(TimeInfo::midnight()));
    }
}
