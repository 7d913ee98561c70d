//! # Function-backed subscriber (`SubscribeFn`)
//!
//! [`SubscribeFn`] wraps a closure `F: Fn(ClockId, TimeInfo) -> Fut`, producing a
//! fresh future per transition. Both arguments are cheap owned copies, so the
//! returned future can be `'static`. Shared state goes in an explicit `Arc<...>`
//! captured by the closure.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use tickcast::{ClockId, Subscribe, SubscribeFn, SubscriberError, TimeInfo};
//!
//! let s: Arc<dyn Subscribe> = SubscribeFn::arc("printer", |_src: ClockId, tick: TimeInfo| async move {
//!     println!("tick {tick}");
//!     Ok::<_, SubscriberError>(())
//! });
//! assert_eq!(s.name(), "printer");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SubscriberError;
use crate::events::{ClockId, TimeInfo};

use super::Subscribe;

/// Function-backed subscriber implementation.
pub struct SubscribeFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SubscribeFn<F> {
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`SubscribeFn::arc`] when you immediately register it.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the subscriber as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> std::fmt::Debug for SubscribeFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscribeFn").field("name", &self.name).finish()
    }
}

#[async_trait]
impl<F, Fut> Subscribe for SubscribeFn<F>
where
    F: Fn(ClockId, TimeInfo) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), SubscriberError>> + Send + 'static,
{
    async fn on_tick(&self, source: &ClockId, tick: &TimeInfo) -> Result<(), SubscriberError> {
        (self.f)(source.clone(), *tick).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
