//! # tickcast runner
//!
//! Wires one [`Clock`] on the system time to the two built-in subscribers and runs
//! it until the process receives a termination signal.
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run
//! ```

use std::sync::Arc;

use anyhow::Context;
use env_logger::Env;
use log::{error, info};
use tokio_util::sync::CancellationToken;

use tickcast::{
    Clock, ClockConfig, DisplayClock, LogCurrentTime, SystemTimeSource, wait_for_shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("tickcast v{}", env!("CARGO_PKG_VERSION"));

    let mut clock = Clock::builder(ClockConfig::default())
        .with_source(SystemTimeSource::new())
        .build();

    let display = Arc::new(DisplayClock::new());
    clock.register(display);

    let logger = Arc::new(LogCurrentTime::new());
    clock.register(logger);

    let token = CancellationToken::new();
    let on_signal = token.clone();
    tokio::spawn(async move {
        match wait_for_shutdown_signal().await {
            Ok(()) => {
                info!("shutdown requested");
                on_signal.cancel();
            }
            Err(e) => error!("failed to install signal handlers: {e}"),
        }
    });

    clock
        .run(token)
        .await
        .with_context(|| format!("clock '{}' stopped", clock.id()))?;

    info!("bye");
    Ok(())
}
