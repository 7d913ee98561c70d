//! # Stopping the clock from outside the process.
//!
//! The clock loop has no exit of its own; the runner cancels its token once
//! [`wait_for_shutdown_signal`] resolves.
//!
//! | Platform | Signals that stop the clock   |
//! |----------|-------------------------------|
//! | Unix     | `SIGINT`, `SIGTERM`, `SIGQUIT` |
//! | other    | Ctrl-C                         |

/// Resolves on the first of `SIGINT`, `SIGTERM` or `SIGQUIT`.
///
/// Handlers are installed on each call. `Err` means they could not be installed,
/// in which case the caller should keep the clock running rather than cancel it.
#[cfg(unix)]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    use futures::future::select_all;
    use tokio::signal::unix::{SignalKind, signal};

    let kinds = [
        SignalKind::interrupt(),
        SignalKind::terminate(),
        SignalKind::quit(),
    ];
    let mut streams = kinds
        .into_iter()
        .map(signal)
        .collect::<std::io::Result<Vec<_>>>()?;

    select_all(streams.iter_mut().map(|s| Box::pin(s.recv()))).await;
    Ok(())
}

/// Resolves on Ctrl-C. `Err` means the handler could not be installed.
#[cfg(not(unix))]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
