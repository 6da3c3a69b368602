//! Background task spawning with panic reporting.
//!
//! A plain `tokio::spawn` swallows panics into a `JoinHandle` nobody awaits;
//! tasks spawned through here report theirs back to the event loop so the
//! status bar can surface them.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::sync::mpsc;

use crate::app::AppEvent;

/// Spawn a background task that sends [`AppEvent::TaskPanicked`] on panic.
pub(super) fn spawn_reporting<F>(task: &'static str, event_tx: &mpsc::Sender<AppEvent>, fut: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let tx = event_tx.clone();
    tokio::spawn(async move {
        if let Err(panic) = AssertUnwindSafe(fut).catch_unwind().await {
            let error = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(task, error = %error, "Background task panicked");
            if tx.send(AppEvent::TaskPanicked { task, error }).await.is_err() {
                tracing::debug!(task, "Panic report dropped (receiver closed)");
            }
        }
    });
}
