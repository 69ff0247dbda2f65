//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Provide a cloneable cancellation token flipped by the Ctrl+C listener.
//! - Define the `Cancelled` error that carries user cancellation through `anyhow::Result`.
//! - Race command futures against cancellation.
//!
//! Does NOT handle:
//! - Installing the signal handler (see `main`).
//!
//! Invariants:
//! - Once cancelled, a token remains cancelled forever.
//! - A cancelled run exits with 130 (128 + SIGINT).

use std::fmt;
use std::future::Future;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token shared between the signal listener and commands.
#[derive(Clone, Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Cancel token (idempotent).
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// The `notified()` future is created before the flag is checked so a
    /// concurrent `cancel()` cannot be missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Run `future` unless the token fires first.
    pub async fn run<F, T>(&self, future: F) -> anyhow::Result<T>
    where
        F: Future<Output = T>,
    {
        tokio::select! {
            value = future => Ok(value),
            _ = self.cancelled() => Err(Cancelled.into()),
        }
    }
}

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nProvisioning cancelled by user");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_completes_when_not_cancelled() {
        let token = CancellationToken::new();
        let value = token.run(async { 42 }).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_run_returns_cancelled_error() {
        let token = CancellationToken::new();
        token.cancel();

        let err = token
            .run(std::future::pending::<()>())
            .await
            .unwrap_err();

        assert!(is_cancelled_error(&err));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let token = CancellationToken::new();
        let clone = token.clone();
        token.cancel();
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
