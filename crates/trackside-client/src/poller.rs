//! Cancellable periodic fetching with an in-flight guard.
//!
//! A poller runs a fetch on a fixed interval and delivers every outcome,
//! success or failure, through a bounded channel. The guard guarantees at
//! most one outstanding request per poller: a tick that fires while a prior
//! request is still running is skipped, not queued, so a slow server can
//! never build up a backlog of requests. There is no backoff and no circuit
//! breaking; a failed tick is reported and the schedule continues.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::mpsc::{self, Receiver};
use tokio::time::MissedTickBehavior;

use crate::NetworkError;

/// Handle for stopping a running poller.
///
/// Cancellation is cooperative: the poll loop exits at its next tick and an
/// in-flight request is not aborted — its result is discarded instead of
/// being delivered.
#[derive(Debug, Clone)]
pub struct PollHandle {
    cancelled: Arc<AtomicBool>,
}

impl PollHandle {
    /// Stops future ticks. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Starts polling `fetch` every `interval` on the current tokio runtime.
///
/// Outcomes arrive on the returned receiver in tick order. The receiver
/// closes once the poller has been cancelled and the last in-flight request
/// (if any) has settled.
///
/// Panics when `interval` is zero; the timers this backs are configured in
/// whole seconds and zero means "disabled" at the configuration layer.
pub fn start<T, F, Fut>(
    interval: Duration,
    fetch: F,
) -> (PollHandle, Receiver<Result<T, NetworkError>>)
where
    T: Send + 'static,
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, NetworkError>> + Send + 'static,
{
    assert!(!interval.is_zero(), "poll interval must be positive");

    let cancelled = Arc::new(AtomicBool::new(false));
    let in_flight = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel(16);

    let loop_cancelled = cancelled.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // the first interval tick fires immediately; that is the initial load
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if loop_cancelled.load(Ordering::SeqCst) {
                break;
            }
            if in_flight.swap(true, Ordering::SeqCst) {
                log::debug!("Poll tick skipped: previous request still in flight");
                continue;
            }

            let future = fetch();
            let tx = tx.clone();
            let in_flight = in_flight.clone();
            let cancelled = loop_cancelled.clone();
            tokio::spawn(async move {
                let outcome = future.await;
                in_flight.store(false, Ordering::SeqCst);
                if cancelled.load(Ordering::SeqCst) {
                    // cancelled while the request was outstanding
                    return;
                }
                let _ = tx.send(outcome).await;
            });
        }
    });

    (PollHandle { cancelled }, rx)
}
