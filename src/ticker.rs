//! Clock ticker — recurring wall-clock sampling.
//!
//! DESIGN
//! ======
//! A background task wakes once per period, samples the clock, and pushes
//! the sample into the owning session's event channel. The session, not the
//! ticker, applies the sample, so ticks and user edits share one ordered
//! queue.
//!
//! LIFECYCLE
//! =========
//! The task handle lives in `Ticker`. `cancel` aborts the task and releases
//! the handle; calling it again is a no-op. Dropping a `Ticker` cancels it,
//! so no exit path leaves a timer running. The task also stops by itself
//! when the session's receiver is gone.
//!
//! Late ticks are delayed, never skipped or replayed in a burst
//! (`MissedTickBehavior::Delay`).

use std::sync::Arc;
use std::time::Duration;

use time::OffsetDateTime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::clock::Clock;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running tick task.
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
    period: Duration,
}

impl Ticker {
    /// Spawn the tick task. The first sample is taken one full `period` after
    /// start. Each sample is wrapped with `event` before it is sent.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<E, F>(clock: Arc<dyn Clock>, period: Duration, events: mpsc::UnboundedSender<E>, event: F) -> Self
    where
        E: Send + 'static,
        F: Fn(OffsetDateTime) -> E + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let sample = clock.now();
                trace!(%sample, "tick");
                if events.send(event(sample)).is_err() {
                    debug!("tick receiver closed; ticker exiting");
                    break;
                }
            }
        });
        debug!(period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX), "ticker started");
        Self { handle: Some(handle), period }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// `true` until `cancel` has been called.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop the tick task. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("ticker cancelled");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "ticker_test.rs"]
mod tests;
