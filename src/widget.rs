//! Widget session — owns the clock state, the ticker, and the event loop.
//!
//! ARCHITECTURE
//! ============
//! Mounting a widget spawns one session task that exclusively owns
//! `ClockState`. Ticker samples and user edits travel on a single unbounded
//! channel and are applied in arrival order, one at a time, each to
//! completion. After every state-changing event the session captures a
//! `Snapshot` and publishes it on a `watch` channel, which is how views see
//! the live zone times.
//!
//! LIFECYCLE
//! =========
//! Active: ticker running, edits accepted. `unmount` cancels the ticker,
//! aborts the session task, and waits for it to finish, so once it returns
//! no further snapshot is published. Dropping a `Widget` without `unmount`
//! performs the same cancellation without waiting. There is no way back
//! from torn-down; `unmount` consumes the handle.
//!
//! PRINTING
//! ========
//! A print request is answered inside the event loop: the report is
//! formatted from the current state, logged, handed to the notifier, and
//! returned to the caller.

use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::config::WidgetConfig;
use crate::notify::{Notifier, StdoutNotifier};
use crate::report::format_report;
use crate::state::{ClockState, Snapshot};
use crate::ticker::Ticker;
use crate::zone::TimeZoneEntry;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// The session event loop is no longer running.
    #[error("widget session {0} is torn down")]
    TornDown(Uuid),
}

// =============================================================================
// CONTEXT
// =============================================================================

/// Collaborators injected into a widget at mount time.
#[derive(Clone)]
pub struct WidgetContext {
    pub config: WidgetConfig,
    pub clock: Arc<dyn Clock>,
    pub notifier: Arc<dyn Notifier>,
}

impl WidgetContext {
    /// Context backed by the system clock and stdout alerts.
    #[must_use]
    pub fn new(config: WidgetConfig) -> Self {
        Self { config, clock: Arc::new(SystemClock), notifier: Arc::new(StdoutNotifier) }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }
}

impl Default for WidgetContext {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

// =============================================================================
// EVENTS
// =============================================================================

#[derive(Debug)]
enum Event {
    Tick(OffsetDateTime),
    SetDate(String),
    SetTime(String),
    Print(oneshot::Sender<String>),
}

// =============================================================================
// WIDGET
// =============================================================================

/// Handle to one mounted widget session.
pub struct Widget {
    session_id: Uuid,
    events: mpsc::UnboundedSender<Event>,
    snapshots: watch::Receiver<Snapshot>,
    ticker: Ticker,
    session: Option<JoinHandle<()>>,
}

impl Widget {
    /// Start a session with the built-in defaults.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new() -> Self {
        Self::mount(WidgetContext::default())
    }

    /// Start a session: take the first clock sample, publish the initial
    /// snapshot, and start the ticker.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn mount(context: WidgetContext) -> Self {
        let WidgetContext { config, clock, notifier } = context;
        let session_id = Uuid::new_v4();

        let state = ClockState::new(clock.now(), config.local_offset);
        let zones: Arc<[TimeZoneEntry]> = config.zones.into();
        let (snapshot_tx, snapshots) = watch::channel(Snapshot::capture(&state, &zones));
        let (events, events_rx) = mpsc::unbounded_channel();

        let session = tokio::spawn(run_session(session_id, state, zones.clone(), events_rx, snapshot_tx, notifier));
        let ticker = Ticker::start(clock, config.tick_interval, events.clone(), Event::Tick);

        info!(%session_id, zones = zones.len(), tick_interval = ?ticker.period(), "widget mounted");
        Self { session_id, events, snapshots, ticker, session: Some(session) }
    }

    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that is notified after every applied event.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Set the selected date from raw `YYYY-MM-DD` input. Malformed input is
    /// accepted and shown as `Invalid Date`.
    pub fn set_date(&self, raw: impl Into<String>) -> Result<(), WidgetError> {
        self.send(Event::SetDate(raw.into()))
    }

    /// Pin the selected time to raw user input.
    pub fn set_time(&self, raw: impl Into<String>) -> Result<(), WidgetError> {
        self.send(Event::SetTime(raw.into()))
    }

    /// Format the report from the current state, log it, surface it through
    /// the notifier, and return it.
    pub async fn print(&self) -> Result<String, WidgetError> {
        let (reply, report) = oneshot::channel();
        self.send(Event::Print(reply))?;
        report.await.map_err(|_| WidgetError::TornDown(self.session_id))
    }

    /// Tear the session down. No snapshot is published after this returns.
    pub async fn unmount(mut self) {
        self.ticker.cancel();
        if let Some(session) = self.session.take() {
            session.abort();
            let _ = session.await;
        }
        info!(session_id = %self.session_id, "widget unmounted");
    }

    fn send(&self, event: Event) -> Result<(), WidgetError> {
        self.events.send(event).map_err(|_| WidgetError::TornDown(self.session_id))
    }
}

impl Default for Widget {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Widget {
    fn drop(&mut self) {
        self.ticker.cancel();
        if let Some(session) = self.session.take() {
            session.abort();
            debug!(session_id = %self.session_id, "widget dropped without unmount");
        }
    }
}

// =============================================================================
// SESSION LOOP
// =============================================================================

async fn run_session(
    session_id: Uuid,
    mut state: ClockState,
    zones: Arc<[TimeZoneEntry]>,
    mut events: mpsc::UnboundedReceiver<Event>,
    snapshots: watch::Sender<Snapshot>,
    notifier: Arc<dyn Notifier>,
) {
    while let Some(event) = events.recv().await {
        match event {
            Event::Tick(sample) => {
                if !state.record_tick(sample) {
                    debug!(%session_id, %sample, current = %state.current_instant(), "ignoring clock regression");
                    continue;
                }
            }
            Event::SetDate(raw) => {
                state.set_date(&raw);
                debug!(%session_id, input = %raw, "selected date changed");
            }
            Event::SetTime(raw) => {
                let was_live = !state.time_pinned();
                state.set_time(&raw);
                if was_live {
                    info!(%session_id, input = %raw, "selected time pinned; live updates stop");
                } else {
                    debug!(%session_id, input = %raw, "selected time changed");
                }
            }
            Event::Print(reply) => {
                let report = print_report(session_id, &state, &zones, notifier.as_ref());
                let _ = reply.send(report);
                continue;
            }
        }
        snapshots.send_replace(Snapshot::capture(&state, &zones));
    }
    debug!(%session_id, "session event loop finished");
}

fn print_report(session_id: Uuid, state: &ClockState, zones: &[TimeZoneEntry], notifier: &dyn Notifier) -> String {
    let report = format_report(&Snapshot::capture(state, zones));
    info!(%session_id, "printed selected time\n{report}");
    notifier.alert(&report);
    report
}

#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;
