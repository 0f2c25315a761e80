//! Widget session state.
//!
//! DESIGN
//! ======
//! `ClockState` belongs to exactly one widget session and is only touched by
//! that session's event loop, one event at a time. The ticker is the only
//! writer of `current_instant`; user input is the only writer of the selected
//! date and time. Views never read `ClockState` directly: after every event
//! the session captures an immutable [`Snapshot`] and publishes it.
//!
//! EDGE CASES
//! ==========
//! - A tick older than the current instant is ignored (wall clock stepped
//!   backwards), keeping `current_instant` non-decreasing.
//! - A date edit that is not `YYYY-MM-DD` is kept and shown as `Invalid Date`.
//! - A time edit is kept verbatim and pins the selected time; later ticks no
//!   longer move it.

use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::zone::{TimeZoneEntry, time_in_zone};

pub const INVALID_DATE: &str = "Invalid Date";

// =============================================================================
// SELECTED DATE / TIME
// =============================================================================

/// User-selected calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedDate {
    Valid(Date),
    /// Raw input that did not parse as `YYYY-MM-DD`.
    Invalid(String),
}

impl SelectedDate {
    /// Accept raw `YYYY-MM-DD` input. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")) {
            Ok(date) => Self::Valid(date),
            Err(_) => Self::Invalid(raw.to_owned()),
        }
    }

    /// Short en-US form, e.g. `Mon, Jan 1, 2024`.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Valid(date) => date
                .format(format_description!("[weekday repr:short], [month repr:short] [day padding:none], [year]"))
                .unwrap_or_else(|_| INVALID_DATE.to_owned()),
            Self::Invalid(_) => INVALID_DATE.to_owned(),
        }
    }
}

/// User-selected time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedTime {
    /// Follows the live clock until the user edits it.
    Live,
    /// Set by the user; ticks never overwrite it.
    Pinned(String),
}

// =============================================================================
// CLOCK STATE
// =============================================================================

/// Mutable state of one widget session.
#[derive(Debug, Clone)]
pub struct ClockState {
    current_instant: OffsetDateTime,
    local_offset: UtcOffset,
    selected_date: SelectedDate,
    selected_time: SelectedTime,
}

impl ClockState {
    /// Build the initial state from the first clock sample. The selected date
    /// starts at the host-local date of that sample.
    #[must_use]
    pub fn new(initial: OffsetDateTime, local_offset: UtcOffset) -> Self {
        Self {
            current_instant: initial,
            local_offset,
            selected_date: SelectedDate::Valid(initial.to_offset(local_offset).date()),
            selected_time: SelectedTime::Live,
        }
    }

    #[must_use]
    pub fn current_instant(&self) -> OffsetDateTime {
        self.current_instant
    }

    #[must_use]
    pub fn selected_date(&self) -> &SelectedDate {
        &self.selected_date
    }

    /// Apply a ticker sample. Returns `false` when the sample is older than
    /// the current instant and was ignored.
    pub fn record_tick(&mut self, sample: OffsetDateTime) -> bool {
        if sample < self.current_instant {
            return false;
        }
        self.current_instant = sample;
        true
    }

    pub fn set_date(&mut self, raw: &str) {
        self.selected_date = SelectedDate::parse(raw);
    }

    pub fn set_time(&mut self, raw: &str) {
        self.selected_time = SelectedTime::Pinned(raw.to_owned());
    }

    /// `true` once the user has edited the time.
    #[must_use]
    pub fn time_pinned(&self) -> bool {
        matches!(self.selected_time, SelectedTime::Pinned(_))
    }

    /// Selected time as displayed: the pinned value, or the live host-local
    /// `HH:MM` of the current instant.
    #[must_use]
    pub fn selected_time(&self) -> String {
        match &self.selected_time {
            SelectedTime::Pinned(raw) => raw.clone(),
            SelectedTime::Live => time_in_zone(self.current_instant, i32::from(self.local_offset.whole_hours())),
        }
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// One zone card as a view renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneCard {
    pub id: String,
    pub name: String,
    pub city: String,
    pub offset: String,
    /// `HH:MM` in this zone at the snapshot's instant.
    pub time: String,
}

/// Derived display values published after every session event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub current_instant: OffsetDateTime,
    /// Display form of the selected date.
    pub selected_date: String,
    pub selected_time: String,
    pub zones: Vec<ZoneCard>,
}

impl Snapshot {
    #[must_use]
    pub fn capture(state: &ClockState, zones: &[TimeZoneEntry]) -> Self {
        let instant = state.current_instant();
        Self {
            current_instant: instant,
            selected_date: state.selected_date().display(),
            selected_time: state.selected_time(),
            zones: zones
                .iter()
                .map(|zone| ZoneCard {
                    id: zone.id.clone(),
                    name: zone.display_name.clone(),
                    city: zone.city.clone(),
                    offset: zone.offset.clone(),
                    time: zone.time_at(instant),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
