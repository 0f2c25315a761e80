//! Time zones and the zone converter.
//!
//! DESIGN
//! ======
//! A zone carries a textual offset label (`UTC-8`, `UTC+9`, ...). The label
//! is resolved to whole hours through a fixed map; a label outside the map
//! resolves to UTC. There is no DST and no IANA database, so an entry's
//! offset never changes for the lifetime of the entry.
//!
//! TRADE-OFFS
//! ==========
//! Conversion only yields the wall-clock `HH:MM` in the target zone. A zone
//! whose local time falls on the previous or next calendar day carries no
//! day marker.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Offset labels the converter understands. Anything else means UTC.
const OFFSET_MAP: &[(&str, i32)] = &[("UTC-8", -8), ("UTC-5", -5), ("UTC+0", 0), ("UTC+9", 9)];

// =============================================================================
// TIME ZONE ENTRY
// =============================================================================

/// One selectable zone. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneEntry {
    /// Stable short key, unique within a zone set.
    pub id: String,
    /// Human label, e.g. `"Pacific"`.
    #[serde(rename = "name")]
    pub display_name: String,
    pub city: String,
    /// Offset label, e.g. `"UTC-8"`.
    pub offset: String,
}

impl TimeZoneEntry {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        city: impl Into<String>,
        offset: impl Into<String>,
    ) -> Self {
        Self { id: id.into(), display_name: display_name.into(), city: city.into(), offset: offset.into() }
    }

    /// Whole hours from UTC for this entry's offset label.
    #[must_use]
    pub fn utc_offset_hours(&self) -> i32 {
        offset_hours_for_label(&self.offset)
    }

    /// Wall-clock `HH:MM` for this zone at `instant`.
    #[must_use]
    pub fn time_at(&self, instant: OffsetDateTime) -> String {
        time_in_zone(instant, self.utc_offset_hours())
    }
}

/// The built-in zone set used when no zones are configured.
#[must_use]
pub fn default_zones() -> Vec<TimeZoneEntry> {
    vec![
        TimeZoneEntry::new("pst", "Pacific", "San Francisco", "UTC-8"),
        TimeZoneEntry::new("est", "Eastern", "New York", "UTC-5"),
        TimeZoneEntry::new("gmt", "London", "London", "UTC+0"),
        TimeZoneEntry::new("jst", "Tokyo", "Tokyo", "UTC+9"),
        TimeZoneEntry::new("kst", "Seoul", "Seoul", "UTC+9"),
    ]
}

// =============================================================================
// CONVERTER
// =============================================================================

/// Resolve an offset label to whole hours. Unknown labels resolve to `0`.
#[must_use]
pub fn offset_hours_for_label(label: &str) -> i32 {
    OFFSET_MAP
        .iter()
        .find(|(known, _)| *known == label)
        .map_or(0, |(_, hours)| *hours)
}

/// Render `instant` as seen at `offset_hours` from UTC, as zero-padded `HH:MM`.
///
/// The instant's own offset is irrelevant: the computation starts from its
/// UTC timestamp. The result wraps modulo one day.
#[must_use]
pub fn time_in_zone(instant: OffsetDateTime, offset_hours: i32) -> String {
    let shifted = instant.unix_timestamp() + i64::from(offset_hours) * SECONDS_PER_HOUR;
    let seconds_of_day = shifted.rem_euclid(SECONDS_PER_DAY);
    let hour = seconds_of_day / SECONDS_PER_HOUR;
    let minute = (seconds_of_day % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    format!("{hour:02}:{minute:02}")
}

#[cfg(test)]
#[path = "zone_test.rs"]
mod tests;
