//! Widget configuration parsed from environment variables.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use time::UtcOffset;
use tracing::warn;

use crate::zone::{TimeZoneEntry, default_zones};

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while building a [`WidgetConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The zones file could not be read.
    #[error("failed to read zones file {path}: {source}")]
    ZonesRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The zones file is not a JSON array of zones.
    #[error("failed to parse zones file {path}: {source}")]
    ZonesParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two zones in one set share an id.
    #[error("duplicate zone id: {0}")]
    DuplicateZoneId(String),

    /// The host-local offset is not a representable UTC offset.
    #[error("local offset out of range: {0} hours")]
    LocalOffsetOutOfRange(i8),
}

// =============================================================================
// CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Ticker period.
    pub tick_interval: Duration,
    /// Host-local offset used for the live selected time and initial date.
    pub local_offset: UtcOffset,
    /// Ordered zone set, fixed for the session.
    pub zones: Vec<TimeZoneEntry>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            local_offset: UtcOffset::UTC,
            zones: default_zones(),
        }
    }
}

impl WidgetConfig {
    /// Build config from environment variables, with the host's local offset
    /// as the fallback for `MINT_LOCAL_OFFSET_HOURS`.
    ///
    /// Call [`host_local_offset`] before the async runtime starts and prefer
    /// [`Self::from_env_with_host_offset`] once other threads exist.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_host_offset(host_local_offset())
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `MINT_TICK_INTERVAL_MS`: default 1000
    /// - `MINT_LOCAL_OFFSET_HOURS`: whole hours in `-23..=23`; `host_offset`
    ///   when unset, unparseable, or out of range (the last logs a warning)
    /// - `MINT_ZONES_FILE`: JSON array of `{id, name, city, offset}`; the
    ///   built-in five zones when absent
    pub fn from_env_with_host_offset(host_offset: UtcOffset) -> Result<Self, ConfigError> {
        Self::from_env_default_zones(host_offset).with_zones_from_env()
    }

    /// Tick interval and local offset from the environment, built-in zones.
    /// Each variable falls back on its own, so this never fails.
    #[must_use]
    pub fn from_env_default_zones(host_offset: UtcOffset) -> Self {
        let tick_interval_ms = env_parse("MINT_TICK_INTERVAL_MS", DEFAULT_TICK_INTERVAL_MS).max(1);
        let local_offset = match env_parse_opt::<i8>("MINT_LOCAL_OFFSET_HOURS") {
            None => host_offset,
            Some(hours) => local_offset_from_hours(hours).unwrap_or_else(|e| {
                warn!(error = %e, fallback = ?host_offset, "MINT_LOCAL_OFFSET_HOURS ignored");
                host_offset
            }),
        };
        Self { tick_interval: Duration::from_millis(tick_interval_ms), local_offset, ..Self::default() }
    }

    /// Replace the zone set with the one in `MINT_ZONES_FILE`, if set.
    pub fn with_zones_from_env(self) -> Result<Self, ConfigError> {
        match std::env::var("MINT_ZONES_FILE") {
            Ok(path) if !path.trim().is_empty() => self.with_zones(load_zones_file(Path::new(path.trim()))?),
            _ => Ok(self),
        }
    }

    /// Replace the zone set after checking that ids are unique.
    pub fn with_zones(mut self, zones: Vec<TimeZoneEntry>) -> Result<Self, ConfigError> {
        validate_zones(&zones)?;
        self.zones = zones;
        Ok(self)
    }
}

/// Read an ordered zone list from a JSON file.
pub fn load_zones_file(path: &Path) -> Result<Vec<TimeZoneEntry>, ConfigError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ZonesRead { path: display.clone(), source })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ZonesParse { path: display, source })
}

/// Zone ids must be unique within a set.
pub fn validate_zones(zones: &[TimeZoneEntry]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(zones.len());
    for zone in zones {
        if !seen.insert(zone.id.as_str()) {
            return Err(ConfigError::DuplicateZoneId(zone.id.clone()));
        }
    }
    Ok(())
}

/// Offset of the host's local time zone, or UTC when it cannot be
/// determined. On Unix this only succeeds while the process is still
/// single-threaded.
#[must_use]
pub fn host_local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

fn local_offset_from_hours(hours: i8) -> Result<UtcOffset, ConfigError> {
    if !(-23..=23).contains(&hours) {
        return Err(ConfigError::LocalOffsetOutOfRange(hours));
    }
    UtcOffset::from_hms(hours, 0, 0).map_err(|_| ConfigError::LocalOffsetOutOfRange(hours))
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    env_parse_opt(key).unwrap_or(default)
}

/// `None` when the variable is unset or does not parse as `T`.
pub(crate) fn env_parse_opt<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
