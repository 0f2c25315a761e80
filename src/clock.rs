//! Wall-clock source.
//!
//! The ticker samples time through [`Clock`] so sessions can be driven by a
//! deterministic clock under test.

use time::OffsetDateTime;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// The host's wall clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
