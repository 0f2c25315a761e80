//! Global Team Mint Widget — live multi-zone clock with a printable report.
//!
//! ARCHITECTURE
//! ============
//! - `zone`: zone entries and the offset converter (pure).
//! - `state`: per-session clock state and derived snapshots.
//! - `report`: fixed-width report formatter (pure).
//! - `ticker`: cancellable 1-second sampling task.
//! - `widget`: session event loop tying ticker, state, and printing together.
//! - `mount`: container shell that mounts at most one widget per container.
//! - `config`, `clock`, `notify`, `command`: ambient plumbing and seams.

pub mod clock;
pub mod command;
pub mod config;
pub mod mount;
pub mod notify;
pub mod report;
pub mod state;
pub mod ticker;
pub mod widget;
pub mod zone;

pub use config::{ConfigError, WidgetConfig};
pub use mount::{Shell, WIDGET_CONTAINER_ID};
pub use state::Snapshot;
pub use widget::{Widget, WidgetContext, WidgetError};
pub use zone::{TimeZoneEntry, default_zones, time_in_zone};
