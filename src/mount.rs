//! Mount shell — named containers holding at most one widget each.
//!
//! DESIGN
//! ======
//! The shell stands in for the page that embeds the widget. It knows a set
//! of container ids and mounts a widget into the fixed container on request.
//! Mounting is best-effort: a missing container or an occupied one is a
//! silent no-op, never an error.

use std::collections::HashMap;

use tracing::debug;

use crate::widget::{Widget, WidgetContext};

/// Container id the time-picker widget mounts into.
pub const WIDGET_CONTAINER_ID: &str = "global-time-picker";

#[derive(Default)]
pub struct Shell {
    containers: HashMap<String, Option<Widget>>,
}

impl Shell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty container.
    #[must_use]
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.entry(id.into()).or_default();
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    /// Mount the time-picker into [`WIDGET_CONTAINER_ID`].
    pub fn mount(&mut self, context: WidgetContext) -> Option<&Widget> {
        self.mount_into(WIDGET_CONTAINER_ID, context)
    }

    /// Mount a widget into `container_id`.
    ///
    /// Returns `None` without mounting when the container does not exist.
    /// When the container already holds a widget, that widget is returned and
    /// no second instance is created.
    pub fn mount_into(&mut self, container_id: &str, context: WidgetContext) -> Option<&Widget> {
        let Some(slot) = self.containers.get_mut(container_id) else {
            debug!(container_id, "mount container not found; skipping");
            return None;
        };
        if slot.is_some() {
            debug!(container_id, "container already holds a widget");
        }
        Some(slot.get_or_insert_with(|| Widget::mount(context)))
    }

    #[must_use]
    pub fn widget(&self, container_id: &str) -> Option<&Widget> {
        self.containers.get(container_id).and_then(Option::as_ref)
    }

    /// Unmount and remove the widget in `container_id`, leaving the container
    /// empty. Returns `false` when there was nothing to unmount.
    pub async fn unmount(&mut self, container_id: &str) -> bool {
        let Some(widget) = self.containers.get_mut(container_id).and_then(Option::take) else {
            return false;
        };
        widget.unmount().await;
        true
    }
}

#[cfg(test)]
#[path = "mount_test.rs"]
mod tests;
