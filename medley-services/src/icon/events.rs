//! Event system for icon resolution notifications.

use std::path::PathBuf;
use tokio::sync::broadcast;

use crate::icon::IconHandle;

/// Events emitted by the icon resolution system.
#[derive(Debug, Clone)]
pub enum IconEvent {
    /// An icon was resolved for an entry.
    Resolved {
        /// Identity (canonical path) of the entry.
        path: PathBuf,
        /// The resolved icon.
        icon: IconHandle,
    },
    /// Icon resolution failed; the icon stays unavailable.
    Failed {
        /// Identity (canonical path) of the entry.
        path: PathBuf,
        /// Error that occurred.
        error: String,
    },
}

impl IconEvent {
    /// Identity the event refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            IconEvent::Resolved { path, .. } => path,
            IconEvent::Failed { path, .. } => path,
        }
    }
}

/// Create a new broadcast channel for icon events.
pub fn create_icon_event_channel(capacity: usize) -> broadcast::Sender<IconEvent> {
    broadcast::channel(capacity).0
}
