//! Background task executor for icon resolution.

use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

use crate::filesystem::entry::FileEntry;
use crate::icon::events::{create_icon_event_channel, IconEvent};
use crate::icon::{IconError, IconProvider};

/// A queued resolution job.
#[derive(Debug, Clone)]
struct ResolveTask {
    entry: FileEntry,
}

/// Executor for background icon resolution.
///
/// Jobs are fire-and-forget: once queued they run to completion and
/// the outcome is published on the event channel. No ordering is
/// guaranteed between jobs for distinct identities.
pub struct ResolveExecutor {
    task_tx: mpsc::UnboundedSender<ResolveTask>,
    event_tx: broadcast::Sender<IconEvent>,
}

impl ResolveExecutor {
    /// Create a new executor driving the given provider.
    ///
    /// Spawns the worker on the ambient tokio runtime; the worker exits
    /// when the executor is dropped and the task channel closes.
    pub fn new(provider: Arc<dyn IconProvider>, event_capacity: usize) -> Self {
        let (task_tx, task_rx) = mpsc::unbounded_channel();
        let event_tx = create_icon_event_channel(event_capacity);

        let event_tx_clone = event_tx.clone();
        tokio::spawn(async move {
            Self::worker_task(provider, task_rx, event_tx_clone).await;
        });

        Self { task_tx, event_tx }
    }

    /// Queue a resolution job for an entry.
    pub fn submit(&self, entry: FileEntry) -> Result<(), IconError> {
        self.task_tx
            .send(ResolveTask { entry })
            .map_err(|e| IconError::QueueClosed(e.to_string()))
    }

    /// Subscribe to resolution events.
    pub fn subscribe(&self) -> broadcast::Receiver<IconEvent> {
        self.event_tx.subscribe()
    }

    /// Background worker that processes resolution jobs.
    async fn worker_task(
        provider: Arc<dyn IconProvider>,
        mut task_rx: mpsc::UnboundedReceiver<ResolveTask>,
        event_tx: broadcast::Sender<IconEvent>,
    ) {
        while let Some(task) = task_rx.recv().await {
            let path = task.entry.path.clone();
            let provider = provider.clone();

            // The provider is synchronous and may hit the disk.
            let result =
                tokio::task::spawn_blocking(move || provider.icon_for(&task.entry)).await;

            let event = match result {
                Ok(Ok(icon)) => IconEvent::Resolved { path, icon },
                Ok(Err(e)) => IconEvent::Failed {
                    path,
                    error: e.to_string(),
                },
                Err(e) => IconEvent::Failed {
                    path,
                    error: format!("resolve task panicked: {}", e),
                },
            };
            let _ = event_tx.send(event);
        }

        log::debug!("icon resolve queue closed, worker exiting");
    }
}
