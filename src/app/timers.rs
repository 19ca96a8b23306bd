//! Tokio-backed timers owned by a screen.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AppMessage;
use crate::traits::Scheduler;

/// Background tasks scoped to the screen that owns them.
///
/// Every task is aborted by [`Scheduler::cancel_all`] or when the value is
/// dropped, so nothing a torn-down screen scheduled ever reaches the event
/// loop. Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct ScopedTasks {
    message_tx: mpsc::UnboundedSender<AppMessage>,
    handles: Vec<JoinHandle<()>>,
}

impl ScopedTasks {
    pub fn new(message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            message_tx,
            handles: Vec::new(),
        }
    }

    /// Run `task` and deliver whatever message it resolves to.
    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        self.prune();
        let tx = self.message_tx.clone();
        self.handles.push(tokio::spawn(async move {
            let message = task.await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(message);
        }));
    }

    fn prune(&mut self) {
        self.handles.retain(|handle| !handle.is_finished());
    }
}

impl Scheduler for ScopedTasks {
    fn schedule(&mut self, delay: Duration, message: AppMessage) {
        tracing::debug!("Scheduling {} in {:?}", message.kind(), delay);
        self.spawn(async move {
            tokio::time::sleep(delay).await;
            message
        });
    }

    fn cancel_all(&mut self) {
        if !self.handles.is_empty() {
            tracing::debug!("Cancelling {} scoped tasks", self.handles.len());
        }
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for ScopedTasks {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
