//! Manually driven scheduler for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::app::AppMessage;
use crate::traits::Scheduler;

#[derive(Debug, Default)]
struct Queue {
    pending: Vec<(Duration, AppMessage)>,
    cancelled: usize,
}

/// Scheduler that holds messages until the test releases them.
///
/// Clones share the queue, so a test can keep a handle after moving the
/// scheduler into the screen under test and still observe the
/// cancellation that happens when the screen is dropped.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    queue: Arc<Mutex<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every pending message, in scheduling order.
    pub fn fire_all(&self) -> Vec<AppMessage> {
        let mut queue = self.queue.lock().unwrap();
        queue.pending.drain(..).map(|(_, message)| message).collect()
    }

    /// Remove and return the oldest pending message.
    pub fn fire_next(&self) -> Option<AppMessage> {
        let mut queue = self.queue.lock().unwrap();
        if queue.pending.is_empty() {
            None
        } else {
            Some(queue.pending.remove(0).1)
        }
    }

    /// Delays of the pending messages.
    pub fn delays(&self) -> Vec<Duration> {
        let queue = self.queue.lock().unwrap();
        queue.pending.iter().map(|(delay, _)| *delay).collect()
    }

    /// How many messages were discarded by `cancel_all`.
    pub fn cancelled(&self) -> usize {
        self.queue.lock().unwrap().cancelled
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, message: AppMessage) {
        self.queue.lock().unwrap().pending.push((delay, message));
    }

    fn cancel_all(&mut self) {
        let mut queue = self.queue.lock().unwrap();
        let dropped = queue.pending.len();
        queue.pending.clear();
        queue.cancelled += dropped;
    }

    fn pending(&self) -> usize {
        self.queue.lock().unwrap().pending.len()
    }
}
