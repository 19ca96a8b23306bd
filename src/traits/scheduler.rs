//! Delayed message delivery.

use std::time::Duration;

use crate::app::AppMessage;

/// Delivers an [`AppMessage`] back to the event loop after a delay.
///
/// Schedulers are owned by the screen that uses them. Dropping or calling
/// [`Scheduler::cancel_all`] must guarantee none of the pending messages is
/// delivered, so a torn-down screen never sees a stale completion.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, message: AppMessage);

    fn cancel_all(&mut self);

    /// Number of messages scheduled and not yet delivered or cancelled.
    fn pending(&self) -> usize;
}
