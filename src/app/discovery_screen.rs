//! The discovery screen controller.
//!
//! Binds a [`DiscoverySession`] to its card animation and to a scheduler that
//! delivers the transition-complete input. The session itself never sees a
//! timer.

use std::time::{Duration, Instant};

use super::AppMessage;
use crate::discovery::{CardAnimation, CardVisual, DiscoverySession, TransitionTicket};
use crate::traits::Scheduler;

pub struct DiscoveryScreen<S: Scheduler> {
    session: DiscoverySession,
    animation: CardAnimation,
    scheduler: S,
}

impl<S: Scheduler> DiscoveryScreen<S> {
    pub fn new(session: DiscoverySession, transition_duration: Duration, scheduler: S) -> Self {
        Self {
            session,
            animation: CardAnimation::new(transition_duration),
            scheduler,
        }
    }

    /// Pass on the current profile. Returns false if the session refused.
    pub fn pass(&mut self, now: Instant) -> bool {
        let ticket = self.session.pass();
        self.begin(ticket, now)
    }

    /// Request a chat with the current profile. Returns false if refused.
    pub fn request_chat(&mut self, now: Instant) -> bool {
        let ticket = self.session.request_chat();
        self.begin(ticket, now)
    }

    fn begin(&mut self, ticket: Option<TransitionTicket>, now: Instant) -> bool {
        let Some(ticket) = ticket else {
            return false;
        };
        self.animation.start(now);
        self.scheduler.schedule(
            self.animation.duration(),
            AppMessage::TransitionComplete(ticket),
        );
        true
    }

    /// Feed back a transition-complete message.
    ///
    /// The card snaps back to its resting visuals only when the session
    /// accepted the ticket.
    pub fn on_transition_complete(&mut self, ticket: TransitionTicket) -> bool {
        let advanced = self.session.complete_transition(ticket);
        if advanced {
            self.animation.reset();
        }
        advanced
    }

    pub fn session(&self) -> &DiscoverySession {
        &self.session
    }

    pub fn card_visual(&self, now: Instant) -> CardVisual {
        self.animation.visual(now)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: Scheduler> Drop for DiscoveryScreen<S> {
    fn drop(&mut self) {
        self.scheduler.cancel_all();
    }
}
