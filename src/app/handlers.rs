//! Message handling for the App.

use chrono::Utc;

use super::{App, AppMessage};
use crate::ads::AdEvent;
use crate::onboarding::{StageInput, TimerOutcome, VerificationTimer};
use crate::traits::Scheduler;

impl App {
    /// Apply a message from a timer or background task.
    pub fn handle_message(&mut self, message: AppMessage) {
        tracing::debug!("Handling {}", message.kind());
        match message {
            AppMessage::SplashElapsed => {
                self.complete_stage(StageInput::SplashFinished);
            }
            AppMessage::Verification(timer) => self.on_verification_timer(timer),
            AppMessage::TransitionComplete(ticket) => {
                if let Some(screen) = self.discovery.as_mut() {
                    screen.on_transition_complete(ticket);
                }
            }
            AppMessage::ProfilesLoaded(profiles) => self.on_profiles_loaded(profiles),
            AppMessage::ProfilesLoadFailed(err) => {
                tracing::warn!(code = err.error_code(), "Profile fetch failed: {}", err);
                self.load_error = Some(err);
            }
            AppMessage::Ad(event) => {
                let shown = event == AdEvent::Loaded;
                self.apply_ad_event(event);
                // A terminal banner is on screen as soon as it loads.
                if shown {
                    self.apply_ad_event(AdEvent::Impression);
                }
            }
        }
        self.mark_dirty();
    }

    fn on_verification_timer(&mut self, timer: VerificationTimer) {
        match self.verification.on_timer(timer) {
            TimerOutcome::Ignored | TimerOutcome::Advanced => {}
            TimerOutcome::Schedule(next) => {
                self.stage_timers
                    .schedule(next.delay(), AppMessage::Verification(next));
            }
            TimerOutcome::Completed(user) => {
                self.complete_stage(StageInput::Verified(user));
            }
        }
    }

    /// Update the banner and counters. Events with no mounted banner are
    /// dropped.
    pub fn apply_ad_event(&mut self, event: AdEvent) {
        let Some(banner) = self.banner.as_mut() else {
            return;
        };
        banner.handle_event(&event);
        self.ad_analytics.record(&event, Utc::now());
    }
}
