//! Stage changes and the work they kick off.

use std::sync::Arc;

use super::{App, AppMessage, DiscoveryScreen, ScopedTasks};
use crate::ads::{AdBanner, AdEvent, AdPosition, BannerSize};
use crate::discovery::DiscoverySession;
use crate::models::Profile;
use crate::onboarding::{OnboardingStage, StageInput};
use crate::traits::Scheduler;

impl App {
    /// Feed a completion input to the onboarding flow and enter the next
    /// stage if it was accepted.
    pub fn complete_stage(&mut self, input: StageInput) {
        if let Some(next) = self.flow.advance(input) {
            self.enter_stage(next);
        }
    }

    pub(super) fn enter_stage(&mut self, stage: OnboardingStage) {
        // Whatever the previous stage scheduled no longer applies.
        self.stage_timers.cancel_all();
        match stage {
            OnboardingStage::Splash => {
                self.stage_timers
                    .schedule(self.config.splash_duration, AppMessage::SplashElapsed);
            }
            OnboardingStage::VibeCheck | OnboardingStage::Verification => {}
            OnboardingStage::Home => self.enter_home(),
        }
        self.mark_dirty();
    }

    fn enter_home(&mut self) {
        let banner = AdBanner::mount(
            &self.ads,
            self.config.platform,
            AdPosition::Bottom,
            BannerSize::Banner,
        );
        if let Some(request) = banner.request() {
            let sdk = Arc::clone(&self.ad_sdk);
            self.home_tasks.spawn(async move {
                match sdk.load_banner(&request).await {
                    Ok(()) => AppMessage::Ad(AdEvent::Loaded),
                    Err(err) => AppMessage::Ad(AdEvent::FailedToLoad(err)),
                }
            });
        }
        self.banner = Some(banner);
        self.fetch_profiles();
    }

    /// Fetch the discovery queue. Also used to retry after a failure.
    pub fn fetch_profiles(&mut self) {
        self.load_error = None;
        let source = Arc::clone(&self.profile_source);
        self.home_tasks.spawn(async move {
            match source.fetch_queue().await {
                Ok(profiles) => AppMessage::ProfilesLoaded(profiles),
                Err(err) => AppMessage::ProfilesLoadFailed(err),
            }
        });
    }

    pub(super) fn on_profiles_loaded(&mut self, profiles: Vec<Profile>) {
        tracing::info!("Discovery queue loaded: {} profiles", profiles.len());
        let session = DiscoverySession::new(profiles, self.config.chat_budget);
        // Replacing a previous screen drops it, cancelling its timers.
        self.discovery = Some(DiscoveryScreen::new(
            session,
            self.config.transition_duration,
            ScopedTasks::new(self.message_tx.clone()),
        ));
    }

    /// Leave the home screen, discarding any transition in flight.
    pub fn close_home(&mut self) {
        self.discovery = None;
        self.banner = None;
        self.home_tasks.cancel_all();
    }
}
