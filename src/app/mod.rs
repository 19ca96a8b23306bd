//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppMessage`] - Messages for async communication
//! - [`DiscoveryScreen`] - Session, card animation and scheduler of the home screen
//! - [`ScopedTasks`] - Tokio timers that die with their screen

mod discovery_screen;
mod handlers;
mod input;
mod messages;
mod navigation;
mod timers;

pub use discovery_screen::DiscoveryScreen;
pub use messages::AppMessage;
pub use timers::ScopedTasks;

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::ads::{AdAnalytics, AdBanner, AdGateway};
use crate::error::ProfileSourceError;
use crate::onboarding::{
    OnboardingFlow, OnboardingStage, SplashState, VerificationState, VibeCheckState,
};
use crate::startup::AppConfig;
use crate::theme::Theme;
use crate::traits::{AdSdk, ProfileSource};

/// Main application state
pub struct App {
    pub config: AppConfig,
    pub theme: &'static Theme,
    /// Current onboarding stage and what earlier stages produced
    pub flow: OnboardingFlow,
    pub splash: SplashState,
    pub vibe_check: VibeCheckState,
    pub verification: VerificationState,
    /// Home screen, present once the queue has been fetched
    pub discovery: Option<DiscoveryScreen<ScopedTasks>>,
    /// Set when the queue fetch failed
    pub load_error: Option<ProfileSourceError>,
    pub ads: AdGateway,
    /// Mounted with the home screen
    pub banner: Option<AdBanner>,
    pub ad_analytics: AdAnalytics,
    /// Timers of the current onboarding stage
    stage_timers: ScopedTasks,
    /// Queue fetch and banner load of the home screen
    home_tasks: ScopedTasks,
    profile_source: Arc<dyn ProfileSource>,
    ad_sdk: Arc<dyn AdSdk>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Animation tick counter
    pub tick_count: u64,
    /// Dirty flag: the next loop iteration redraws when set
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    /// Create the app. Must be called inside a tokio runtime; nothing is
    /// scheduled until [`App::start`].
    pub fn new(
        config: AppConfig,
        ads: AdGateway,
        profile_source: Arc<dyn ProfileSource>,
        ad_sdk: Arc<dyn AdSdk>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let flow = if config.skip_splash {
            OnboardingFlow::skipping_splash()
        } else {
            OnboardingFlow::new()
        };

        Self {
            config,
            theme: Theme::midnight_garden(),
            flow,
            splash: SplashState::new(Instant::now()),
            vibe_check: VibeCheckState::new(),
            verification: VerificationState::new(),
            discovery: None,
            load_error: None,
            ads,
            banner: None,
            ad_analytics: AdAnalytics::default(),
            stage_timers: ScopedTasks::new(message_tx.clone()),
            home_tasks: ScopedTasks::new(message_tx.clone()),
            profile_source,
            ad_sdk,
            message_tx,
            message_rx: Some(message_rx),
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Arm the timers of the initial stage.
    pub fn start(&mut self) {
        let stage = self.flow.stage();
        tracing::info!("{} starting at {}", self.config.environment.app_name(), stage.label());
        self.enter_stage(stage);
    }

    pub fn stage(&self) -> OnboardingStage {
        self.flow.stage()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the frame counter and keep redrawing while anything animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        let now = Instant::now();
        let animating = match self.flow.stage() {
            OnboardingStage::Splash => self.splash.is_intro_running(now),
            OnboardingStage::Home => self.discovery.as_ref().is_some_and(|d| d.is_animating()),
            _ => false,
        };
        if animating {
            self.mark_dirty();
        }
    }

    pub fn stage_timers(&self) -> &ScopedTasks {
        &self.stage_timers
    }
}
