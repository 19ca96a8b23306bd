//! UI rendering for the TUI.
//!
//! One render function per onboarding stage, dispatched from [`render`].

mod ad_banner;
mod discovery;
mod helpers;
mod splash;
mod verification;
mod vibe_check;

pub use discovery::render_card;
pub use helpers::{centered_rect, scale_horizontally, truncate_to_width};

use std::time::Instant;

use ratatui::Frame;

use crate::app::App;
use crate::onboarding::OnboardingStage;

/// Render the current stage.
pub fn render(frame: &mut Frame, app: &App) {
    render_at(frame, app, Instant::now());
}

/// Render as of `now`, which drives the splash fade and card animation.
pub fn render_at(frame: &mut Frame, app: &App, now: Instant) {
    match app.stage() {
        OnboardingStage::Splash => splash::render_splash(frame, app, now),
        OnboardingStage::VibeCheck => vibe_check::render_vibe_check(frame, app),
        OnboardingStage::Verification => verification::render_verification(frame, app),
        OnboardingStage::Home => discovery::render_home(frame, app, now),
    }
}
