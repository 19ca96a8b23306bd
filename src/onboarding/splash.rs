//! Splash screen state.

use std::time::{Duration, Instant};

/// Length of the logo fade-in.
pub const SPLASH_INTRO_DURATION: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone)]
pub struct SplashState {
    started_at: Instant,
}

impl SplashState {
    pub fn new(now: Instant) -> Self {
        Self { started_at: now }
    }

    /// Fade-in progress of the logo, 0.0..=1.0.
    pub fn intro_progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / SPLASH_INTRO_DURATION.as_secs_f32()).min(1.0)
    }

    pub fn is_intro_running(&self, now: Instant) -> bool {
        self.intro_progress(now) < 1.0
    }
}
