//! Card advance animation.
//!
//! Two stages: the outgoing card fades and shrinks over
//! [`TRANSITION_DURATION`], then its visual parameters snap back in zero
//! time so the next profile appears at full size. The animation only
//! computes visuals; completing the advance is the session's job.

use std::time::{Duration, Instant};

/// Length of the fade/scale-out stage.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(200);

/// Card scale at the end of the fade-out stage.
const END_SCALE: f32 = 0.9;

/// Visual parameters of the discovery card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    pub opacity: f32,
    pub scale: f32,
}

impl CardVisual {
    pub const RESTING: CardVisual = CardVisual {
        opacity: 1.0,
        scale: 1.0,
    };

    /// Interpolate the fade-out stage at `progress` (clamped to 0..=1).
    pub fn at(progress: f32) -> Self {
        let p = progress.clamp(0.0, 1.0);
        Self {
            opacity: 1.0 - p,
            scale: 1.0 - (1.0 - END_SCALE) * p,
        }
    }
}

/// Tracks the fade-out stage of the card currently on screen.
#[derive(Debug, Clone)]
pub struct CardAnimation {
    started_at: Option<Instant>,
    duration: Duration,
}

impl Default for CardAnimation {
    fn default() -> Self {
        Self::new(TRANSITION_DURATION)
    }
}

impl CardAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            started_at: None,
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Second stage: instantaneous reset to the resting visuals.
    pub fn reset(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Fraction of the fade-out stage elapsed at `now`.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let started = self.started_at?;
        if self.duration.is_zero() {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(started);
        Some((elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0))
    }

    pub fn visual(&self, now: Instant) -> CardVisual {
        match self.progress(now) {
            Some(p) => CardVisual::at(p),
            None => CardVisual::RESTING,
        }
    }
}
