//! Onboarding: splash, vibe check, college verification, then home.
//!
//! The flow is a fixed forward-only sequence of [`OnboardingStage`]s. Each
//! stage finishes with exactly one kind of [`StageInput`]; anything else is
//! ignored.

mod splash;
mod verification;
mod vibe_check;

pub use splash::{SplashState, SPLASH_INTRO_DURATION};
pub use verification::{
    generate_username, Field, TimerOutcome, VerificationIssue, VerificationState,
    VerificationStep, VerificationTimer, MIN_PASSWORD_LEN, USERNAME_PREFIX,
};
pub use vibe_check::{VibeCheckState, ONBOARDING_STEPS};

use crate::models::VerifiedUser;

/// Named onboarding stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingStage {
    #[default]
    Splash,
    VibeCheck,
    Verification,
    Home,
}

impl OnboardingStage {
    pub const SEQUENCE: [OnboardingStage; 4] = [
        OnboardingStage::Splash,
        OnboardingStage::VibeCheck,
        OnboardingStage::Verification,
        OnboardingStage::Home,
    ];

    pub fn next(self) -> Option<Self> {
        match self {
            OnboardingStage::Splash => Some(OnboardingStage::VibeCheck),
            OnboardingStage::VibeCheck => Some(OnboardingStage::Verification),
            OnboardingStage::Verification => Some(OnboardingStage::Home),
            OnboardingStage::Home => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OnboardingStage::Splash => "splash",
            OnboardingStage::VibeCheck => "vibe-check",
            OnboardingStage::Verification => "verification",
            OnboardingStage::Home => "home",
        }
    }
}

/// Input that completes a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageInput {
    SplashFinished,
    VibesChosen(Vec<String>),
    Verified(VerifiedUser),
}

/// Where the user is in onboarding, plus what earlier stages produced.
#[derive(Debug, Clone, Default)]
pub struct OnboardingFlow {
    stage: OnboardingStage,
    selected_vibes: Vec<String>,
    user: Option<VerifiedUser>,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start past the splash screen.
    pub fn skipping_splash() -> Self {
        Self {
            stage: OnboardingStage::VibeCheck,
            ..Self::default()
        }
    }

    pub fn stage(&self) -> OnboardingStage {
        self.stage
    }

    pub fn selected_vibes(&self) -> &[String] {
        &self.selected_vibes
    }

    pub fn user(&self) -> Option<&VerifiedUser> {
        self.user.as_ref()
    }

    /// Complete the current stage. Returns the new stage, or `None` when the
    /// input does not belong to the current stage.
    pub fn advance(&mut self, input: StageInput) -> Option<OnboardingStage> {
        match (self.stage, input) {
            (OnboardingStage::Splash, StageInput::SplashFinished) => {}
            (OnboardingStage::VibeCheck, StageInput::VibesChosen(vibes)) if !vibes.is_empty() => {
                tracing::info!("Selected vibes: {:?}", vibes);
                self.selected_vibes = vibes;
            }
            (OnboardingStage::Verification, StageInput::Verified(user)) => {
                tracing::info!(username = %user.username, college = %user.college, "Verified");
                self.user = Some(user);
            }
            (stage, input) => {
                tracing::debug!("Ignoring {:?} during {}", input, stage.label());
                return None;
            }
        }

        let next = self.stage.next()?;
        tracing::info!("Onboarding: {} -> {}", self.stage.label(), next.label());
        self.stage = next;
        Some(next)
    }
}
