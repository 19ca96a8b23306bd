//! AppMessage enum for async communication within the application.

use crate::ads::AdEvent;
use crate::discovery::TransitionTicket;
use crate::error::ProfileSourceError;
use crate::models::Profile;
use crate::onboarding::VerificationTimer;

/// Messages delivered to the event loop by timers and background tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// Splash screen has been up long enough
    SplashElapsed,
    /// A simulated verification request finished
    Verification(VerificationTimer),
    /// The card fade-out for this advance finished
    TransitionComplete(TransitionTicket),
    /// Discovery queue fetched
    ProfilesLoaded(Vec<Profile>),
    /// Discovery queue could not be fetched
    ProfilesLoadFailed(ProfileSourceError),
    /// Banner lifecycle event from the ads SDK
    Ad(AdEvent),
}

impl AppMessage {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::SplashElapsed => "splash_elapsed",
            AppMessage::Verification(_) => "verification",
            AppMessage::TransitionComplete(_) => "transition_complete",
            AppMessage::ProfilesLoaded(_) => "profiles_loaded",
            AppMessage::ProfilesLoadFailed(_) => "profiles_load_failed",
            AppMessage::Ad(_) => "ad",
        }
    }
}
