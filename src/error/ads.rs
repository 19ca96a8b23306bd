//! Ad SDK error types.

use thiserror::Error;

/// Failures reported by the ad SDK boundary.
///
/// None of these ever reach the discovery session; the banner hides itself
/// and the gateway falls back to a disabled state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdError {
    #[error("ad SDK initialization failed: {0}")]
    InitFailed(String),

    #[error("failed to apply ad request configuration: {0}")]
    RequestConfigurationFailed(String),

    #[error("ad failed to load: {0}")]
    LoadFailed(String),
}

impl AdError {
    pub fn user_message(&self) -> String {
        match self {
            AdError::InitFailed(_) | AdError::RequestConfigurationFailed(_) => {
                "Ads are unavailable right now.".to_string()
            }
            AdError::LoadFailed(_) => "The ad could not be loaded.".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AdError::InitFailed(_) => "AD_INIT_FAILED",
            AdError::RequestConfigurationFailed(_) => "AD_REQUEST_CONFIG_FAILED",
            AdError::LoadFailed(_) => "AD_LOAD_FAILED",
        }
    }
}
