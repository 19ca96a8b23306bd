//! Unified error type for the ClgMate client.

use std::fmt;

use super::ads::AdError;
use super::category::ErrorCategory;
use super::config::ConfigError;
use super::profile::ProfileSourceError;
use super::ui::UiError;

/// Unified error type for the ClgMate client.
#[derive(Debug)]
pub enum ClgError {
    Config(ConfigError),
    Ads(AdError),
    Profiles(ProfileSourceError),
    Ui(UiError),
    Io(std::io::Error),
}

impl ClgError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClgError::Config(_) => ErrorCategory::Configuration,
            ClgError::Ads(_) | ClgError::Profiles(_) => ErrorCategory::Collaborator,
            ClgError::Ui(UiError::ChannelClosed) => ErrorCategory::Client,
            ClgError::Ui(_) | ClgError::Io(_) => ErrorCategory::System,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ClgError::Config(err) => err.user_message(),
            ClgError::Ads(err) => err.user_message(),
            ClgError::Profiles(err) => err.user_message(),
            ClgError::Ui(err) => err.user_message(),
            ClgError::Io(err) => format!("I/O error: {}", err),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClgError::Config(err) => err.error_code(),
            ClgError::Ads(err) => err.error_code(),
            ClgError::Profiles(err) => err.error_code(),
            ClgError::Ui(err) => err.error_code(),
            ClgError::Io(_) => "IO",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for ClgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClgError::Config(err) => write!(f, "{}", err),
            ClgError::Ads(err) => write!(f, "{}", err),
            ClgError::Profiles(err) => write!(f, "{}", err),
            ClgError::Ui(err) => write!(f, "{}", err),
            ClgError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ClgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClgError::Config(err) => Some(err),
            ClgError::Ads(err) => Some(err),
            ClgError::Profiles(err) => Some(err),
            ClgError::Ui(err) => Some(err),
            ClgError::Io(err) => Some(err),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<ConfigError> for ClgError {
    fn from(err: ConfigError) -> Self {
        ClgError::Config(err)
    }
}

impl From<AdError> for ClgError {
    fn from(err: AdError) -> Self {
        ClgError::Ads(err)
    }
}

impl From<ProfileSourceError> for ClgError {
    fn from(err: ProfileSourceError) -> Self {
        ClgError::Profiles(err)
    }
}

impl From<UiError> for ClgError {
    fn from(err: UiError) -> Self {
        ClgError::Ui(err)
    }
}

impl From<std::io::Error> for ClgError {
    fn from(err: std::io::Error) -> Self {
        ClgError::Io(err)
    }
}
