//! Profile source error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading the discovery queue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileSourceError {
    #[error("failed to read profiles from {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("failed to parse profiles in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid profile '{id}': {reason}")]
    InvalidProfile { id: String, reason: String },
}

impl ProfileSourceError {
    pub fn user_message(&self) -> String {
        match self {
            ProfileSourceError::Io { path, .. } => {
                format!("Could not read '{}'.", path.display())
            }
            ProfileSourceError::Parse { path, .. } => {
                format!("'{}' does not contain a valid profile list.", path.display())
            }
            ProfileSourceError::InvalidProfile { id, reason } => {
                format!("Profile '{}' is invalid: {}.", id, reason)
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ProfileSourceError::Io { .. } => "PROFILE_IO",
            ProfileSourceError::Parse { .. } => "PROFILE_PARSE",
            ProfileSourceError::InvalidProfile { .. } => "PROFILE_INVALID",
        }
    }
}
