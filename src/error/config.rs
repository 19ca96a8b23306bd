//! Configuration error types.

use thiserror::Error;

/// Errors raised while reading environment variables or CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("missing value for {flag}")]
    MissingArgument { flag: String },

    #[error("unknown platform '{0}' (expected ios or android)")]
    UnknownPlatform(String),
}

impl ConfigError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidValue { key, value, reason } => {
                format!("'{}' is not a valid value for {} ({}).", value, key, reason)
            }
            ConfigError::MissingArgument { flag } => format!("{} needs a value.", flag),
            ConfigError::UnknownPlatform(name) => {
                format!("Unknown platform '{}'. Use ios or android.", name)
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
            ConfigError::MissingArgument { .. } => "CONFIG_MISSING_ARGUMENT",
            ConfigError::UnknownPlatform(_) => "CONFIG_UNKNOWN_PLATFORM",
        }
    }
}
