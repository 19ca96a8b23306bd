//! Error category classification.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid environment variables or command-line flags.
    /// Not retryable until the configuration is corrected.
    Configuration,

    /// An external collaborator (profile source, ad SDK) failed.
    /// The affected surface degrades; retrying later may succeed.
    Collaborator,

    /// Terminal or filesystem errors.
    System,

    /// Invalid state reached through a programming error.
    Client,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Collaborator)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Collaborator => "collaborator",
            ErrorCategory::System => "system",
            ErrorCategory::Client => "client",
        }
    }

    /// Returns a hint shown next to the error message.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "Check your environment variables and flags.",
            ErrorCategory::Collaborator => "Try again later.",
            ErrorCategory::System => "Check your terminal and file permissions.",
            ErrorCategory::Client => "Please report this issue.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
