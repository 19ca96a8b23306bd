//! Terminal UI error types.

use thiserror::Error;

/// Errors from the terminal layer and the app's event plumbing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("terminal initialization failed: {message}")]
    TerminalInitFailed { message: String },

    #[error("failed to render {component}: {message}")]
    RenderFailed { component: String, message: String },

    #[error("app message channel closed")]
    ChannelClosed,
}

impl UiError {
    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "Failed to initialize the terminal. Please check your terminal settings."
                    .to_string()
            }
            UiError::RenderFailed { component, .. } => {
                format!("Failed to render {}.", component)
            }
            UiError::ChannelClosed => {
                "Internal communication error. Please restart the application.".to_string()
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed { .. } => "UI_TERMINAL_INIT",
            UiError::RenderFailed { .. } => "UI_RENDER",
            UiError::ChannelClosed => "UI_CHANNEL_CLOSED",
        }
    }
}
