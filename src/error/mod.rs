//! Unified error handling for ClgMate.
//!
//! Most of the client cannot fail: guard rejections in the discovery session
//! are silent no-ops. What remains is configuration, the collaborators at the
//! edge of the app (profile source, ad SDK) and the terminal itself.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Configuration | Bad env var or CLI flag | No |
//! | Collaborator | Profile source or ad SDK failed | Yes |
//! | System | Terminal or filesystem errors | No |
//! | Client | Invalid state reached by a bug | No |

mod ads;
mod category;
mod clg_error;
mod config;
mod profile;
mod result;
mod ui;

pub use ads::AdError;
pub use category::ErrorCategory;
pub use clg_error::ClgError;
pub use config::ConfigError;
pub use profile::ProfileSourceError;
pub use result::ClgResult;
pub use ui::UiError;
