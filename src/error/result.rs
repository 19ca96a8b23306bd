//! Result type alias for ClgMate operations.

use super::clg_error::ClgError;

/// Type alias for Results using ClgError.
pub type ClgResult<T> = Result<T, ClgError>;
