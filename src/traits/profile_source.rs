//! Profile source trait abstraction.

use async_trait::async_trait;

use crate::error::ProfileSourceError;
use crate::models::Profile;

/// Supplies the candidate profiles for a discovery session.
///
/// Called once when the discovery screen mounts. Ranking is the source's
/// job; the session shows profiles in exactly the order returned.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_queue(&self) -> Result<Vec<Profile>, ProfileSourceError>;
}
