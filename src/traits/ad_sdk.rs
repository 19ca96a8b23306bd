//! Mobile ads SDK trait abstraction.

use async_trait::async_trait;

use crate::ads::{BannerRequest, RequestConfiguration};
use crate::error::AdError;

/// The surface of the third-party ads SDK the client relies on.
///
/// Implementations include [`crate::adapters::SimulatedAdSdk`] for the
/// terminal build and [`crate::adapters::mock::MockAdSdk`] for tests.
#[async_trait]
pub trait AdSdk: Send + Sync {
    /// Initialize the SDK. Called at most once per gateway.
    async fn initialize(&self) -> Result<(), AdError>;

    /// Apply content rating and audience tagging.
    async fn set_request_configuration(
        &self,
        configuration: RequestConfiguration,
    ) -> Result<(), AdError>;

    /// Load a banner. Resolves when the banner is ready to show.
    async fn load_banner(&self, request: &BannerRequest) -> Result<(), AdError>;
}
