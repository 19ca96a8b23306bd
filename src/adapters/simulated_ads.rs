//! Stand-in for the mobile ads SDK on desktop terminals.

use std::time::Duration;

use async_trait::async_trait;

use crate::ads::{BannerRequest, RequestConfiguration};
use crate::error::AdError;
use crate::traits::AdSdk;

/// Pretends to talk to an ad network: initialization always succeeds and a
/// banner "loads" after a short delay.
#[derive(Debug, Clone)]
pub struct SimulatedAdSdk {
    load_delay: Duration,
}

impl SimulatedAdSdk {
    pub fn new(load_delay: Duration) -> Self {
        Self { load_delay }
    }
}

impl Default for SimulatedAdSdk {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}

#[async_trait]
impl AdSdk for SimulatedAdSdk {
    async fn initialize(&self) -> Result<(), AdError> {
        tracing::debug!("Simulated ad SDK initialized");
        Ok(())
    }

    async fn set_request_configuration(
        &self,
        configuration: RequestConfiguration,
    ) -> Result<(), AdError> {
        tracing::debug!("Simulated ad SDK configured: {:?}", configuration);
        Ok(())
    }

    async fn load_banner(&self, request: &BannerRequest) -> Result<(), AdError> {
        if request.unit_id.is_empty() {
            return Err(AdError::LoadFailed("no ad unit id".to_string()));
        }
        tokio::time::sleep(self.load_delay).await;
        Ok(())
    }
}
