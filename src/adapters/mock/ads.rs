//! Mock ads SDK for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ads::{BannerRequest, RequestConfiguration};
use crate::error::AdError;
use crate::traits::AdSdk;

/// A recorded SDK call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum AdSdkCall {
    Initialize,
    SetRequestConfiguration(RequestConfiguration),
    LoadBanner(BannerRequest),
}

/// Mock ads SDK that records calls and fails on demand.
///
/// Clones share state, so a test can keep one handle while the code under
/// test owns another.
///
/// # Example
///
/// ```ignore
/// let sdk = MockAdSdk::new();
/// sdk.fail_initialize(AdError::InitFailed("offline".into()));
/// let gateway = AdGateway::initialize_or_disable(AdConfig::default(), &sdk).await;
/// assert!(!gateway.is_enabled());
/// assert_eq!(sdk.calls(), vec![AdSdkCall::Initialize]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockAdSdk {
    calls: Arc<Mutex<Vec<AdSdkCall>>>,
    initialize_error: Arc<Mutex<Option<AdError>>>,
    configuration_error: Arc<Mutex<Option<AdError>>>,
    load_error: Arc<Mutex<Option<AdError>>>,
}

impl MockAdSdk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_initialize(&self, error: AdError) {
        *self.initialize_error.lock().unwrap() = Some(error);
    }

    pub fn fail_configuration(&self, error: AdError) {
        *self.configuration_error.lock().unwrap() = Some(error);
    }

    pub fn fail_loads(&self, error: AdError) {
        *self.load_error.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<AdSdkCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: AdSdkCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AdSdk for MockAdSdk {
    async fn initialize(&self) -> Result<(), AdError> {
        self.record(AdSdkCall::Initialize);
        match self.initialize_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn set_request_configuration(
        &self,
        configuration: RequestConfiguration,
    ) -> Result<(), AdError> {
        self.record(AdSdkCall::SetRequestConfiguration(configuration));
        match self.configuration_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn load_banner(&self, request: &BannerRequest) -> Result<(), AdError> {
        self.record(AdSdkCall::LoadBanner(request.clone()));
        match self.load_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
