//! Common test utilities for integration tests.
//!
//! Profile fixtures and a builder for an [`App`] wired to mock
//! collaborators.
//!
//! # Example
//!
//! ```ignore
//! let (app, sdk, source) = TestAppBuilder::new().skip_splash().build().await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use clgmate::adapters::mock::{MockAdSdk, MockProfileSource};
use clgmate::ads::{AdConfig, AdGateway, Platform};
use clgmate::app::App;
use clgmate::models::Profile;
use clgmate::startup::AppConfig;

/// A valid profile with the given id.
pub fn profile(id: &str) -> Profile {
    Profile {
        id: id.to_string(),
        anonymous_avatar: "🎨".to_string(),
        vibe_match_score: 85,
        department: "CSE".to_string(),
        college: "LNCT".to_string(),
        public_interests: vec!["Coding".to_string(), "Music".to_string()],
        shared_interest_count: 3,
    }
}

/// `n` profiles with ids "1".."n".
pub fn profiles(n: usize) -> Vec<Profile> {
    (1..=n).map(|i| profile(&i.to_string())).collect()
}

/// Builder for an [`App`] backed by mocks.
///
/// `build` must be awaited inside a tokio runtime.
pub struct TestAppBuilder {
    config: AppConfig,
    profiles: Vec<Profile>,
    ads_enabled: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default()
                .with_platform(Platform::Android)
                .with_splash_duration(Duration::from_millis(3000)),
            profiles: profiles(3),
            ads_enabled: true,
        }
    }

    pub fn skip_splash(mut self) -> Self {
        self.config = self.config.with_skip_splash(true);
        self
    }

    pub fn chat_budget(mut self, budget: u32) -> Self {
        self.config = self.config.with_chat_budget(budget);
        self
    }

    pub fn profiles(mut self, profiles: Vec<Profile>) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.config = self.config.with_platform(platform);
        self
    }

    pub fn without_ads(mut self) -> Self {
        self.ads_enabled = false;
        self
    }

    pub async fn build(self) -> (App, MockAdSdk, MockProfileSource) {
        let sdk = MockAdSdk::new();
        let source = MockProfileSource::new(self.profiles);
        let ads = if self.ads_enabled {
            AdGateway::initialize_or_disable(AdConfig::default(), &sdk).await
        } else {
            AdGateway::disabled(AdConfig::default())
        };
        let app = App::new(
            self.config,
            ads,
            Arc::new(source.clone()),
            Arc::new(sdk.clone()),
        );
        (app, sdk, source)
    }
}
