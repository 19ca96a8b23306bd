use serde::{Deserialize, Serialize};

/// Google's public test banner unit for Android.
pub const TEST_BANNER_ANDROID: &str = "ca-app-pub-3940256099942544/6300978111";

/// Google's public test banner unit for iOS.
pub const TEST_BANNER_IOS: &str = "ca-app-pub-3940256099942544/2934735716";

/// Ad settings resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdConfig {
    pub enabled: bool,
    pub test_mode: bool,
    pub android_banner_id: String,
    pub ios_banner_id: String,
}

impl Default for AdConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            test_mode: true,
            android_banner_id: TEST_BANNER_ANDROID.to_string(),
            ios_banner_id: TEST_BANNER_IOS.to_string(),
        }
    }
}

impl AdConfig {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_android_banner_id(mut self, id: impl Into<String>) -> Self {
        self.android_banner_id = id.into();
        self
    }

    pub fn with_ios_banner_id(mut self, id: impl Into<String>) -> Self {
        self.ios_banner_id = id.into();
        self
    }
}
