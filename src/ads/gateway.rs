use std::fmt;
use std::str::FromStr;

use crate::error::{AdError, ConfigError};
use crate::traits::AdSdk;

use super::config::AdConfig;

/// Device platform, used to pick the banner unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    /// Anything without a banner unit (desktop terminals included).
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Other
        }
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            _ => Err(ConfigError::UnknownPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Maximum content rating served to the audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxAdContentRating {
    General,
    ParentalGuidance,
    Teen,
    MatureAudience,
}

/// Request configuration applied right after SDK initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestConfiguration {
    pub max_ad_content_rating: MaxAdContentRating,
    pub tag_for_child_directed_treatment: bool,
    pub tag_for_under_age_of_consent: bool,
}

impl RequestConfiguration {
    /// College audience: 17+ content, no child or under-age tagging.
    pub fn college_audience() -> Self {
        Self {
            max_ad_content_rating: MaxAdContentRating::MatureAudience,
            tag_for_child_directed_treatment: false,
            tag_for_under_age_of_consent: false,
        }
    }
}

/// Whether ads are shown, and which banner unit to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdGateway {
    config: AdConfig,
    initialized: bool,
}

impl AdGateway {
    /// Initialize the SDK for an enabled configuration.
    ///
    /// A disabled configuration makes no SDK calls and yields a gateway that
    /// reports ads as disabled.
    pub async fn initialize<S>(config: AdConfig, sdk: &S) -> Result<Self, AdError>
    where
        S: AdSdk + ?Sized,
    {
        if !config.enabled {
            tracing::info!("Ads disabled by configuration, skipping SDK initialization");
            return Ok(Self {
                config,
                initialized: false,
            });
        }

        sdk.initialize().await?;
        sdk.set_request_configuration(RequestConfiguration::college_audience())
            .await?;

        tracing::info!(test_mode = config.test_mode, "Ad SDK initialized");
        Ok(Self {
            config,
            initialized: true,
        })
    }

    /// Initialize, falling back to a disabled gateway on failure.
    pub async fn initialize_or_disable<S>(config: AdConfig, sdk: &S) -> Self
    where
        S: AdSdk + ?Sized,
    {
        match Self::initialize(config.clone(), sdk).await {
            Ok(gateway) => gateway,
            Err(err) => {
                tracing::warn!(code = err.error_code(), "Ad SDK initialization failed: {}", err);
                Self::disabled(config)
            }
        }
    }

    /// A gateway that never shows ads.
    pub fn disabled(config: AdConfig) -> Self {
        Self {
            config: config.with_enabled(false),
            initialized: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_test_mode(&self) -> bool {
        self.config.test_mode
    }

    /// Banner unit for `platform`; empty when ads are disabled or the
    /// platform has no unit.
    pub fn banner_unit_id(&self, platform: Platform) -> &str {
        if !self.config.enabled {
            return "";
        }
        match platform {
            Platform::Ios => &self.config.ios_banner_id,
            Platform::Android => &self.config.android_banner_id,
            Platform::Other => "",
        }
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> AdConfig {
        self.config.clone()
    }

    /// Turn ads off at runtime (premium users).
    pub fn disable(&mut self) {
        tracing::info!("Ads disabled at runtime");
        self.config.enabled = false;
    }

    /// Turn ads back on and return whether they are now enabled.
    ///
    /// Does nothing on a gateway whose SDK never initialized (ads disabled
    /// by configuration or a failed `initialize`); such a gateway stays off.
    pub fn enable(&mut self) -> bool {
        if self.initialized {
            tracing::info!("Ads enabled at runtime");
            self.config.enabled = true;
        }
        self.config.enabled
    }
}
