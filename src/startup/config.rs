//! Startup configuration types.
//!
//! Configuration comes from environment variables (`from_env`) and is then
//! adjusted by command-line flags (`apply_overrides`).

use std::path::PathBuf;
use std::time::Duration;

use crate::ads::{AdConfig, Platform, TEST_BANNER_ANDROID, TEST_BANNER_IOS};
use crate::cli::CliOverrides;
use crate::discovery::{DEFAULT_CHAT_BUDGET, TRANSITION_DURATION};
use crate::error::ConfigError;

/// How long the splash screen stays up before moving on.
pub const SPLASH_DURATION: Duration = Duration::from_millis(3000);

/// Build variant, from `APP_VARIANT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    Preview,
    #[default]
    Production,
}

impl Environment {
    pub fn from_variant(variant: Option<&str>) -> Self {
        match variant {
            Some("development") => Environment::Development,
            Some("preview") => Environment::Preview,
            _ => Environment::Production,
        }
    }

    pub fn app_name(&self) -> &'static str {
        match self {
            Environment::Development => "ClgMate (Dev)",
            Environment::Preview => "ClgMate (Preview)",
            Environment::Production => "ClgMate",
        }
    }
}

/// Configuration for a client run.
///
/// # Example
///
/// ```ignore
/// use clgmate::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_chat_budget(5)
///     .with_skip_splash(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: Environment,
    pub ads: AdConfig,
    /// Chat requests granted to each discovery session
    pub chat_budget: u32,
    /// JSON profile list; the built-in list is used when unset
    pub profiles_path: Option<PathBuf>,
    pub platform: Platform,
    pub skip_splash: bool,
    pub splash_duration: Duration,
    pub transition_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            ads: AdConfig::default().with_test_mode(false),
            chat_budget: DEFAULT_CHAT_BUDGET,
            profiles_path: None,
            platform: Platform::current(),
            skip_splash: false,
            splash_duration: SPLASH_DURATION,
            transition_duration: TRANSITION_DURATION,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chat_budget(mut self, budget: u32) -> Self {
        self.chat_budget = budget;
        self
    }

    pub fn with_profiles_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.profiles_path = Some(path.into());
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_skip_splash(mut self, skip: bool) -> Self {
        self.skip_splash = skip;
        self
    }

    pub fn with_ads(mut self, ads: AdConfig) -> Self {
        self.ads = ads;
        self
    }

    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    pub fn with_splash_duration(mut self, duration: Duration) -> Self {
        self.splash_duration = duration;
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_variant(lookup("APP_VARIANT").as_deref());

        // Ads are off in development unless explicitly enabled.
        let ads_enabled = lookup("ADMOB_ENABLED").as_deref() == Some("true")
            || environment != Environment::Development;

        let ads = AdConfig {
            enabled: ads_enabled,
            test_mode: environment != Environment::Production,
            android_banner_id: lookup("ADMOB_BANNER_ANDROID")
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| TEST_BANNER_ANDROID.to_string()),
            ios_banner_id: lookup("ADMOB_BANNER_IOS")
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| TEST_BANNER_IOS.to_string()),
        };

        let chat_budget = match lookup("CLGMATE_CHAT_BUDGET") {
            Some(raw) => parse_budget("CLGMATE_CHAT_BUDGET", &raw)?,
            None => DEFAULT_CHAT_BUDGET,
        };

        Ok(Self {
            environment,
            ads,
            chat_budget,
            profiles_path: lookup("CLGMATE_PROFILES").map(PathBuf::from),
            ..Self::default()
        })
    }

    /// Apply command-line flags on top of the environment.
    pub fn apply_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(budget) = overrides.chat_budget {
            self.chat_budget = budget;
        }
        if let Some(path) = &overrides.profiles_path {
            self.profiles_path = Some(path.clone());
        }
        if let Some(platform) = overrides.platform {
            self.platform = platform;
        }
        if overrides.skip_splash {
            self.skip_splash = true;
        }
        if overrides.no_ads {
            self.ads.enabled = false;
        }
        self
    }
}

pub(crate) fn parse_budget(key: &str, raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            reason: "expected a non-negative integer".to_string(),
        })
}
