//! Banner ads around the third-party ads SDK.
//!
//! [`AdGateway`] is an explicitly constructed value owned by the app and
//! passed by reference to whatever needs it. Initialization returns a
//! `Result`; callers that cannot show ads fall back to
//! [`AdGateway::disabled`]. [`AdBanner`] is the per-screen banner state:
//! it hides itself when loading fails and never reports back into the
//! discovery session.

mod analytics;
mod banner;
mod config;
mod gateway;

pub use analytics::AdAnalytics;
pub use banner::{AdBanner, AdEvent, AdEventCallbacks, AdPosition, BannerRequest, BannerSize};
pub use config::{AdConfig, TEST_BANNER_ANDROID, TEST_BANNER_IOS};
pub use gateway::{AdGateway, MaxAdContentRating, Platform, RequestConfiguration};
