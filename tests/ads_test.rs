// Integration tests for ad gateway initialization and banner lifecycle

use std::sync::{Arc, Mutex};
use std::time::Duration;

use clgmate::adapters::mock::{AdSdkCall, MockAdSdk};
use clgmate::adapters::SimulatedAdSdk;
use clgmate::ads::{
    AdBanner, AdConfig, AdEvent, AdEventCallbacks, AdGateway, AdPosition, BannerSize, Platform,
    RequestConfiguration, TEST_BANNER_ANDROID, TEST_BANNER_IOS,
};
use clgmate::error::AdError;
use clgmate::traits::AdSdk;

#[tokio::test]
async fn test_initialize_configures_college_audience() {
    let sdk = MockAdSdk::new();
    let gateway = AdGateway::initialize(AdConfig::default(), &sdk).await.unwrap();

    assert!(gateway.is_enabled());
    assert!(gateway.is_initialized());
    assert_eq!(
        sdk.calls(),
        vec![
            AdSdkCall::Initialize,
            AdSdkCall::SetRequestConfiguration(RequestConfiguration::college_audience()),
        ]
    );
}

#[tokio::test]
async fn test_disabled_config_makes_no_sdk_calls() {
    let sdk = MockAdSdk::new();
    let gateway = AdGateway::initialize(AdConfig::default().with_enabled(false), &sdk)
        .await
        .unwrap();

    assert!(!gateway.is_enabled());
    assert_eq!(sdk.call_count(), 0);
}

#[tokio::test]
async fn test_init_failure_disables_ads() {
    let sdk = MockAdSdk::new();
    sdk.fail_initialize(AdError::InitFailed("play services missing".to_string()));

    let err = AdGateway::initialize(AdConfig::default(), &sdk).await.unwrap_err();
    assert_eq!(err.error_code(), "AD_INIT_FAILED");

    let mut gateway = AdGateway::initialize_or_disable(AdConfig::default(), &sdk).await;
    assert!(!gateway.is_enabled());
    assert_eq!(gateway.banner_unit_id(Platform::Android), "");
    // Cannot re-enable ads without a working SDK.
    assert!(!gateway.enable());
}

#[tokio::test]
async fn test_configuration_failure_disables_ads() {
    let sdk = MockAdSdk::new();
    sdk.fail_configuration(AdError::RequestConfigurationFailed("rejected".to_string()));

    let gateway = AdGateway::initialize_or_disable(AdConfig::default(), &sdk).await;
    assert!(!gateway.is_enabled());
    assert_eq!(sdk.call_count(), 2);
}

#[tokio::test]
async fn test_runtime_disable_and_enable() {
    let sdk = MockAdSdk::new();
    let mut gateway = AdGateway::initialize(AdConfig::default(), &sdk).await.unwrap();

    gateway.disable();
    assert!(!gateway.is_enabled());
    assert_eq!(gateway.banner_unit_id(Platform::Ios), "");

    assert!(gateway.enable());
    assert_eq!(gateway.banner_unit_id(Platform::Ios), TEST_BANNER_IOS);
}

#[tokio::test]
async fn test_banner_unit_per_platform() {
    let sdk = MockAdSdk::new();
    let config = AdConfig::default().with_android_banner_id("ca-app-pub-1/2");
    let gateway = AdGateway::initialize(config, &sdk).await.unwrap();

    assert_eq!(gateway.banner_unit_id(Platform::Android), "ca-app-pub-1/2");
    assert_eq!(gateway.banner_unit_id(Platform::Ios), TEST_BANNER_IOS);
    assert_eq!(gateway.banner_unit_id(Platform::Other), "");

    let banner = AdBanner::mount(&gateway, Platform::Other, AdPosition::Bottom, BannerSize::Banner);
    assert!(!banner.is_visible());
    assert!(banner.request().is_none());
}

#[tokio::test]
async fn test_banner_load_failure_hides_and_notifies() {
    let sdk = MockAdSdk::new();
    sdk.fail_loads(AdError::LoadFailed("no fill".to_string()));
    let gateway = AdGateway::initialize(AdConfig::default(), &sdk).await.unwrap();

    let failures = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&failures);
    let mut banner = AdBanner::mount(&gateway, Platform::Android, AdPosition::Bottom, BannerSize::Banner)
        .with_callbacks(AdEventCallbacks {
            on_failed_to_load: Some(Box::new(move |err| seen.lock().unwrap().push(err.clone()))),
            ..AdEventCallbacks::default()
        });
    let request = banner.request().unwrap();
    assert_eq!(request.unit_id, TEST_BANNER_ANDROID);

    let err = sdk.load_banner(&request).await.unwrap_err();
    banner.handle_event(&AdEvent::FailedToLoad(err.clone()));

    assert!(!banner.is_visible());
    assert!(banner.request().is_none());
    assert_eq!(*failures.lock().unwrap(), vec![err]);
}

#[tokio::test]
async fn test_banner_callbacks_fire_in_order() {
    let sdk = MockAdSdk::new();
    let gateway = AdGateway::initialize(AdConfig::default(), &sdk).await.unwrap();

    let log = Arc::new(Mutex::new(Vec::new()));
    let recorder = |name: &'static str| {
        let log = Arc::clone(&log);
        Some(Box::new(move || log.lock().unwrap().push(name)) as Box<dyn FnMut() + Send>)
    };
    let mut banner = AdBanner::mount(&gateway, Platform::Ios, AdPosition::Top, BannerSize::LargeBanner)
        .with_callbacks(AdEventCallbacks {
            on_loaded: recorder("loaded"),
            on_impression: recorder("impression"),
            on_clicked: recorder("clicked"),
            on_opened: recorder("opened"),
            on_closed: recorder("closed"),
            ..AdEventCallbacks::default()
        });

    for event in [
        AdEvent::Loaded,
        AdEvent::Impression,
        AdEvent::Clicked,
        AdEvent::Opened,
        AdEvent::Closed,
    ] {
        banner.handle_event(&event);
    }

    assert!(banner.is_loaded());
    assert!(!banner.is_opened());
    assert_eq!(
        *log.lock().unwrap(),
        vec!["loaded", "impression", "clicked", "opened", "closed"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_simulated_sdk_loads_after_delay() {
    let sdk = SimulatedAdSdk::new(Duration::from_millis(800));
    let gateway = AdGateway::initialize(AdConfig::default(), &sdk).await.unwrap();
    let banner = AdBanner::mount(&gateway, Platform::Android, AdPosition::Bottom, BannerSize::Banner);

    let started = tokio::time::Instant::now();
    sdk.load_banner(&banner.request().unwrap()).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(800));
}
