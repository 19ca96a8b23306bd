// Integration tests for the app: onboarding stages, home screen wiring, ads

mod common;

use std::time::Duration;

use clgmate::adapters::mock::AdSdkCall;
use clgmate::ads::{AdEvent, Platform};
use clgmate::app::AppMessage;
use clgmate::error::{AdError, ProfileSourceError};
use clgmate::onboarding::{OnboardingStage, StageInput, VerificationStep};
use clgmate::models::VerifiedUser;
use clgmate::traits::Scheduler;
use common::TestAppBuilder;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedReceiver;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut clgmate::app::App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

/// Receive the next message and hand it to the app.
async fn pump(app: &mut clgmate::app::App, rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
    let message = rx.recv().await.expect("message");
    app.handle_message(message.clone());
    message
}

/// Push the app from the vibe check through verification to home.
async fn onboard(app: &mut clgmate::app::App, rx: &mut UnboundedReceiver<AppMessage>) {
    app.handle_key_event(key(KeyCode::Char(' ')));
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.stage(), OnboardingStage::Verification);

    app.handle_key_event(key(KeyCode::Right));
    app.handle_key_event(key(KeyCode::Tab));
    type_text(app, "0101CS221");
    app.handle_key_event(key(KeyCode::Tab));
    type_text(app, "erp-pass");
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.verification.is_pending());

    pump(app, rx).await;
    assert_eq!(app.verification.step(), VerificationStep::Username);
    type_text(app, "password1");
    app.handle_key_event(key(KeyCode::Tab));
    type_text(app, "password1");
    app.handle_key_event(key(KeyCode::Enter));

    pump(app, rx).await;
    assert_eq!(app.verification.step(), VerificationStep::Success);
    pump(app, rx).await;
    assert_eq!(app.stage(), OnboardingStage::Home);
}

#[tokio::test(start_paused = true)]
async fn test_splash_times_out_into_vibe_check() {
    let (mut app, _sdk, _source) = TestAppBuilder::new().build().await;
    let mut rx = app.message_rx.take().unwrap();
    app.start();
    assert_eq!(app.stage(), OnboardingStage::Splash);

    let message = pump(&mut app, &mut rx).await;
    assert_eq!(message, AppMessage::SplashElapsed);
    assert_eq!(app.stage(), OnboardingStage::VibeCheck);
}

#[tokio::test(start_paused = true)]
async fn test_key_on_splash_skips_and_cancels_timer() {
    let (mut app, _sdk, _source) = TestAppBuilder::new().build().await;
    app.start();
    assert_eq!(app.stage_timers().pending(), 1);

    app.handle_key_event(key(KeyCode::Char('x')));
    assert_eq!(app.stage(), OnboardingStage::VibeCheck);
    assert_eq!(app.stage_timers().pending(), 0);
}

#[tokio::test]
async fn test_vibe_check_requires_a_selection() {
    let (mut app, _sdk, _source) = TestAppBuilder::new().skip_splash().build().await;
    app.start();

    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.stage(), OnboardingStage::VibeCheck);

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Char(' ')));
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.stage(), OnboardingStage::Verification);
    assert_eq!(app.flow.selected_vibes(), ["roommate".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_full_onboarding_reaches_home_and_loads_queue() {
    let (mut app, sdk, source) = TestAppBuilder::new().skip_splash().build().await;
    let mut rx = app.message_rx.take().unwrap();
    app.start();

    onboard(&mut app, &mut rx).await;
    let user = app.flow.user().expect("verified user");
    assert!(user.username.starts_with("vibe_"));
    assert_eq!(user.college, "LNCT Group of Colleges, Bhopal");

    // Banner load and queue fetch both report back.
    for _ in 0..2 {
        pump(&mut app, &mut rx).await;
    }
    assert_eq!(source.fetch_count(), 1);
    let screen = app.discovery.as_ref().expect("home screen");
    assert_eq!(screen.session().len(), 3);
    assert!(sdk
        .calls()
        .iter()
        .any(|call| matches!(call, AdSdkCall::LoadBanner(_))));
    let banner = app.banner.as_ref().expect("banner");
    assert!(banner.is_loaded());
    assert_eq!(app.ad_analytics.impressions, 1);
}

#[tokio::test(start_paused = true)]
async fn test_home_keys_drive_session() {
    let (mut app, _sdk, _source) = TestAppBuilder::new().without_ads().chat_budget(1).build().await;
    let mut rx = app.message_rx.take().unwrap();
    app.complete_stage(StageInput::SplashFinished);
    app.complete_stage(StageInput::VibesChosen(vec!["friend".to_string()]));
    app.complete_stage(StageInput::Verified(VerifiedUser {
        username: "vibe_abc1234".to_string(),
        college: "BITS Pilani".to_string(),
    }));
    assert_eq!(app.stage(), OnboardingStage::Home);
    pump(&mut app, &mut rx).await;

    app.handle_key_event(key(KeyCode::Char('c')));
    app.handle_key_event(key(KeyCode::Char('c')));
    let message = pump(&mut app, &mut rx).await;
    assert!(matches!(message, AppMessage::TransitionComplete(_)));

    let session = app.discovery.as_ref().unwrap().session();
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.chat_budget(), 0);

    // Budget spent: chat does nothing, pass still works.
    app.handle_key_event(key(KeyCode::Right));
    assert!(!app.discovery.as_ref().unwrap().is_animating());
    app.handle_key_event(key(KeyCode::Left));
    pump(&mut app, &mut rx).await;
    assert_eq!(app.discovery.as_ref().unwrap().session().cursor(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_closing_home_mid_transition_discards_completion() {
    let (mut app, _sdk, _source) = TestAppBuilder::new().without_ads().build().await;
    let mut rx = app.message_rx.take().unwrap();
    app.handle_message(AppMessage::ProfilesLoaded(common::profiles(2)));

    app.discovery.as_mut().unwrap().pass(std::time::Instant::now());
    app.close_home();

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(rx.try_recv().is_err());
    assert!(app.discovery.is_none());
}

#[tokio::test]
async fn test_profile_fetch_failure_then_retry() {
    let (mut app, _sdk, source) = TestAppBuilder::new().without_ads().build().await;
    let mut rx = app.message_rx.take().unwrap();
    source.set_result(Err(ProfileSourceError::InvalidProfile {
        id: "9".to_string(),
        reason: "id must not be empty".to_string(),
    }));

    app.fetch_profiles();
    pump(&mut app, &mut rx).await;
    assert!(app.load_error.is_some());
    assert!(app.discovery.is_none());

    source.set_result(Ok(common::profiles(1)));
    app.fetch_profiles();
    assert!(app.load_error.is_none());
    pump(&mut app, &mut rx).await;
    assert_eq!(source.fetch_count(), 2);
    assert!(app.discovery.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_banner_failure_hides_banner_and_keeps_session() {
    let (mut app, sdk, _source) = TestAppBuilder::new().chat_budget(2).build().await;
    let mut rx = app.message_rx.take().unwrap();
    sdk.fail_loads(AdError::LoadFailed("no fill".to_string()));
    app.flow.advance(StageInput::SplashFinished);
    app.flow.advance(StageInput::VibesChosen(vec!["friend".to_string()]));
    app.complete_stage(StageInput::Verified(VerifiedUser {
        username: "vibe_abc1234".to_string(),
        college: "Other".to_string(),
    }));

    for _ in 0..2 {
        pump(&mut app, &mut rx).await;
    }

    let banner = app.banner.as_ref().unwrap();
    assert!(!banner.is_visible());
    assert_eq!(app.ad_analytics.failures, 1);
    let session = app.discovery.as_ref().unwrap().session();
    assert_eq!(session.chat_budget(), 2);
    assert_eq!(session.cursor(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_no_banner_request_on_desktop_platform() {
    let (mut app, sdk, _source) = TestAppBuilder::new().platform(Platform::Other).build().await;
    let mut rx = app.message_rx.take().unwrap();
    app.flow.advance(StageInput::SplashFinished);
    app.flow.advance(StageInput::VibesChosen(vec!["friend".to_string()]));
    app.complete_stage(StageInput::Verified(VerifiedUser {
        username: "vibe_abc1234".to_string(),
        college: "Other".to_string(),
    }));
    pump(&mut app, &mut rx).await;

    assert!(!app.banner.as_ref().unwrap().is_visible());
    assert!(!sdk
        .calls()
        .iter()
        .any(|call| matches!(call, AdSdkCall::LoadBanner(_))));
}

#[tokio::test(start_paused = true)]
async fn test_ad_toggle_records_click() {
    let (mut app, _sdk, _source) = TestAppBuilder::new().skip_splash().build().await;
    let mut rx = app.message_rx.take().unwrap();
    app.complete_stage(StageInput::VibesChosen(vec!["friend".to_string()]));
    app.complete_stage(StageInput::Verified(VerifiedUser {
        username: "vibe_abc1234".to_string(),
        college: "Other".to_string(),
    }));
    for _ in 0..2 {
        pump(&mut app, &mut rx).await;
    }

    app.handle_key_event(key(KeyCode::Char('a')));
    assert!(app.banner.as_ref().unwrap().is_opened());
    assert_eq!(app.ad_analytics.clicks, 1);
    app.handle_key_event(key(KeyCode::Char('a')));
    assert!(!app.banner.as_ref().unwrap().is_opened());

    assert_eq!(app.ad_analytics.clicks, 1);

    // Once the banner fails it stays hidden and the toggle does nothing.
    app.handle_message(AppMessage::Ad(AdEvent::FailedToLoad(AdError::LoadFailed(
        "expired".to_string(),
    ))));
    assert!(!app.banner.as_ref().unwrap().is_visible());
    app.handle_key_event(key(KeyCode::Char('a')));
    assert!(!app.banner.as_ref().unwrap().is_opened());
    assert_eq!(app.ad_analytics.failures, 1);
}

#[tokio::test]
async fn test_ad_events_without_banner_are_dropped() {
    let (mut app, _sdk, _source) = TestAppBuilder::new().build().await;
    app.handle_message(AppMessage::Ad(AdEvent::Loaded));
    assert!(app.banner.is_none());
    assert_eq!(app.ad_analytics.impressions, 0);
}

#[tokio::test]
async fn test_ctrl_c_quits_from_any_stage() {
    let (mut app, _sdk, _source) = TestAppBuilder::new().skip_splash().build().await;
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}
