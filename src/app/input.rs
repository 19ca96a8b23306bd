//! Keyboard input, dispatched by onboarding stage.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, AppMessage};
use crate::ads::AdEvent;
use crate::onboarding::{OnboardingStage, StageInput};
use crate::traits::Scheduler;

impl App {
    /// Handle a key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.flow.stage() {
            OnboardingStage::Splash => self.handle_splash_key(key),
            OnboardingStage::VibeCheck => self.handle_vibe_check_key(key),
            OnboardingStage::Verification => self.handle_verification_key(key),
            OnboardingStage::Home => self.handle_home_key(key, Instant::now()),
        }
    }

    fn handle_splash_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => self.complete_stage(StageInput::SplashFinished),
        }
    }

    fn handle_vibe_check_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.vibe_check.focus_prev(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.vibe_check.focus_next(),
            KeyCode::Char(' ') => self.vibe_check.toggle_focused(),
            KeyCode::Enter => {
                if let Some(vibes) = self.vibe_check.confirm() {
                    self.complete_stage(StageInput::VibesChosen(vibes));
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    fn handle_verification_key(&mut self, key: KeyEvent) {
        let verification = &mut self.verification;
        match key.code {
            KeyCode::Tab | KeyCode::Down => verification.focus_next(),
            KeyCode::BackTab | KeyCode::Up => verification.focus_prev(),
            KeyCode::Left => verification.cycle_college(false),
            KeyCode::Right => verification.cycle_college(true),
            KeyCode::Backspace => verification.backspace(),
            KeyCode::F(1) => verification.toggle_why_verify(),
            KeyCode::Esc => self.quit(),
            KeyCode::Enter => match verification.submit() {
                Ok(Some(timer)) => {
                    self.stage_timers
                        .schedule(timer.delay(), AppMessage::Verification(timer));
                }
                Ok(None) => {}
                Err(issue) => tracing::debug!("Verification submit refused: {:?}", issue),
            },
            KeyCode::Char(c) => verification.insert_char(c),
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('p') | KeyCode::Left => {
                if let Some(screen) = self.discovery.as_mut() {
                    screen.pass(now);
                }
            }
            KeyCode::Char('c') | KeyCode::Right | KeyCode::Enter => {
                if let Some(screen) = self.discovery.as_mut() {
                    screen.request_chat(now);
                }
            }
            KeyCode::Char('r') if self.load_error.is_some() => self.fetch_profiles(),
            KeyCode::Char('a') => self.toggle_ad(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    /// Open a loaded banner (a click) or close it if already open.
    fn toggle_ad(&mut self) {
        let Some(banner) = self.banner.as_ref() else {
            return;
        };
        if !banner.is_visible() || !banner.is_loaded() {
            return;
        }
        if banner.is_opened() {
            self.apply_ad_event(AdEvent::Closed);
        } else {
            self.apply_ad_event(AdEvent::Clicked);
            self.apply_ad_event(AdEvent::Opened);
        }
    }
}
