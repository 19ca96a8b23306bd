// Integration tests for the discovery screen controller with a manual scheduler

mod common;

use std::time::{Duration, Instant};

use clgmate::adapters::mock::ManualScheduler;
use clgmate::app::{AppMessage, DiscoveryScreen};
use clgmate::discovery::{CardVisual, DiscoverySession, SessionState, TRANSITION_DURATION};
use clgmate::traits::Scheduler;
use common::profiles;

fn screen(queue_len: usize, budget: u32) -> (DiscoveryScreen<ManualScheduler>, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    let screen = DiscoveryScreen::new(
        DiscoverySession::new(profiles(queue_len), budget),
        TRANSITION_DURATION,
        scheduler.clone(),
    );
    (screen, scheduler)
}

/// Deliver every pending transition-complete message.
fn fire(screen: &mut DiscoveryScreen<ManualScheduler>, scheduler: &ManualScheduler) -> usize {
    let mut advanced = 0;
    for message in scheduler.fire_all() {
        if let AppMessage::TransitionComplete(ticket) = message {
            if screen.on_transition_complete(ticket) {
                advanced += 1;
            }
        }
    }
    advanced
}

#[test]
fn test_pass_schedules_completion_after_transition_duration() {
    let (mut screen, scheduler) = screen(3, 3);
    let now = Instant::now();

    assert!(screen.pass(now));
    assert_eq!(scheduler.delays(), vec![TRANSITION_DURATION]);
    assert_eq!(screen.session().state(), SessionState::Animating);
    // Outgoing card stays on screen until completion.
    assert_eq!(screen.session().current_profile().map(|p| p.id.as_str()), Some("1"));

    assert_eq!(fire(&mut screen, &scheduler), 1);
    assert_eq!(screen.session().cursor(), 1);
    assert_eq!(screen.session().state(), SessionState::Idle);
}

#[test]
fn test_double_tap_schedules_one_advance() {
    let (mut screen, scheduler) = screen(3, 3);
    let now = Instant::now();

    assert!(screen.request_chat(now));
    assert!(!screen.request_chat(now));
    assert!(!screen.pass(now));
    assert_eq!(scheduler.pending(), 1);

    assert_eq!(fire(&mut screen, &scheduler), 1);
    assert_eq!(screen.session().cursor(), 1);
    assert_eq!(screen.session().chat_budget(), 2);
}

#[test]
fn test_card_fades_then_snaps_back() {
    let (mut screen, scheduler) = screen(2, 0);
    let start = Instant::now();
    assert_eq!(screen.card_visual(start), CardVisual::RESTING);

    screen.pass(start);
    let mid = screen.card_visual(start + Duration::from_millis(100));
    assert!(mid.opacity < 1.0 && mid.opacity > 0.0);
    assert!(mid.scale < 1.0 && mid.scale > 0.9);

    fire(&mut screen, &scheduler);
    assert!(!screen.is_animating());
    assert_eq!(
        screen.card_visual(start + Duration::from_millis(300)),
        CardVisual::RESTING
    );
}

#[test]
fn test_refused_chat_request_schedules_nothing() {
    let (mut screen, scheduler) = screen(2, 0);
    assert!(!screen.request_chat(Instant::now()));
    assert_eq!(scheduler.pending(), 0);
    assert!(!screen.is_animating());
}

#[test]
fn test_teardown_while_animating_cancels_completion() {
    let (mut screen, scheduler) = screen(3, 3);
    screen.pass(Instant::now());
    assert_eq!(scheduler.pending(), 1);

    drop(screen);

    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.cancelled(), 1);
    assert!(scheduler.fire_all().is_empty());
}

#[test]
fn test_completion_from_another_screen_is_ignored() {
    let (mut first, first_scheduler) = screen(3, 3);
    let (mut second, _second_scheduler) = screen(3, 3);
    first.pass(Instant::now());
    second.pass(Instant::now());

    // Route the first screen's completion to the second.
    for message in first_scheduler.fire_all() {
        if let AppMessage::TransitionComplete(ticket) = message {
            assert!(!second.on_transition_complete(ticket));
        }
    }
    assert_eq!(second.session().cursor(), 0);
    assert!(second.is_animating());
}

#[test]
fn test_walk_whole_queue() {
    let (mut screen, scheduler) = screen(3, 1);
    let now = Instant::now();

    screen.request_chat(now);
    fire(&mut screen, &scheduler);
    assert!(!screen.request_chat(now), "budget spent");
    screen.pass(now);
    fire(&mut screen, &scheduler);
    screen.pass(now);
    fire(&mut screen, &scheduler);

    assert_eq!(screen.session().state(), SessionState::Exhausted);
    assert!(!screen.pass(now));
    assert_eq!(scheduler.pending(), 0);
}
