// Integration tests for the discovery session state machine

mod common;

use clgmate::discovery::{DiscoverySession, SessionState, TransitionPhase};
use common::profiles;
use proptest::prelude::*;

/// Run an advance to completion.
fn complete(session: &mut DiscoverySession, ticket: Option<clgmate::discovery::TransitionTicket>) {
    let ticket = ticket.expect("advance should be accepted");
    assert!(session.complete_transition(ticket));
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_three_chat_requests_exhaust_queue_and_budget() {
    let mut session = DiscoverySession::new(profiles(3), 3);

    for _ in 0..3 {
        let ticket = session.request_chat();
        complete(&mut session, ticket);
    }

    assert_eq!(session.cursor(), 3);
    assert_eq!(session.chat_budget(), 0);
    assert_eq!(session.state(), SessionState::Exhausted);
    assert!(session.current_profile().is_none());
}

#[test]
fn test_chat_request_with_empty_budget_is_noop_but_pass_works() {
    let mut session = DiscoverySession::new(profiles(3), 0);

    assert!(session.request_chat().is_none());
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.state(), SessionState::Idle);

    let ticket = session.pass();
    complete(&mut session, ticket);
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.chat_budget(), 0);
}

#[test]
fn test_pass_on_single_profile_exhausts_without_spending() {
    let mut session = DiscoverySession::new(profiles(1), 1);

    let ticket = session.pass();
    complete(&mut session, ticket);

    assert_eq!(session.cursor(), 1);
    assert_eq!(session.state(), SessionState::Exhausted);
    assert_eq!(session.chat_budget(), 1);
}

#[test]
fn test_chat_request_during_pass_animation_is_ignored() {
    let mut session = DiscoverySession::new(profiles(3), 3);

    let ticket = session.pass().expect("pass accepted");
    assert!(session.request_chat().is_none());
    assert_eq!(session.chat_budget(), 3);

    assert!(session.complete_transition(ticket));
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.chat_budget(), 3);
}

#[test]
fn test_exhausted_session_ignores_everything() {
    let mut session = DiscoverySession::new(profiles(1), 2);
    let ticket = session.request_chat();
    complete(&mut session, ticket);

    assert!(session.pass().is_none());
    assert!(session.request_chat().is_none());
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.chat_budget(), 1);
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Op {
    Pass,
    RequestChat,
    Complete,
    CompleteStale,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Pass),
        Just(Op::RequestChat),
        Just(Op::Complete),
        Just(Op::CompleteStale),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_session_invariants_hold(
        queue_len in 0usize..6,
        budget in 0u32..5,
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut session = DiscoverySession::new(profiles(queue_len), budget);
        let mut in_flight = None;
        let mut stale = None;

        for op in ops {
            let before_cursor = session.cursor();
            let before_budget = session.chat_budget();
            let before_phase = session.phase();
            let was_exhausted = session.is_exhausted();

            match op {
                Op::Pass => {
                    let ticket = session.pass();
                    // Never touches the budget.
                    prop_assert_eq!(session.chat_budget(), before_budget);
                    if before_phase == TransitionPhase::Animating || was_exhausted {
                        prop_assert!(ticket.is_none());
                    }
                    if let Some(t) = ticket {
                        in_flight = Some(t);
                    }
                }
                Op::RequestChat => {
                    let ticket = session.request_chat();
                    match ticket {
                        Some(t) => {
                            prop_assert_eq!(session.chat_budget(), before_budget - 1);
                            in_flight = Some(t);
                        }
                        None => {
                            prop_assert_eq!(session.chat_budget(), before_budget);
                            prop_assert_eq!(session.phase(), before_phase);
                        }
                    }
                    if before_budget == 0 || before_phase == TransitionPhase::Animating {
                        prop_assert!(ticket.is_none());
                    }
                }
                Op::Complete => {
                    if let Some(t) = in_flight.take() {
                        prop_assert!(session.complete_transition(t));
                        stale = Some(t);
                    }
                }
                Op::CompleteStale => {
                    if let Some(t) = stale {
                        prop_assert!(!session.complete_transition(t));
                    }
                }
            }

            // Cursor is monotonic, moves by at most one, stays in bounds.
            prop_assert!(session.cursor() >= before_cursor);
            prop_assert!(session.cursor() - before_cursor <= 1);
            prop_assert!(session.cursor() <= session.len());
            // Budget only ever goes down.
            prop_assert!(session.chat_budget() <= before_budget);

            if was_exhausted {
                prop_assert!(session.is_exhausted());
                prop_assert_eq!(session.cursor(), before_cursor);
                prop_assert_eq!(session.chat_budget(), before_budget);
            }
        }
    }

    #[test]
    fn prop_cursor_counts_completed_advances(queue_len in 1usize..8, budget in 0u32..8) {
        let mut session = DiscoverySession::new(profiles(queue_len), budget);
        let mut chats = 0;
        while !session.is_exhausted() {
            let ticket = match session.request_chat() {
                Some(t) => {
                    chats += 1;
                    t
                }
                None => session.pass().expect("idle session accepts pass"),
            };
            prop_assert!(session.complete_transition(ticket));
        }
        prop_assert_eq!(session.cursor(), queue_len);
        prop_assert_eq!(chats, budget.min(queue_len as u32));
        prop_assert_eq!(session.chat_budget(), budget - chats);
    }
}
