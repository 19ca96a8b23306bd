//! Discovery session state machine.
//!
//! ```text
//!            pass / request_chat (guards hold)
//!   Idle ───────────────────────────────────────▶ Animating
//!    ▲                                               │
//!    │  complete_transition, cursor + 1 < len        │
//!    └───────────────────────────────────────────────┤
//!                                                    │ complete_transition, cursor + 1 == len
//!                                                    ▼
//!                                                Exhausted
//! ```
//!
//! Every rejected input is a silent no-op: the UI is expected to disable the
//! controls, and double taps during an animation must not queue a second
//! advance.

use uuid::Uuid;

use super::budget::ChatBudget;
use crate::models::Profile;

/// Whether a card advance is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Animating,
}

/// Observable state, with exhaustion derived from the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Animating,
    Exhausted,
}

/// What started the current advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceKind {
    Pass,
    ChatRequest,
}

/// Proof that an advance was started by a particular session.
///
/// Only the ticket of the in-flight advance completes it; tickets from an
/// earlier advance or another session are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket {
    session_id: Uuid,
    sequence: u64,
}

#[derive(Debug, Clone, Copy)]
struct PendingAdvance {
    ticket: TransitionTicket,
    kind: AdvanceKind,
}

/// Profile queue traversal with a chat-request budget.
#[derive(Debug, Clone)]
pub struct DiscoverySession {
    id: Uuid,
    queue: Vec<Profile>,
    cursor: usize,
    budget: ChatBudget,
    phase: TransitionPhase,
    pending: Option<PendingAdvance>,
    next_sequence: u64,
}

impl DiscoverySession {
    /// Start a session over a fixed queue.
    pub fn new(queue: Vec<Profile>, chat_budget: u32) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(
            "Discovery session {} started: {} profiles, {} chat slots",
            id,
            queue.len(),
            chat_budget
        );
        Self {
            id,
            queue,
            cursor: 0,
            budget: ChatBudget::new(chat_budget),
            phase: TransitionPhase::Idle,
            pending: None,
            next_sequence: 0,
        }
    }

    // ========================================================================
    // Advance operations
    // ========================================================================

    /// Skip the current profile. Never touches the chat budget.
    ///
    /// Returns the ticket to complete once the card animation finishes, or
    /// `None` if the session is animating or exhausted.
    pub fn pass(&mut self) -> Option<TransitionTicket> {
        if !self.accepts_input() {
            tracing::debug!("pass ignored in state {:?}", self.state());
            return None;
        }
        Some(self.begin(AdvanceKind::Pass))
    }

    /// Send a chat request to the current profile and advance.
    ///
    /// Spends exactly one chat slot when accepted. Refused without any state
    /// change when the budget is empty, the session is animating, or the
    /// queue is exhausted.
    pub fn request_chat(&mut self) -> Option<TransitionTicket> {
        if !self.accepts_input() {
            tracing::debug!("chat request ignored in state {:?}", self.state());
            return None;
        }
        if !self.budget.try_spend() {
            tracing::debug!("chat request refused: no chat slots left");
            return None;
        }
        Some(self.begin(AdvanceKind::ChatRequest))
    }

    /// Finish the in-flight advance and move the cursor by one.
    ///
    /// Returns true if the ticket matched and the cursor moved.
    pub fn complete_transition(&mut self, ticket: TransitionTicket) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                self.phase = TransitionPhase::Idle;
                self.cursor += 1;
                tracing::debug!(
                    "{:?} completed: cursor {}/{}, {} chat slots left",
                    pending.kind,
                    self.cursor,
                    self.queue.len(),
                    self.budget.remaining()
                );
                true
            }
            _ => {
                tracing::debug!("stale transition ticket ignored");
                false
            }
        }
    }

    fn begin(&mut self, kind: AdvanceKind) -> TransitionTicket {
        let ticket = TransitionTicket {
            session_id: self.id,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.phase = TransitionPhase::Animating;
        self.pending = Some(PendingAdvance { ticket, kind });
        tracing::debug!("{:?} started at cursor {}", kind, self.cursor);
        ticket
    }

    fn accepts_input(&self) -> bool {
        self.phase == TransitionPhase::Idle && !self.is_exhausted()
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// The profile on screen, or `None` once exhausted.
    ///
    /// While animating this is still the outgoing profile.
    pub fn current_profile(&self) -> Option<&Profile> {
        self.queue.get(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.queue.len()
    }

    pub fn state(&self) -> SessionState {
        if self.is_exhausted() {
            SessionState::Exhausted
        } else if self.phase == TransitionPhase::Animating {
            SessionState::Animating
        } else {
            SessionState::Idle
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn chat_budget(&self) -> u32 {
        self.budget.remaining()
    }

    pub fn budget(&self) -> ChatBudget {
        self.budget
    }

    /// Whether the chat control should be enabled right now.
    pub fn can_request_chat(&self) -> bool {
        self.accepts_input() && !self.budget.is_empty()
    }

    /// The kind of the advance in flight, if any.
    pub fn pending_advance(&self) -> Option<AdvanceKind> {
        self.pending.map(|p| p.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles(n: usize) -> Vec<Profile> {
        (0..n)
            .map(|i| Profile {
                id: format!("{}", i + 1),
                anonymous_avatar: "🎨".to_string(),
                vibe_match_score: 80,
                department: "CSE".to_string(),
                college: "LNCT".to_string(),
                public_interests: vec!["Music".to_string()],
                shared_interest_count: 2,
            })
            .collect()
    }

    #[test]
    fn test_new_session_is_idle_at_first_profile() {
        let session = DiscoverySession::new(profiles(3), 3);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.current_profile().map(|p| p.id.as_str()), Some("1"));
        assert!(session.can_request_chat());
    }

    #[test]
    fn test_empty_queue_starts_exhausted() {
        let mut session = DiscoverySession::new(Vec::new(), 3);
        assert!(session.is_exhausted());
        assert!(session.current_profile().is_none());
        assert!(session.pass().is_none());
        assert!(session.request_chat().is_none());
        assert_eq!(session.chat_budget(), 3);
    }

    #[test]
    fn test_cursor_moves_only_on_completion() {
        let mut session = DiscoverySession::new(profiles(2), 1);
        let ticket = session.pass().unwrap();
        assert_eq!(session.state(), SessionState::Animating);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.current_profile().map(|p| p.id.as_str()), Some("1"));

        assert!(session.complete_transition(ticket));
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_chat_request_spends_budget_at_trigger_time() {
        let mut session = DiscoverySession::new(profiles(2), 2);
        let ticket = session.request_chat().unwrap();
        assert_eq!(session.chat_budget(), 1);
        assert_eq!(session.pending_advance(), Some(AdvanceKind::ChatRequest));
        session.complete_transition(ticket);
        assert_eq!(session.chat_budget(), 1);
    }

    #[test]
    fn test_ticket_completes_only_once() {
        let mut session = DiscoverySession::new(profiles(3), 0);
        let ticket = session.pass().unwrap();
        assert!(session.complete_transition(ticket));
        assert!(!session.complete_transition(ticket));
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_ticket_from_other_session_is_ignored() {
        let mut first = DiscoverySession::new(profiles(3), 0);
        let mut second = DiscoverySession::new(profiles(3), 0);
        let foreign = first.pass().unwrap();
        let _own = second.pass().unwrap();

        assert!(!second.complete_transition(foreign));
        assert_eq!(second.cursor(), 0);
        assert_eq!(second.state(), SessionState::Animating);
    }

    #[test]
    fn test_chat_control_disabled_while_animating() {
        let mut session = DiscoverySession::new(profiles(3), 3);
        session.pass();
        assert!(!session.can_request_chat());
    }
}
