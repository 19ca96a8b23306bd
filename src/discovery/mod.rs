//! Discovery feed session.
//!
//! [`DiscoverySession`] owns the profile queue, the cursor, the chat budget
//! and the transition phase. It never touches a clock: advancing returns a
//! [`TransitionTicket`] and the cursor only moves when that ticket is handed
//! back through [`DiscoverySession::complete_transition`]. Whoever owns the
//! session decides how long the card animation takes ([`CardAnimation`]).

mod budget;
mod session;
mod transition;

pub use budget::{ChatBudget, DEFAULT_CHAT_BUDGET, LOW_BUDGET_THRESHOLD};
pub use session::{AdvanceKind, DiscoverySession, SessionState, TransitionPhase, TransitionTicket};
pub use transition::{CardAnimation, CardVisual, TRANSITION_DURATION};
