//! Chat request budget.

/// Chat requests granted to a fresh session.
pub const DEFAULT_CHAT_BUDGET: u32 = 3;

/// At or below this many slots the status bar switches to the warning colour.
pub const LOW_BUDGET_THRESHOLD: u32 = 3;

/// Session-scoped count of chat requests left.
///
/// Fixed at session start and only ever spent; there is no refill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatBudget {
    remaining: u32,
}

impl ChatBudget {
    pub fn new(remaining: u32) -> Self {
        Self { remaining }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    pub fn is_low(&self) -> bool {
        self.remaining <= LOW_BUDGET_THRESHOLD
    }

    /// Spend one slot. Returns false and leaves the budget untouched when
    /// nothing is left.
    pub fn try_spend(&mut self) -> bool {
        match self.remaining.checked_sub(1) {
            Some(next) => {
                self.remaining = next;
                true
            }
            None => false,
        }
    }
}

impl Default for ChatBudget {
    fn default() -> Self {
        Self::new(DEFAULT_CHAT_BUDGET)
    }
}
