//! Vibe check: pick what you are looking for on campus.

use crate::models::{VibeOption, VIBE_OPTIONS};

/// Steps shown in the onboarding progress dots.
pub const ONBOARDING_STEPS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct VibeCheckState {
    focused: usize,
    /// Selected option ids, in the order they were picked
    selected: Vec<&'static str>,
}

impl VibeCheckState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &'static [VibeOption] {
        &VIBE_OPTIONS
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % VIBE_OPTIONS.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + VIBE_OPTIONS.len() - 1) % VIBE_OPTIONS.len();
    }

    pub fn toggle_focused(&mut self) {
        self.toggle(VIBE_OPTIONS[self.focused].id);
    }

    /// Select or deselect an option by id. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        let Some(option) = VIBE_OPTIONS.iter().find(|o| o.id == id) else {
            return;
        };
        if let Some(pos) = self.selected.iter().position(|s| *s == option.id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(option.id);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| *s == id)
    }

    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn can_continue(&self) -> bool {
        !self.selected.is_empty()
    }

    /// The selection to hand to the flow, if at least one vibe is picked.
    pub fn confirm(&self) -> Option<Vec<String>> {
        self.can_continue()
            .then(|| self.selected.iter().map(|s| s.to_string()).collect())
    }
}
