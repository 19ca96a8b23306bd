/// One of the "what are you looking for" options on the vibe check screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VibeOption {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Hex accent, e.g. `#f59e0b`
    pub accent: &'static str,
    pub description: &'static str,
}

pub const VIBE_OPTIONS: [VibeOption; 4] = [
    VibeOption {
        id: "project-partner",
        label: "Project Partner",
        icon: "💡",
        accent: "#f59e0b",
        description: "Collaborate on projects",
    },
    VibeOption {
        id: "roommate",
        label: "Roommate",
        icon: "🏠",
        accent: "#3b82f6",
        description: "Find your living buddy",
    },
    VibeOption {
        id: "friend",
        label: "Friend",
        icon: "☕",
        accent: "#10b981",
        description: "Make new friends",
    },
    VibeOption {
        id: "something-more",
        label: "Something More",
        icon: "✨",
        accent: "#ec4899",
        description: "Seeking connection",
    },
];
