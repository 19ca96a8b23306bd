mod college;
mod profile;
mod vibe;

pub use college::{VerifiedUser, COLLEGES};
pub use profile::{Profile, MAX_VIBE_MATCH_SCORE};
pub use vibe::{VibeOption, VIBE_OPTIONS};
