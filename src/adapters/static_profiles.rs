//! Built-in discovery queue.

use async_trait::async_trait;

use crate::error::ProfileSourceError;
use crate::models::Profile;
use crate::traits::ProfileSource;

/// Serves a fixed list of profiles.
#[derive(Debug, Clone)]
pub struct StaticProfileSource {
    profiles: Vec<Profile>,
}

impl StaticProfileSource {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// The three sample students shipped with the client.
    pub fn builtin() -> Self {
        Self::new(builtin_profiles())
    }
}

impl Default for StaticProfileSource {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl ProfileSource for StaticProfileSource {
    async fn fetch_queue(&self) -> Result<Vec<Profile>, ProfileSourceError> {
        Ok(self.profiles.clone())
    }
}

fn profile(
    id: &str,
    avatar: &str,
    score: u8,
    department: &str,
    interests: [&str; 3],
    shared: u32,
) -> Profile {
    Profile {
        id: id.to_string(),
        anonymous_avatar: avatar.to_string(),
        vibe_match_score: score,
        department: department.to_string(),
        college: "LNCT".to_string(),
        public_interests: interests.iter().map(|s| s.to_string()).collect(),
        shared_interest_count: shared,
    }
}

pub fn builtin_profiles() -> Vec<Profile> {
    vec![
        profile("1", "🎨", 85, "CSE", ["Coding", "Table Tennis", "Music"], 3),
        profile("2", "🎭", 92, "ECE", ["Photography", "Gaming", "Coffee"], 4),
        profile("3", "🎪", 78, "ME", ["Sports", "Travel", "Food"], 2),
    ]
}
