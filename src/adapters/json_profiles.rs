//! Discovery queue loaded from a JSON file.
//!
//! The file holds an array of profiles in the same camelCase shape the
//! mobile API uses:
//!
//! ```json
//! [{ "id": "1", "anonymousAvatar": "🎨", "vibeMatch": 85,
//!    "department": "CSE", "college": "LNCT",
//!    "publicInterests": ["Coding"], "sharedInterests": 3 }]
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::ProfileSourceError;
use crate::models::Profile;
use crate::traits::ProfileSource;

#[derive(Debug, Clone)]
pub struct JsonFileProfileSource {
    path: PathBuf,
}

impl JsonFileProfileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse and validate a profile list.
    pub fn parse(&self, raw: &str) -> Result<Vec<Profile>, ProfileSourceError> {
        let profiles: Vec<Profile> =
            serde_json::from_str(raw).map_err(|e| ProfileSourceError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let mut seen = HashSet::new();
        for profile in &profiles {
            profile.validate()?;
            if !seen.insert(profile.id.as_str()) {
                return Err(ProfileSourceError::InvalidProfile {
                    id: profile.id.clone(),
                    reason: "duplicate id".to_string(),
                });
            }
        }
        Ok(profiles)
    }
}

#[async_trait]
impl ProfileSource for JsonFileProfileSource {
    async fn fetch_queue(&self) -> Result<Vec<Profile>, ProfileSourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ProfileSourceError::Io {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        let profiles = self.parse(&raw)?;
        tracing::debug!("Loaded {} profiles from {}", profiles.len(), self.path.display());
        Ok(profiles)
    }
}
