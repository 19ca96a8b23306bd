use serde::{Deserialize, Serialize};

use crate::error::ProfileSourceError;

/// Upper bound of the vibe match percentage.
pub const MAX_VIBE_MATCH_SCORE: u8 = 100;

/// A candidate shown on the discovery card.
///
/// Profiles are read-only once they enter a session queue. Shared interests
/// are only ever exposed as a count; the labels stay hidden until a chat is
/// accepted, which happens outside this client.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub anonymous_avatar: String,
    #[serde(rename = "vibeMatch")]
    pub vibe_match_score: u8,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub public_interests: Vec<String>,
    #[serde(rename = "sharedInterests", default)]
    pub shared_interest_count: u32,
}

impl Profile {
    /// Check the fields a profile source cannot be trusted with.
    pub fn validate(&self) -> Result<(), ProfileSourceError> {
        if self.id.trim().is_empty() {
            return Err(ProfileSourceError::InvalidProfile {
                id: self.id.clone(),
                reason: "id must not be empty".to_string(),
            });
        }
        if self.vibe_match_score > MAX_VIBE_MATCH_SCORE {
            return Err(ProfileSourceError::InvalidProfile {
                id: self.id.clone(),
                reason: format!(
                    "vibe match {} is above {}",
                    self.vibe_match_score, MAX_VIBE_MATCH_SCORE
                ),
            });
        }
        Ok(())
    }

    /// "CSE • LNCT" line under the avatar.
    pub fn affiliation(&self) -> String {
        match (self.department.is_empty(), self.college.is_empty()) {
            (false, false) => format!("{} • {}", self.department, self.college),
            (false, true) => self.department.clone(),
            (true, false) => self.college.clone(),
            (true, true) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, score: u8) -> Profile {
        Profile {
            id: id.to_string(),
            anonymous_avatar: "🎨".to_string(),
            vibe_match_score: score,
            department: "CSE".to_string(),
            college: "LNCT".to_string(),
            public_interests: vec!["Coding".to_string()],
            shared_interest_count: 3,
        }
    }

    #[test]
    fn test_deserialize_camel_case_profile() {
        let json = r#"{
            "id": "7",
            "anonymousAvatar": "🎭",
            "vibeMatch": 92,
            "department": "ECE",
            "college": "LNCT",
            "publicInterests": ["Photography", "Gaming"],
            "sharedInterests": 4
        }"#;
        let parsed: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "7");
        assert_eq!(parsed.vibe_match_score, 92);
        assert_eq!(parsed.public_interests, vec!["Photography", "Gaming"]);
        assert_eq!(parsed.shared_interest_count, 4);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"id": "1", "anonymousAvatar": "🎪", "vibeMatch": 50}"#;
        let parsed: Profile = serde_json::from_str(json).unwrap();
        assert!(parsed.public_interests.is_empty());
        assert_eq!(parsed.shared_interest_count, 0);
        assert_eq!(parsed.affiliation(), "");
    }

    #[test]
    fn test_validate_rejects_score_above_100() {
        let err = profile("9", 101).validate().unwrap_err();
        assert!(matches!(err, ProfileSourceError::InvalidProfile { ref id, .. } if id == "9"));
    }

    #[test]
    fn test_validate_rejects_blank_id() {
        assert!(profile("  ", 50).validate().is_err());
        assert!(profile("1", 100).validate().is_ok());
    }

    #[test]
    fn test_affiliation_formatting() {
        assert_eq!(profile("1", 10).affiliation(), "CSE • LNCT");
        let mut p = profile("1", 10);
        p.college.clear();
        assert_eq!(p.affiliation(), "CSE");
    }
}
