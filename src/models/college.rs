use serde::{Deserialize, Serialize};

/// Colleges offered in the verification picker.
pub const COLLEGES: [&str; 5] = [
    "LNCT Group of Colleges, Bhopal",
    "LNCT University, Bhopal",
    "LNCT Science Bhopal",
    "BITS Pilani",
    "Other",
];

/// Result of a completed college verification.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct VerifiedUser {
    pub username: String,
    pub college: String,
}
