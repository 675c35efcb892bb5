// src/models/result.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One completed attempt, as stored in the result ledger.
/// Field order matches the CSV header `name,email,Role,score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub name: String,
    pub email: String,

    /// Name of the quiz taken.
    #[serde(rename = "Role")]
    pub role: String,

    pub score: u64,
}

impl ResultRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        score: u64,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            score,
        }
    }

    /// Integer comparison against a threshold that may be negative.
    pub fn qualifies(&self, threshold: i64) -> bool {
        u64::try_from(threshold).map_or(true, |t| self.score >= t)
    }
}

/// DTO for starting a quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct StartQuizRequest {
    #[validate(length(min = 1, max = 100))]
    pub quiz_name: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

/// A candidate's answers. Never persisted directly.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Submission {
    #[validate(length(min = 1, max = 100))]
    pub quiz_name: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,

    /// Key: question index (`"0"` or form-style `"q0"`).
    /// Value: the selected option text.
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

/// DTO for deriving the shortlist.
#[derive(Debug, Deserialize)]
pub struct ShortlistRequest {
    pub qualifying_score: i64,
}
