use serde::{Deserialize, Serialize};

/// A response to a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: i64,
    pub text: String,
    pub submitted: bool,
    pub correct: bool,
}

impl Answer {
    /// Unsubmitted, empty answer for the given question.
    pub fn pending(question_id: i64) -> Self {
        Self {
            question_id,
            text: String::new(),
            submitted: false,
            correct: false,
        }
    }
}
