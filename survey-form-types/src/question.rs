use serde::{Deserialize, Serialize};

/// A topic-specific prompt shown after a successful submit.
///
/// Follow-up questions are informational only; they collect no answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    pub text: String,
}

impl FollowUpQuestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
