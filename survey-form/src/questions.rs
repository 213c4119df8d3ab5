//! The static lookup table of follow-up questions.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use survey_form_types::FollowUpQuestion;

const BUILTIN_QUESTIONS: &str = include_str!("../questions/mock_questions.json");

/// Error type for loading a question table.
#[derive(Debug, thiserror::Error)]
pub enum QuestionTableError {
    #[error("Failed to read question table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed question table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Maps a topic name to its ordered follow-up questions.
///
/// The JSON form is an object keyed by topic name:
///
/// ```json
/// { "Technology": [{ "text": "Which tools do you use?" }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct QuestionTable {
    topics: HashMap<String, Vec<FollowUpQuestion>>,
}

impl QuestionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the crate, with entries for every topic.
    pub fn builtin() -> Result<Self, QuestionTableError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    pub fn from_json(json: &str) -> Result<Self, QuestionTableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QuestionTableError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set the questions for a topic, replacing any existing entry.
    pub fn with_topic(
        mut self,
        topic: impl Into<String>,
        questions: impl IntoIterator<Item = FollowUpQuestion>,
    ) -> Self {
        self.topics
            .insert(topic.into(), questions.into_iter().collect());
        self
    }

    /// Remove a topic's entry.
    pub fn without_topic(mut self, topic: &str) -> Self {
        self.topics.remove(topic);
        self
    }

    /// Questions for a topic. Topics without an entry have no questions.
    pub fn lookup(&self, topic: &str) -> Vec<FollowUpQuestion> {
        self.topics.get(topic).cloned().unwrap_or_default()
    }
}
