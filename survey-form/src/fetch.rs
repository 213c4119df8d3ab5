//! Fetching follow-up questions for a topic.

use std::future::Future;
use std::time::Duration;

use survey_form_types::{Choice, FollowUpQuestion, SurveyTopic};
use tracing::debug;

use crate::QuestionTable;

/// Latency of the simulated network call.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(500);

/// Error type for question sources.
///
/// The built-in source never fails; other sources may.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Question source failed: {0}")]
    Source(String),
}

/// Trait for anything that can supply follow-up questions for a topic.
///
/// Each call is single-shot: it resolves once and cannot be cancelled or
/// restarted.
pub trait QuestionSource: Send + Sync + 'static {
    fn fetch(
        &self,
        topic: SurveyTopic,
    ) -> impl Future<Output = Result<Vec<FollowUpQuestion>, FetchError>> + Send;
}

/// Looks questions up in a [`QuestionTable`] after an artificial delay.
#[derive(Debug, Clone)]
pub struct DelayedQuestionSource {
    table: QuestionTable,
    delay: Duration,
}

impl DelayedQuestionSource {
    /// Create a source with the default delay.
    pub fn new(table: QuestionTable) -> Self {
        Self {
            table,
            delay: DEFAULT_FETCH_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn table(&self) -> &QuestionTable {
        &self.table
    }
}

impl QuestionSource for DelayedQuestionSource {
    fn fetch(
        &self,
        topic: SurveyTopic,
    ) -> impl Future<Output = Result<Vec<FollowUpQuestion>, FetchError>> + Send {
        let questions = self.table.lookup(topic.as_str());
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            debug!(%topic, count = questions.len(), ?delay, "follow-up questions resolved");
            Ok(questions)
        }
    }
}
