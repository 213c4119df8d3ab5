//! Session configuration: fetch delay and where questions come from.

use std::path::PathBuf;
use std::time::Duration;

use crate::{
    DEFAULT_FETCH_DELAY, DelayedQuestionSource, QuestionTable, QuestionTableError, SurveySession,
};

/// Where the follow-up questions come from.
#[derive(Debug, Clone, Default)]
enum QuestionsFrom {
    #[default]
    Builtin,
    Path(PathBuf),
    Table(QuestionTable),
}

/// Settings for building a session.
///
/// ```rust,ignore
/// let session = SessionConfig::new()
///     .with_questions_path("questions.json")
///     .with_fetch_delay(Duration::from_millis(200))
///     .build_session()?;
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    fetch_delay: Duration,
    questions: QuestionsFrom,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionConfig {
    /// Built-in questions with the default delay.
    pub fn new() -> Self {
        Self {
            fetch_delay: DEFAULT_FETCH_DELAY,
            questions: QuestionsFrom::Builtin,
        }
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Load the question table from a JSON file.
    pub fn with_questions_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.questions = QuestionsFrom::Path(path.into());
        self
    }

    pub fn with_question_table(mut self, table: QuestionTable) -> Self {
        self.questions = QuestionsFrom::Table(table);
        self
    }

    pub fn fetch_delay(&self) -> Duration {
        self.fetch_delay
    }

    pub fn question_table(&self) -> Result<QuestionTable, QuestionTableError> {
        match &self.questions {
            QuestionsFrom::Builtin => QuestionTable::builtin(),
            QuestionsFrom::Path(path) => QuestionTable::from_path(path),
            QuestionsFrom::Table(table) => Ok(table.clone()),
        }
    }

    pub fn build_source(&self) -> Result<DelayedQuestionSource, QuestionTableError> {
        Ok(DelayedQuestionSource::new(self.question_table()?).with_delay(self.fetch_delay))
    }

    pub fn build_session(&self) -> Result<SurveySession<DelayedQuestionSource>, QuestionTableError> {
        Ok(SurveySession::new(self.build_source()?))
    }
}
