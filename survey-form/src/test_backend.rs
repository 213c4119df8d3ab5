//! Test backend for driving a form session without user interaction.
//!
//! `TestBackend` replays a scripted list of edits, submits and modal
//! dismissals against a session.
//!
//! # Example
//!
//! ```rust,ignore
//! use survey_form::{Field, TestBackend, run};
//!
//! let backend = TestBackend::new()
//!     .with_edit(Field::FullName, "Ada Lovelace")
//!     .with_edit(Field::Email, "ada@example.com")
//!     .with_edit(Field::SurveyTopic, "Health")
//!     .with_edit(Field::ExerciseFrequency, "Daily")
//!     .with_edit(Field::DietPreference, "Vegan")
//!     .with_edit(Field::Feedback, "Nice form")
//!     .with_submit();
//!
//! let response = run(&backend, &mut session)?.unwrap();
//! assert_eq!(response.full_name, "Ada Lovelace");
//! ```

use survey_form_types::{Field, SurveyError};

use crate::{FormBackend, QuestionSource, SurveySession};

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestStep {
    Edit { field: Field, value: String },
    /// Submit and wait for the fetch to resolve.
    Submit,
    CloseModal,
    /// Abort the session like a user pressing Ctrl+C.
    Cancel,
}

/// A backend that replays pre-configured steps.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    steps: Vec<TestStep>,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Session cancelled")]
    Cancelled,
}

impl From<TestBackendError> for SurveyError {
    fn from(err: TestBackendError) -> Self {
        match err {
            TestBackendError::Cancelled => SurveyError::Cancelled,
            other => SurveyError::backend(other),
        }
    }
}

impl TestBackend {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn with_step(mut self, step: TestStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn with_edit(self, field: Field, value: impl Into<String>) -> Self {
        self.with_step(TestStep::Edit {
            field,
            value: value.into(),
        })
    }

    pub fn with_submit(self) -> Self {
        self.with_step(TestStep::Submit)
    }

    pub fn with_close_modal(self) -> Self {
        self.with_step(TestStep::CloseModal)
    }

    pub fn with_cancel(self) -> Self {
        self.with_step(TestStep::Cancel)
    }

    pub fn steps(&self) -> &[TestStep] {
        &self.steps
    }
}

impl FormBackend for TestBackend {
    type Error = TestBackendError;

    fn collect<S: QuestionSource>(
        &self,
        session: &mut SurveySession<S>,
    ) -> Result<(), Self::Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;

        for step in &self.steps {
            match step {
                TestStep::Edit { field, value } => session.edit(*field, value.clone()),
                TestStep::Submit => {
                    runtime.block_on(session.submit_and_wait());
                }
                TestStep::CloseModal => session.close_modal(),
                TestStep::Cancel => return Err(TestBackendError::Cancelled),
            }
        }

        Ok(())
    }
}
