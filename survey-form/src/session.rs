//! The submit flow of a form session.

use std::sync::Arc;

use survey_form_types::{
    Field, FieldValues, FollowUpQuestion, SurveyResponse, SurveyTopic, ValidationErrors,
};
use tracing::{debug, info, warn};

use crate::{Action, FetchError, FormState, FormView, QuestionSource, RequestToken, validate};

/// A fetch that was issued by an accepted submit and has not resolved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch {
    pub token: RequestToken,
    pub topic: SurveyTopic,
    pub response: SurveyResponse,
}

impl PendingFetch {
    /// Run the fetch against a source.
    pub async fn run<S: QuestionSource>(self, source: &S) -> FetchCompletion {
        let result = source.fetch(self.topic).await;
        FetchCompletion {
            token: self.token,
            response: self.response,
            result,
        }
    }
}

/// The result of a fetch, ready to be applied to the session that issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCompletion {
    pub token: RequestToken,
    pub response: SurveyResponse,
    pub result: Result<Vec<FollowUpQuestion>, FetchError>,
}

/// How a submit ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; no fetch was made.
    Invalid(ValidationErrors),

    /// The response was collected and the modal opened.
    Collected(SurveyResponse),

    /// A newer submit superseded this one; its result was dropped.
    Stale(RequestToken),

    /// The question source failed; the modal stays hidden.
    FetchFailed(FetchError),
}

impl SubmitOutcome {
    pub fn is_collected(&self) -> bool {
        matches!(self, Self::Collected(_))
    }
}

/// One in-memory form session: the form state plus the question source.
///
/// The session is owned by a single UI thread. Fetches may run elsewhere;
/// their results come back through [`SurveySession::complete`].
#[derive(Debug)]
pub struct SurveySession<S> {
    state: FormState,
    source: Arc<S>,
}

impl<S: QuestionSource> SurveySession<S> {
    pub fn new(source: S) -> Self {
        Self::with_shared_source(Arc::new(source))
    }

    pub fn with_shared_source(source: Arc<S>) -> Self {
        Self {
            state: FormState::new(),
            source,
        }
    }

    /// Pre-fill the form.
    pub fn with_values(mut self, values: FieldValues) -> Self {
        self.state = FormState::with_values(values);
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// A handle to the question source, for running fetches off the UI thread.
    pub fn source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    /// What a presenter should show right now.
    pub fn view(&self) -> FormView {
        FormView::new(&self.state)
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!(%field, "field edited");
        self.dispatch(Action::Edit { field, value });
    }

    pub fn close_modal(&mut self) {
        self.dispatch(Action::CloseModal);
    }

    /// Validate the current snapshot.
    ///
    /// On failure the errors are stored in the state and returned. On
    /// success a fetch is issued under a fresh token; the caller runs it and
    /// hands the completion back to [`SurveySession::complete`].
    pub fn submit(&mut self) -> Result<PendingFetch, ValidationErrors> {
        match validate(self.state.values()) {
            Ok(response) => {
                let token = self.state.next_token();
                let topic = response.topic();
                info!(%token, %topic, "submit accepted, fetching follow-up questions");
                self.dispatch(Action::FetchIssued(token));
                Ok(PendingFetch {
                    token,
                    topic,
                    response,
                })
            }
            Err(errors) => {
                warn!(
                    fields = ?errors.fields().map(|f| f.key()).collect::<Vec<_>>(),
                    "submit rejected"
                );
                self.dispatch(Action::Rejected(errors.clone()));
                Err(errors)
            }
        }
    }

    /// Apply a finished fetch.
    pub fn complete(&mut self, completion: FetchCompletion) -> SubmitOutcome {
        let FetchCompletion {
            token,
            response,
            result,
        } = completion;

        if !self.state.is_current(token) {
            debug!(%token, pending = ?self.state.pending(), "dropping stale fetch result");
            return SubmitOutcome::Stale(token);
        }

        match result {
            Ok(questions) => {
                info!(%token, count = questions.len(), "follow-up questions fetched");
                self.dispatch(Action::FetchResolved {
                    token,
                    questions,
                    response: response.clone(),
                });
                SubmitOutcome::Collected(response)
            }
            Err(err) => {
                warn!(%token, error = %err, "fetching follow-up questions failed");
                self.dispatch(Action::FetchFailed(token));
                SubmitOutcome::FetchFailed(err)
            }
        }
    }

    /// Submit, wait for the fetch, and apply it.
    pub async fn submit_and_wait(&mut self) -> SubmitOutcome {
        let pending = match self.submit() {
            Ok(pending) => pending,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };
        let source = self.source();
        let completion = pending.run(source.as_ref()).await;
        self.complete(completion)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{DelayedQuestionSource, ModalState, QuestionTable};
    use survey_form_types::{ResponseValue, TopicDetails};

    struct FailingSource;

    impl QuestionSource for FailingSource {
        async fn fetch(&self, _topic: SurveyTopic) -> Result<Vec<FollowUpQuestion>, FetchError> {
            Err(FetchError::Source("offline".to_string()))
        }
    }

    fn session() -> SurveySession<DelayedQuestionSource> {
        SurveySession::new(DelayedQuestionSource::new(QuestionTable::builtin().unwrap()))
    }

    fn fill_technology<S: QuestionSource>(session: &mut SurveySession<S>) {
        session.edit(Field::FullName, "Ada Lovelace");
        session.edit(Field::Email, "ada@example.com");
        session.edit(Field::SurveyTopic, "Technology");
        session.edit(Field::FavoriteLanguage, "Python");
        session.edit(Field::YearsOfExperience, "5");
        session.edit(Field::Feedback, "Great");
    }

    #[tokio::test(start_paused = true)]
    async fn valid_submit_opens_modal() {
        let mut session = session();
        fill_technology(&mut session);

        let outcome = session.submit_and_wait().await;
        let SubmitOutcome::Collected(response) = outcome else {
            panic!("expected collected, got {outcome:?}");
        };
        assert_eq!(
            response.value(Field::YearsOfExperience),
            Some(ResponseValue::Int(5))
        );
        assert_eq!(session.state().modal(), ModalState::Visible);
        assert!(!session.state().follow_ups().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_submit_does_not_fetch() {
        let mut session = session();
        fill_technology(&mut session);
        session.edit(Field::FullName, "");

        let outcome = session.submit_and_wait().await;
        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected invalid, got {outcome:?}");
        };
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::FullName]);
        assert!(!session.state().is_fetch_pending());
        assert_eq!(session.state().modal(), ModalState::Hidden);
        assert!(session.state().follow_ups().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_submits_keep_the_latest() {
        let mut session = session();
        fill_technology(&mut session);
        let first = session.submit().unwrap();

        session.edit(Field::YearsOfExperience, "7");
        let second = session.submit().unwrap();
        assert!(second.token > first.token);

        let source = session.source();
        let second_done = second.run(source.as_ref()).await;
        let first_done = first.run(source.as_ref()).await;

        // The newer fetch lands first; the older one must not overwrite it.
        assert!(session.complete(second_done).is_collected());
        assert_eq!(
            session.complete(first_done.clone()),
            SubmitOutcome::Stale(first_done.token)
        );
        let years = session
            .state()
            .collected()
            .and_then(|r| r.value(Field::YearsOfExperience));
        assert_eq!(years, Some(ResponseValue::Int(7)));
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_submit_supersedes_pending_fetch() {
        let mut session = session();
        fill_technology(&mut session);
        let pending = session.submit().unwrap();

        session.edit(Field::FullName, "");
        assert!(session.submit().is_err());

        let completion = pending.run(session.source().as_ref()).await;
        let token = completion.token;
        assert_eq!(session.complete(completion), SubmitOutcome::Stale(token));
        assert_eq!(session.state().modal(), ModalState::Hidden);
        assert!(session.state().collected().is_none());
        assert!(!session.state().is_fetch_pending());
        assert_eq!(
            session.view().control(Field::FullName).and_then(|c| c.error.as_deref()),
            Some("Full Name is required")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn edits_while_pending_are_kept() {
        let mut session = session();
        fill_technology(&mut session);
        let pending = session.submit().unwrap();

        session.edit(Field::Feedback, "changed my mind");
        let completion = pending.run(session.source().as_ref()).await;
        session.complete(completion);

        assert_eq!(session.state().values().get(Field::Feedback), "changed my mind");
        assert_eq!(
            session.state().collected().map(|r| r.feedback.as_str()),
            Some("Great")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_takes_the_configured_delay() {
        let source = DelayedQuestionSource::new(QuestionTable::builtin().unwrap())
            .with_delay(Duration::from_millis(250));
        let mut session = SurveySession::new(source);
        fill_technology(&mut session);

        let start = tokio::time::Instant::now();
        session.submit_and_wait().await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test]
    async fn failed_fetch_keeps_modal_hidden() {
        let mut session = SurveySession::new(FailingSource);
        fill_technology(&mut session);

        let outcome = session.submit_and_wait().await;
        assert_eq!(
            outcome,
            SubmitOutcome::FetchFailed(FetchError::Source("offline".to_string()))
        );
        assert_eq!(session.state().modal(), ModalState::Hidden);
        assert!(!session.state().is_fetch_pending());
        assert!(session.state().collected().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn resubmitting_same_snapshot_is_idempotent() {
        let mut session = session();
        fill_technology(&mut session);

        session.submit_and_wait().await;
        let first = session.view().modal.unwrap().rows;
        session.close_modal();
        session.submit_and_wait().await;
        let second = session.view().modal.unwrap().rows;

        assert_eq!(first, second);
    }

    #[test]
    fn prefilled_session() {
        let values = FieldValues::new().with(Field::FullName, "Ada");
        let session = session().with_values(values);
        assert_eq!(session.state().values().get(Field::FullName), "Ada");
    }

    #[test]
    fn pending_fetch_carries_the_topic() {
        let mut session = session();
        fill_technology(&mut session);
        let pending = session.submit().unwrap();
        assert_eq!(pending.topic, SurveyTopic::Technology);
        assert!(matches!(
            pending.response.details,
            TopicDetails::Technology { .. }
        ));
        assert!(session.state().is_current(pending.token));
    }
}
