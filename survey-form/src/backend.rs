use survey_form_types::{SurveyError, SurveyResponse};

use crate::{QuestionSource, SurveySession};

/// Trait for backend implementations that present a form session.
///
/// A backend owns the interaction loop. It feeds user edits and submits into
/// the session, runs the fetches the session issues, and renders
/// [`SurveySession::view`] after every change. It returns when the user
/// leaves the form.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<SurveyError>;

    /// Drive the session until the user is done.
    ///
    /// Returns `Err` on cancellation or backend failure.
    fn collect<S: QuestionSource>(
        &self,
        session: &mut SurveySession<S>,
    ) -> Result<(), Self::Error>;
}

/// Run a session with a backend and return the last collected response.
///
/// `Ok(None)` means the user left without a successful submit.
pub fn run<B, S>(
    backend: &B,
    session: &mut SurveySession<S>,
) -> Result<Option<SurveyResponse>, SurveyError>
where
    B: FormBackend,
    S: QuestionSource,
{
    backend.collect(session).map_err(Into::into)?;
    Ok(session.state().collected().cloned())
}
