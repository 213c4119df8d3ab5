//! The form state and its reducer.
//!
//! [`FormState`] is an immutable value. Every change goes through
//! [`FormState::reduce`], so the snapshot used on submit and the effect of
//! each user action can be checked without any UI.

use std::fmt;

use survey_form_types::{Field, FieldValues, FollowUpQuestion, SurveyResponse, ValidationErrors};

/// Tags one follow-up fetch.
///
/// Tokens increase with every accepted submit. Only a resolution carrying
/// the latest token is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visibility of the collected-data modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

/// Everything that can happen to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The user changed a field.
    Edit { field: Field, value: String },

    /// A submit failed validation.
    Rejected(ValidationErrors),

    /// A submit passed validation and a fetch was started.
    FetchIssued(RequestToken),

    /// A fetch finished.
    FetchResolved {
        token: RequestToken,
        questions: Vec<FollowUpQuestion>,
        response: SurveyResponse,
    },

    /// A fetch failed.
    FetchFailed(RequestToken),

    /// The user dismissed the modal.
    CloseModal,
}

/// State of one form session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: FieldValues,
    errors: ValidationErrors,
    follow_ups: Vec<FollowUpQuestion>,
    modal: ModalState,
    collected: Option<SurveyResponse>,
    pending: Option<RequestToken>,
    last_token: RequestToken,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-filled values.
    pub fn with_values(values: FieldValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// The current snapshot.
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Errors from the last rejected submit.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn follow_ups(&self) -> &[FollowUpQuestion] {
        &self.follow_ups
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// The last successfully collected response. Kept when the modal closes.
    pub fn collected(&self) -> Option<&SurveyResponse> {
        self.collected.as_ref()
    }

    /// The token of the fetch currently awaited, if any.
    pub fn pending(&self) -> Option<RequestToken> {
        self.pending
    }

    pub fn is_fetch_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The token the next accepted submit will use.
    pub fn next_token(&self) -> RequestToken {
        self.last_token.next()
    }

    /// Whether a resolution with this token would be applied.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.pending == Some(token)
    }

    /// Apply an action, producing the next state.
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::Edit { field, value } => {
                self.values.set(field, value);
            }
            Action::Rejected(errors) => {
                // A rejected submit supersedes any fetch still in flight.
                self.errors = errors;
                self.pending = None;
            }
            Action::FetchIssued(token) => {
                self.errors = ValidationErrors::new();
                self.last_token = self.last_token.max(token);
                self.pending = Some(token);
            }
            Action::FetchResolved {
                token,
                questions,
                response,
            } => {
                if self.is_current(token) {
                    self.follow_ups = questions;
                    self.collected = Some(response);
                    self.modal = ModalState::Visible;
                    self.pending = None;
                }
            }
            Action::FetchFailed(token) => {
                if self.is_current(token) {
                    self.pending = None;
                }
            }
            Action::CloseModal => {
                self.modal = ModalState::Hidden;
            }
        }
        self
    }
}
