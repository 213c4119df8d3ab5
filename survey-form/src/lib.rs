//! # survey-form
//!
//! A survey form whose follow-up fields depend on the chosen topic.
//! Backend-agnostic.
//!
//! The form has four fixed fields (name, email, topic, feedback) and two
//! extra fields for each topic. Only the selected topic's fields are shown
//! and required. A valid submit fetches follow-up questions for the topic
//! and then opens a modal that lists the collected answers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use survey_form::{Field, SessionConfig, SubmitOutcome};
//!
//! let mut session = SessionConfig::new().build_session()?;
//! session.edit(Field::FullName, "Ada Lovelace");
//! session.edit(Field::Email, "ada@example.com");
//! session.edit(Field::SurveyTopic, "Technology");
//! session.edit(Field::FavoriteLanguage, "Python");
//! session.edit(Field::YearsOfExperience, "5");
//! session.edit(Field::Feedback, "Great survey");
//!
//! match session.submit_and_wait().await {
//!     SubmitOutcome::Collected(response) => println!("{response:?}"),
//!     SubmitOutcome::Invalid(errors) => eprintln!("{} fields invalid", errors.len()),
//!     _ => {}
//! }
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement [`FormBackend`]:
//! - `survey-form-ratatui` - TUI form via ratatui
//! - `survey-form-html` - static HTML rendering of a [`FormView`]

// Re-export all types from survey-form-types
pub use survey_form_types::*;

mod validate;
pub use validate::{is_valid_email, parse_years, validate};

mod questions;
pub use questions::{QuestionTable, QuestionTableError};

mod fetch;
pub use fetch::{DEFAULT_FETCH_DELAY, DelayedQuestionSource, FetchError, QuestionSource};

mod state;
pub use state::{Action, FormState, ModalState, RequestToken};

mod view;
pub use view::{ControlView, FormView, ModalView};

mod session;
pub use session::{FetchCompletion, PendingFetch, SubmitOutcome, SurveySession};

mod config;
pub use config::SessionConfig;

mod backend;
pub use backend::{FormBackend, run};

// Test backend for driving sessions without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError, TestStep};
