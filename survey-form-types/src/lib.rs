//! Core types for the survey-form crate.
//!
//! This crate provides the foundational types for the survey form:
//! - `Field` and `ControlKind` - The fixed set of form fields and how they are entered
//! - `SurveyTopic` and the other `Choice` enums - Enumerated answers
//! - `FieldValues` - The raw snapshot of everything typed into the form
//! - `SurveyResponse` and `TopicDetails` - A validated submission
//! - `ValidationErrors` and `SurveyError` - Error reporting

mod choice;
pub use choice::{
    Choice, DietPreference, ExerciseFrequency, LANGUAGE_OPTIONS, Qualification, SurveyTopic,
};

mod field;
pub use field::{ControlKind, Field, UnknownField};

mod field_values;
pub use field_values::FieldValues;

mod response_value;
pub use response_value::ResponseValue;

mod response;
pub use response::{SurveyResponse, TopicDetails};

mod question;
pub use question::FollowUpQuestion;

mod error;
pub use error::{SurveyError, ValidationErrors};
