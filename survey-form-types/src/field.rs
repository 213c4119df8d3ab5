use std::fmt;
use std::str::FromStr;

use crate::{DietPreference, ExerciseFrequency, LANGUAGE_OPTIONS, Qualification, SurveyTopic};

/// One of the fields of the survey form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Email,
    SurveyTopic,
    FavoriteLanguage,
    YearsOfExperience,
    ExerciseFrequency,
    DietPreference,
    HighestQualification,
    FieldOfStudy,
    Feedback,
}

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Single-line text input.
    Text,
    /// Single-line input holding an email address.
    Email,
    /// Numeric input (entered as text, parsed on submit).
    Number,
    /// Pick one of a fixed list of options.
    Select(&'static [&'static str]),
    /// Multi-line text.
    TextArea,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 10] = [
        Field::FullName,
        Field::Email,
        Field::SurveyTopic,
        Field::FavoriteLanguage,
        Field::YearsOfExperience,
        Field::ExerciseFrequency,
        Field::DietPreference,
        Field::HighestQualification,
        Field::FieldOfStudy,
        Field::Feedback,
    ];

    /// The key used for this field in collected data and markup.
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::SurveyTopic => "surveyTopic",
            Self::FavoriteLanguage => "favoriteLanguage",
            Self::YearsOfExperience => "yearsOfExperience",
            Self::ExerciseFrequency => "exerciseFrequency",
            Self::DietPreference => "dietPreference",
            Self::HighestQualification => "highestQualification",
            Self::FieldOfStudy => "fieldOfStudy",
            Self::Feedback => "feedback",
        }
    }

    /// Human-readable label shown next to the control.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::SurveyTopic => "Survey Topic",
            Self::FavoriteLanguage => "Favorite Programming Language",
            Self::YearsOfExperience => "Years of Experience",
            Self::ExerciseFrequency => "Exercise Frequency",
            Self::DietPreference => "Diet Preference",
            Self::HighestQualification => "Highest Qualification",
            Self::FieldOfStudy => "Field of Study",
            Self::Feedback => "Feedback",
        }
    }

    pub fn control(self) -> ControlKind {
        match self {
            Self::FullName | Self::FieldOfStudy => ControlKind::Text,
            Self::Email => ControlKind::Email,
            Self::SurveyTopic => ControlKind::Select(SurveyTopic::OPTIONS),
            Self::FavoriteLanguage => ControlKind::Select(LANGUAGE_OPTIONS),
            Self::YearsOfExperience => ControlKind::Number,
            Self::ExerciseFrequency => ControlKind::Select(ExerciseFrequency::OPTIONS),
            Self::DietPreference => ControlKind::Select(DietPreference::OPTIONS),
            Self::HighestQualification => ControlKind::Select(Qualification::OPTIONS),
            Self::Feedback => ControlKind::TextArea,
        }
    }

    /// The topic that reveals this field, or `None` for fields that are always shown.
    pub fn topic(self) -> Option<SurveyTopic> {
        match self {
            Self::FavoriteLanguage | Self::YearsOfExperience => Some(SurveyTopic::Technology),
            Self::ExerciseFrequency | Self::DietPreference => Some(SurveyTopic::Health),
            Self::HighestQualification | Self::FieldOfStudy => Some(SurveyTopic::Education),
            Self::FullName | Self::Email | Self::SurveyTopic | Self::Feedback => None,
        }
    }

    /// Whether this field is shown while `topic` is selected.
    pub fn is_visible_for(self, topic: Option<SurveyTopic>) -> bool {
        match self.topic() {
            None => true,
            Some(governing) => topic == Some(governing),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
