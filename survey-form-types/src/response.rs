use serde::Serialize;

use crate::{
    Choice, DietPreference, ExerciseFrequency, Field, Qualification, ResponseValue, SurveyTopic,
};

/// A validated submission.
///
/// The topic-specific answers live in [`TopicDetails`], so a response can
/// only carry the fields of the topic that was actually selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub full_name: String,
    pub email: String,
    #[serde(flatten)]
    pub details: TopicDetails,
    pub feedback: String,
}

/// The answers to the questions revealed by the selected topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "surveyTopic", rename_all_fields = "camelCase")]
pub enum TopicDetails {
    Technology {
        favorite_language: String,
        years_of_experience: i64,
    },
    Health {
        exercise_frequency: ExerciseFrequency,
        diet_preference: DietPreference,
    },
    Education {
        highest_qualification: Qualification,
        field_of_study: String,
    },
}

impl TopicDetails {
    pub fn topic(&self) -> SurveyTopic {
        match self {
            Self::Technology { .. } => SurveyTopic::Technology,
            Self::Health { .. } => SurveyTopic::Health,
            Self::Education { .. } => SurveyTopic::Education,
        }
    }

    fn rows(&self) -> [(Field, ResponseValue); 2] {
        match self {
            Self::Technology {
                favorite_language,
                years_of_experience,
            } => [
                (Field::FavoriteLanguage, favorite_language.as_str().into()),
                (Field::YearsOfExperience, ResponseValue::Int(*years_of_experience)),
            ],
            Self::Health {
                exercise_frequency,
                diet_preference,
            } => [
                (Field::ExerciseFrequency, exercise_frequency.as_str().into()),
                (Field::DietPreference, diet_preference.as_str().into()),
            ],
            Self::Education {
                highest_qualification,
                field_of_study,
            } => [
                (Field::HighestQualification, highest_qualification.as_str().into()),
                (Field::FieldOfStudy, field_of_study.as_str().into()),
            ],
        }
    }
}

impl SurveyResponse {
    pub fn topic(&self) -> SurveyTopic {
        self.details.topic()
    }

    /// The collected-data table: every answered field with its value, in display order.
    pub fn rows(&self) -> Vec<(Field, ResponseValue)> {
        let mut rows: Vec<(Field, ResponseValue)> = vec![
            (Field::FullName, self.full_name.as_str().into()),
            (Field::Email, self.email.as_str().into()),
            (Field::SurveyTopic, self.topic().as_str().into()),
        ];
        rows.extend(self.details.rows());
        rows.push((Field::Feedback, self.feedback.as_str().into()));
        rows
    }

    /// Get the collected value of a single field.
    pub fn value(&self, field: Field) -> Option<ResponseValue> {
        self.rows()
            .into_iter()
            .find_map(|(f, value)| (f == field).then_some(value))
    }
}
