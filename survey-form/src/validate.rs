//! Validation of a form snapshot into a [`SurveyResponse`].
//!
//! Every field is checked independently and all failures are reported
//! together. Only the questions of the selected topic are required; the
//! fields of other topics are ignored even when they hold values.

use std::sync::LazyLock;

use regex::Regex;
use survey_form_types::{
    Choice, DietPreference, ExerciseFrequency, Field, FieldValues, Qualification, SurveyResponse,
    SurveyTopic, TopicDetails, ValidationErrors,
};

// No leading, trailing or doubled dots in the local part, and it must not end
// with an apostrophe.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_'+\-]+\.)*[A-Za-z0-9_'+\-]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email regex should compile")
});

/// Validate a snapshot.
///
/// Returns the typed response when every rule passes, otherwise the
/// messages for each failing field.
pub fn validate(values: &FieldValues) -> Result<SurveyResponse, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let full_name = required_text(values, Field::FullName, &mut errors);
    let email = check_email(values.get(Field::Email), &mut errors);
    let topic = check_topic(values.get(Field::SurveyTopic), &mut errors);
    let feedback = required_text(values, Field::Feedback, &mut errors);
    let details = topic.and_then(|topic| check_details(topic, values, &mut errors));

    match (full_name, email, details, feedback) {
        (Some(full_name), Some(email), Some(details), Some(feedback)) if errors.is_empty() => {
            Ok(SurveyResponse {
                full_name,
                email,
                details,
                feedback,
            })
        }
        _ => Err(errors),
    }
}

/// Check whether a string is a syntactically valid email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Convert the years-of-experience text into an integer.
///
/// Surrounding whitespace is ignored. Empty or unparsable input yields `None`.
pub fn parse_years(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn required_message(field: Field) -> String {
    format!("{} is required", field.label())
}

fn required_text(values: &FieldValues, field: Field, errors: &mut ValidationErrors) -> Option<String> {
    let value = values.get(field);
    if value.is_empty() {
        errors.push(field, required_message(field));
        return None;
    }
    Some(value.to_string())
}

fn check_email(email: &str, errors: &mut ValidationErrors) -> Option<String> {
    if !is_valid_email(email) {
        errors.push(Field::Email, "Invalid email address");
        return None;
    }
    Some(email.to_string())
}

fn check_topic(topic: &str, errors: &mut ValidationErrors) -> Option<SurveyTopic> {
    let parsed = SurveyTopic::parse(topic);
    if parsed.is_none() {
        errors.push(Field::SurveyTopic, "Select a valid survey topic");
    }
    parsed
}

fn required_choice<T: Choice>(
    values: &FieldValues,
    field: Field,
    errors: &mut ValidationErrors,
) -> Option<T> {
    let value = values.get(field);
    if value.is_empty() {
        errors.push(field, required_message(field));
        return None;
    }
    let parsed = T::parse(value);
    if parsed.is_none() {
        errors.push(
            field,
            format!("Select a valid {}", field.label().to_lowercase()),
        );
    }
    parsed
}

fn check_years(raw: &str, errors: &mut ValidationErrors) -> Option<i64> {
    let field = Field::YearsOfExperience;
    if raw.trim().is_empty() {
        errors.push(field, required_message(field));
        return None;
    }
    match parse_years(raw) {
        Some(years) if years < 0 => {
            errors.push(field, format!("{} cannot be negative", field.label()));
            None
        }
        Some(years) => Some(years),
        None => {
            errors.push(field, format!("{} must be a whole number", field.label()));
            None
        }
    }
}

fn check_details(
    topic: SurveyTopic,
    values: &FieldValues,
    errors: &mut ValidationErrors,
) -> Option<TopicDetails> {
    match topic {
        SurveyTopic::Technology => {
            let favorite_language = required_text(values, Field::FavoriteLanguage, errors);
            let years_of_experience = check_years(values.get(Field::YearsOfExperience), errors);
            Some(TopicDetails::Technology {
                favorite_language: favorite_language?,
                years_of_experience: years_of_experience?,
            })
        }
        SurveyTopic::Health => {
            let exercise_frequency =
                required_choice::<ExerciseFrequency>(values, Field::ExerciseFrequency, errors);
            let diet_preference =
                required_choice::<DietPreference>(values, Field::DietPreference, errors);
            Some(TopicDetails::Health {
                exercise_frequency: exercise_frequency?,
                diet_preference: diet_preference?,
            })
        }
        SurveyTopic::Education => {
            let highest_qualification =
                required_choice::<Qualification>(values, Field::HighestQualification, errors);
            let field_of_study = required_text(values, Field::FieldOfStudy, errors);
            Some(TopicDetails::Education {
                highest_qualification: highest_qualification?,
                field_of_study: field_of_study?,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_form_types::ResponseValue;

    fn base() -> FieldValues {
        FieldValues::new()
            .with(Field::FullName, "Ada Lovelace")
            .with(Field::Email, "ada@example.com")
            .with(Field::Feedback, "Loved it")
    }

    fn technology() -> FieldValues {
        base()
            .with(Field::SurveyTopic, "Technology")
            .with(Field::FavoriteLanguage, "Python")
            .with(Field::YearsOfExperience, "5")
    }

    fn error_fields(errors: &ValidationErrors) -> Vec<Field> {
        errors.fields().collect()
    }

    #[test]
    fn valid_technology_response() {
        let response = validate(&technology()).unwrap();
        assert_eq!(response.topic(), SurveyTopic::Technology);
        assert_eq!(
            response.value(Field::YearsOfExperience),
            Some(ResponseValue::Int(5))
        );
    }

    #[test]
    fn each_empty_base_field_is_reported_alone() {
        for field in [Field::FullName, Field::Feedback] {
            let errors = validate(&technology().with(field, "")).unwrap_err();
            assert_eq!(error_fields(&errors), vec![field]);
            assert_eq!(errors.first(field), Some(required_message(field).as_str()));
        }
    }

    #[test]
    fn base_messages() {
        let errors = validate(&FieldValues::new()).unwrap_err();
        assert_eq!(errors.first(Field::FullName), Some("Full Name is required"));
        assert_eq!(errors.first(Field::Email), Some("Invalid email address"));
        assert_eq!(
            errors.first(Field::SurveyTopic),
            Some("Select a valid survey topic")
        );
        assert_eq!(errors.first(Field::Feedback), Some("Feedback is required"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn invalid_email_is_scoped_to_email() {
        let errors = validate(&technology().with(Field::Email, "not-an-email")).unwrap_err();
        assert_eq!(error_fields(&errors), vec![Field::Email]);
    }

    #[test]
    fn whitespace_only_name_is_not_empty() {
        assert!(validate(&technology().with(Field::FullName, " ")).is_ok());
    }

    #[test]
    fn email_syntax() {
        for ok in ["a@b.co", "first.last+tag@mail.example.org", "o'neil@example.ie"] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in [
            "",
            "not-an-email",
            "a@b",
            "@example.com",
            "a b@example.com",
            "a..b@example.com",
            ".a@example.com",
            "a@example.c",
            "'@example.com",
            "ab'@example.com",
            "a.@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn unknown_topic() {
        for topic in ["Sports", ""] {
            let errors = validate(&base().with(Field::SurveyTopic, topic)).unwrap_err();
            assert_eq!(error_fields(&errors), vec![Field::SurveyTopic]);
            assert_eq!(
                errors.first(Field::SurveyTopic),
                Some("Select a valid survey topic")
            );
        }
    }

    #[test]
    fn technology_fields_are_required() {
        let values = base().with(Field::SurveyTopic, "Technology");
        let errors = validate(&values).unwrap_err();
        assert_eq!(
            error_fields(&errors),
            vec![Field::FavoriteLanguage, Field::YearsOfExperience]
        );
        assert_eq!(
            errors.first(Field::YearsOfExperience),
            Some("Years of Experience is required")
        );
    }

    #[test]
    fn years_must_be_a_non_negative_integer() {
        let errors = validate(&technology().with(Field::YearsOfExperience, "five")).unwrap_err();
        assert_eq!(
            errors.first(Field::YearsOfExperience),
            Some("Years of Experience must be a whole number")
        );

        let errors = validate(&technology().with(Field::YearsOfExperience, "-1")).unwrap_err();
        assert_eq!(
            errors.first(Field::YearsOfExperience),
            Some("Years of Experience cannot be negative")
        );

        let response = validate(&technology().with(Field::YearsOfExperience, " 12 ")).unwrap();
        assert_eq!(
            response.value(Field::YearsOfExperience),
            Some(ResponseValue::Int(12))
        );
    }

    #[test]
    fn parse_years_conversion() {
        assert_eq!(parse_years("5"), Some(5));
        assert_eq!(parse_years(""), None);
        assert_eq!(parse_years("5.5"), None);
        assert_eq!(parse_years("abc"), None);
    }

    #[test]
    fn health_choices_are_checked() {
        let values = base()
            .with(Field::SurveyTopic, "Health")
            .with(Field::ExerciseFrequency, "Yearly");
        let errors = validate(&values).unwrap_err();
        assert_eq!(
            errors.first(Field::ExerciseFrequency),
            Some("Select a valid exercise frequency")
        );
        assert_eq!(
            errors.first(Field::DietPreference),
            Some("Diet Preference is required")
        );
    }

    #[test]
    fn valid_health_and_education() {
        let health = base()
            .with(Field::SurveyTopic, "Health")
            .with(Field::ExerciseFrequency, "Weekly")
            .with(Field::DietPreference, "Vegan");
        assert_eq!(
            validate(&health).unwrap().details,
            TopicDetails::Health {
                exercise_frequency: ExerciseFrequency::Weekly,
                diet_preference: DietPreference::Vegan,
            }
        );

        let education = base()
            .with(Field::SurveyTopic, "Education")
            .with(Field::HighestQualification, "Master's")
            .with(Field::FieldOfStudy, "Mathematics");
        assert_eq!(
            validate(&education).unwrap().details,
            TopicDetails::Education {
                highest_qualification: Qualification::Masters,
                field_of_study: "Mathematics".to_string(),
            }
        );
    }

    #[test]
    fn other_topic_fields_never_fail() {
        let values = technology()
            .with(Field::ExerciseFrequency, "Yearly")
            .with(Field::HighestQualification, "Kindergarten");
        let response = validate(&values).unwrap();
        assert_eq!(response.rows().len(), 6);
    }

    #[test]
    fn all_failures_are_reported_together() {
        let values = FieldValues::new()
            .with(Field::Email, "nope")
            .with(Field::SurveyTopic, "Education");
        let errors = validate(&values).unwrap_err();
        assert_eq!(
            error_fields(&errors),
            vec![
                Field::FullName,
                Field::Email,
                Field::HighestQualification,
                Field::FieldOfStudy,
                Field::Feedback,
            ]
        );
    }
}
