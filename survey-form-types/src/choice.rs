use std::fmt;

use serde::{Deserialize, Serialize};

/// An answer picked from a fixed, ordered list of options.
///
/// Options are matched by their display string, exactly as a select
/// control submits them.
pub trait Choice: Sized + Copy + 'static {
    /// All options, in display order.
    const ALL: &'static [Self];

    /// Display string of this option (also the submitted value).
    fn as_str(self) -> &'static str;

    /// Parse an option from its display string.
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

/// Options offered for the favorite programming language.
///
/// The value itself is stored as free text.
pub const LANGUAGE_OPTIONS: &[&str] = &["JavaScript", "Python", "Java", "C#"];

/// The topic of the survey. Selecting one reveals its conditional questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurveyTopic {
    Technology,
    Health,
    Education,
}

impl SurveyTopic {
    pub const OPTIONS: &'static [&'static str] = &["Technology", "Health", "Education"];
}

impl Choice for SurveyTopic {
    const ALL: &'static [Self] = &[Self::Technology, Self::Health, Self::Education];

    fn as_str(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Health => "Health",
            Self::Education => "Education",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseFrequency {
    Daily,
    Weekly,
    Monthly,
    Rarely,
}

impl ExerciseFrequency {
    pub const OPTIONS: &'static [&'static str] = &["Daily", "Weekly", "Monthly", "Rarely"];
}

impl Choice for ExerciseFrequency {
    const ALL: &'static [Self] = &[Self::Daily, Self::Weekly, Self::Monthly, Self::Rarely];

    fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Rarely => "Rarely",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietPreference {
    Vegetarian,
    Vegan,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
}

impl DietPreference {
    pub const OPTIONS: &'static [&'static str] = &["Vegetarian", "Vegan", "Non-Vegetarian"];
}

impl Choice for DietPreference {
    const ALL: &'static [Self] = &[Self::Vegetarian, Self::Vegan, Self::NonVegetarian];

    fn as_str(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::NonVegetarian => "Non-Vegetarian",
        }
    }
}

/// Highest completed qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualification {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Bachelor's")]
    Bachelors,
    #[serde(rename = "Master's")]
    Masters,
    #[serde(rename = "PhD")]
    Phd,
}

impl Qualification {
    pub const OPTIONS: &'static [&'static str] = &["High School", "Bachelor's", "Master's", "PhD"];
}

impl Choice for Qualification {
    const ALL: &'static [Self] = &[Self::HighSchool, Self::Bachelors, Self::Masters, Self::Phd];

    fn as_str(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::Bachelors => "Bachelor's",
            Self::Masters => "Master's",
            Self::Phd => "PhD",
        }
    }
}

macro_rules! display_as_choice {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_choice!(SurveyTopic, ExerciseFrequency, DietPreference, Qualification);
