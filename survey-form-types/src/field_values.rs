use std::collections::HashMap;

use crate::{Choice, Field, SurveyTopic};

/// Raw text of every field at one instant (the snapshot).
///
/// Values are stored exactly as entered. Nothing is derived across fields:
/// switching the topic leaves the fields of the previous topic untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: HashMap<Field, String>,
}

impl FieldValues {
    /// Create a snapshot with every field empty.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Get the raw value of a field. Unset fields read as empty.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Assign a field's value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Return a copy of this snapshot with one field assigned.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// The selected topic, if the topic field holds one of the listed options.
    pub fn topic(&self) -> Option<SurveyTopic> {
        SurveyTopic::parse(self.get(Field::SurveyTopic))
    }
}
