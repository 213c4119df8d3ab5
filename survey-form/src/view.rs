//! Presentation-agnostic view of the form.
//!
//! Backends render a [`FormView`] and never look at [`FormState`] directly,
//! so what is visible, and where errors go, is decided in one place.

use survey_form_types::{ControlKind, Field, FollowUpQuestion, ResponseValue};

use crate::{FormState, ModalState};

/// One visible input control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub field: Field,
    pub label: &'static str,
    pub kind: ControlKind,
    /// Current raw value.
    pub value: String,
    /// The first validation message for this field, shown beneath the control.
    pub error: Option<String>,
}

/// The collected-data modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub rows: Vec<(Field, ResponseValue)>,
}

/// Everything a presenter needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Visible controls in display order.
    pub controls: Vec<ControlView>,
    /// Fetched follow-up questions.
    pub additional_questions: Vec<FollowUpQuestion>,
    /// Present while the modal is open.
    pub modal: Option<ModalView>,
    pub fetch_pending: bool,
}

impl FormView {
    pub fn new(state: &FormState) -> Self {
        let values = state.values();
        let topic = values.topic();

        let controls = Field::ALL
            .into_iter()
            .filter(|field| field.is_visible_for(topic))
            .map(|field| ControlView {
                field,
                label: field.label(),
                kind: field.control(),
                value: values.get(field).to_string(),
                error: state.errors().first(field).map(str::to_string),
            })
            .collect();

        let modal = match (state.modal(), state.collected()) {
            (ModalState::Visible, Some(response)) => Some(ModalView {
                rows: response.rows(),
            }),
            _ => None,
        };

        Self {
            controls,
            additional_questions: state.follow_ups().to_vec(),
            modal,
            fetch_pending: state.is_fetch_pending(),
        }
    }

    pub fn control(&self, field: Field) -> Option<&ControlView> {
        self.controls.iter().find(|c| c.field == field)
    }

    pub fn is_visible(&self, field: Field) -> bool {
        self.control(field).is_some()
    }

    /// The "Additional Questions" section is only shown when there is something in it.
    pub fn shows_additional_questions(&self) -> bool {
        !self.additional_questions.is_empty()
    }
}
