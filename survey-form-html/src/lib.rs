//! # survey-form-html
//!
//! Renders a survey-form [`FormView`](survey_form::FormView) as HTML: the
//! visible controls with their first error, the follow-up questions and the
//! collected-data modal.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use survey_form::{FormState, FormView};
//! use survey_form_html::{HtmlOptions, to_html};
//!
//! let view = FormView::new(&FormState::new());
//! let html = to_html(&view, &HtmlOptions::new().with_title("Survey"));
//! std::fs::write("survey.html", html)?;
//! ```

mod generator;

pub use generator::{HtmlOptions, to_html};
