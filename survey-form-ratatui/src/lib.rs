//! # survey-form-ratatui
//!
//! Ratatui form backend for survey-form.
//!
//! This backend displays every visible field at once in a scrollable TUI
//! form. Choosing a survey topic reveals that topic's two questions. After a
//! valid submit the follow-up questions are fetched in the background and a
//! modal lists the collected answers.
//!
//! Keys: Tab/Shift+Tab or arrows to move, Space/Enter to pick an option,
//! F10 or Enter on the button to submit, Esc to leave, Ctrl+C to abort.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use survey_form::{SessionConfig, run};
//! use survey_form_ratatui::RatatuiFormBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = SessionConfig::new().build_session()?;
//!     let backend = RatatuiFormBackend::new().with_title("Customer Survey");
//!     if let Some(response) = run(&backend, &mut session)? {
//!         println!("{response:#?}");
//!     }
//!     Ok(())
//! }
//! ```

mod backend;
mod draw;
mod input;

pub use backend::{RatatuiFormBackend, RatatuiFormError, Theme};
