//! Ratatui form backend implementation for the FormBackend trait.
//!
//! Displays all visible fields at once in a scrollable form with keyboard
//! navigation. Follow-up fetches run on a tokio runtime while the user keeps
//! editing; their results come back over a channel.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend, style::Color};
use survey_form::{FetchCompletion, FormBackend, QuestionSource, SurveyError, SurveySession};
use thiserror::Error;
use tokio::{runtime::Runtime, sync::mpsc};
use tracing::{debug, info};

use crate::draw::draw_form;
use crate::input::{Command, InputState};

/// How often the event loop wakes up to check for finished fetches.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for the Ratatui form backend.
#[derive(Debug, Error)]
pub enum RatatuiFormError {
    /// User cancelled the form (Ctrl+C).
    #[error("Form cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/restore error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The async runtime for follow-up fetches could not be started.
    #[error("Runtime error: {0}")]
    Runtime(std::io::Error),
}

impl From<RatatuiFormError> for SurveyError {
    fn from(err: RatatuiFormError) -> Self {
        match err {
            RatatuiFormError::Cancelled => SurveyError::Cancelled,
            other => SurveyError::backend(other),
        }
    }
}

/// Color theme for the TUI form.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub selected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
            selected_bg: Color::DarkGray,
        }
    }
}

/// Ratatui form backend that displays all visible fields at once.
#[derive(Debug, Clone)]
pub struct RatatuiFormBackend {
    /// Title shown at the top of the form.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiFormBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiFormBackend {
    /// Create a new Ratatui form backend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Survey".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the form.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiFormError> {
        enable_raw_mode()
            .map_err(|e| RatatuiFormError::Terminal(format!("cannot enable raw mode: {e}")))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiFormError> {
        disable_raw_mode()
            .map_err(|e| RatatuiFormError::Terminal(format!("cannot disable raw mode: {e}")))?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop<S: QuestionSource>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        runtime: &Runtime,
        session: &mut SurveySession<S>,
    ) -> Result<(), RatatuiFormError> {
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<FetchCompletion>();
        let mut input = InputState::new(&session.view());

        loop {
            while let Ok(completion) = done_rx.try_recv() {
                let outcome = session.complete(completion);
                debug!(?outcome, "fetch completion applied");
            }

            let view = session.view();
            input.sync(&view);
            terminal.draw(|frame| draw_form(frame, &view, &mut input, &self.theme, &self.title))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match input.handle_key(key, &view) {
                Some(Command::Edit { field, value }) => session.edit(field, value),
                Some(Command::Submit) => match session.submit() {
                    Ok(pending) => {
                        let source = session.source();
                        let done_tx = done_tx.clone();
                        debug!(token = %pending.token, "spawning follow-up fetch");
                        runtime.spawn(async move {
                            let completion = pending.run(source.as_ref()).await;
                            // The receiver is gone once the form has closed.
                            let _ = done_tx.send(completion);
                        });
                    }
                    Err(errors) => {
                        if let Some(first) = errors.fields().next() {
                            input.focus_field(first, &session.view());
                        }
                    }
                },
                Some(Command::CloseModal) => session.close_modal(),
                Some(Command::Exit) => {
                    info!("form closed");
                    return Ok(());
                }
                Some(Command::Cancel) => return Err(RatatuiFormError::Cancelled),
                None => {}
            }
        }
    }
}

impl FormBackend for RatatuiFormBackend {
    type Error = RatatuiFormError;

    fn collect<S: QuestionSource>(
        &self,
        session: &mut SurveySession<S>,
    ) -> Result<(), Self::Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("survey-fetch")
            .enable_time()
            .build()
            .map_err(RatatuiFormError::Runtime)?;

        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, &runtime, session);
        self.restore_terminal(&mut terminal)?;

        // Pending fetches are dropped with the runtime.
        runtime.shutdown_background();
        result
    }
}
