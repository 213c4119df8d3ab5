//! Keyboard handling for the form.
//!
//! [`InputState`] holds what the session does not: which control has focus,
//! the text cursor, the highlighted option of a select and the scroll
//! offset. Key presses are turned into [`Command`]s for the session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use survey_form::{ControlKind, ControlView, Field, FormView};

/// What a key press asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Edit { field: Field, value: String },
    Submit,
    CloseModal,
    /// Leave the form normally.
    Exit,
    /// Abort with Ctrl+C.
    Cancel,
}

/// Where keyboard focus is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Control(Field),
    Submit,
}

#[derive(Debug, Clone)]
pub(crate) struct InputState {
    pub(crate) focus: Focus,
    /// Cursor position in characters.
    pub(crate) cursor: usize,
    /// Highlighted option index of the focused select.
    pub(crate) highlight: usize,
    pub(crate) scroll_offset: u16,
}

impl InputState {
    pub(crate) fn new(view: &FormView) -> Self {
        let mut state = Self {
            focus: Focus::Submit,
            cursor: 0,
            highlight: 0,
            scroll_offset: 0,
        };
        if let Some(first) = view.controls.first() {
            state.focus_control(first);
        }
        state
    }

    pub(crate) fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Control(field) => Some(field),
            Focus::Submit => None,
        }
    }

    fn focused<'a>(&self, view: &'a FormView) -> Option<&'a ControlView> {
        self.focused_field().and_then(|field| view.control(field))
    }

    fn focus_control(&mut self, control: &ControlView) {
        self.focus = Focus::Control(control.field);
        self.cursor = control.value.chars().count();
        self.highlight = match control.kind {
            ControlKind::Select(options) => options
                .iter()
                .position(|o| *o == control.value)
                .unwrap_or(0),
            _ => 0,
        };
    }

    /// Put focus on a field, for example the first one that failed validation.
    pub(crate) fn focus_field(&mut self, field: Field, view: &FormView) {
        if let Some(control) = view.control(field) {
            self.focus_control(control);
        }
    }

    /// Move focus back onto a visible control if its field was hidden.
    pub(crate) fn sync(&mut self, view: &FormView) {
        if let Focus::Control(field) = self.focus
            && !view.is_visible(field)
        {
            match view.controls.first() {
                Some(first) => self.focus_control(first),
                None => self.focus = Focus::Submit,
            }
        }
    }

    pub(crate) fn next(&mut self, view: &FormView) {
        let Focus::Control(field) = self.focus else {
            return;
        };
        let idx = view.controls.iter().position(|c| c.field == field);
        match idx.and_then(|i| view.controls.get(i + 1)) {
            Some(next) => self.focus_control(next),
            None => self.focus = Focus::Submit,
        }
    }

    pub(crate) fn prev(&mut self, view: &FormView) {
        let prev = match self.focus {
            Focus::Submit => view.controls.last(),
            Focus::Control(field) => view
                .controls
                .iter()
                .position(|c| c.field == field)
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| view.controls.get(i)),
        };
        if let Some(prev) = prev {
            self.focus_control(prev);
        }
    }

    fn is_select(&self, view: &FormView) -> bool {
        self.focused(view)
            .is_some_and(|c| matches!(c.kind, ControlKind::Select(_)))
    }

    fn move_highlight(&mut self, view: &FormView, down: bool) {
        if let Some(ControlKind::Select(options)) = self.focused(view).map(|c| c.kind)
            && !options.is_empty()
        {
            let len = options.len();
            self.highlight = if down {
                (self.highlight + 1) % len
            } else {
                (self.highlight + len - 1) % len
            };
        }
    }

    fn choose_highlighted(&self, view: &FormView) -> Option<Command> {
        let control = self.focused(view)?;
        let ControlKind::Select(options) = control.kind else {
            return None;
        };
        let option = options.get(self.highlight)?;
        Some(Command::Edit {
            field: control.field,
            value: (*option).to_string(),
        })
    }

    fn insert(&mut self, view: &FormView, c: char) -> Option<Command> {
        let control = self.focused(view)?;
        match control.kind {
            ControlKind::Select(_) => return None,
            ControlKind::Number if !(c.is_ascii_digit() || c == '-') => return None,
            _ => {}
        }
        let mut value = control.value.clone();
        let cursor = self.cursor.min(value.chars().count());
        value.insert(byte_index(&value, cursor), c);
        self.cursor = cursor + 1;
        Some(Command::Edit {
            field: control.field,
            value,
        })
    }

    fn backspace(&mut self, view: &FormView) -> Option<Command> {
        let control = self.focused(view)?;
        let cursor = self.cursor.min(control.value.chars().count());
        if cursor == 0 || matches!(control.kind, ControlKind::Select(_)) {
            return None;
        }
        let mut value = control.value.clone();
        value.remove(byte_index(&value, cursor - 1));
        self.cursor = cursor - 1;
        Some(Command::Edit {
            field: control.field,
            value,
        })
    }

    fn delete(&mut self, view: &FormView) -> Option<Command> {
        let control = self.focused(view)?;
        let cursor = self.cursor.min(control.value.chars().count());
        if cursor == control.value.chars().count()
            || matches!(control.kind, ControlKind::Select(_))
        {
            return None;
        }
        let mut value = control.value.clone();
        value.remove(byte_index(&value, cursor));
        Some(Command::Edit {
            field: control.field,
            value,
        })
    }

    fn move_cursor(&mut self, view: &FormView, to: CursorMove) {
        let Some(len) = self.focused(view).map(|c| c.value.chars().count()) else {
            return;
        };
        self.cursor = match to {
            CursorMove::Left => self.cursor.min(len).saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(len),
            CursorMove::Home => 0,
            CursorMove::End => len,
        };
    }

    /// Handle one key press against the current view.
    pub(crate) fn handle_key(&mut self, key: KeyEvent, view: &FormView) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Cancel);
        }

        if view.modal.is_some() {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Command::CloseModal),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(Command::Exit),
            KeyCode::F(10) => Some(Command::Submit),
            KeyCode::Enter if self.focus == Focus::Submit => Some(Command::Submit),
            KeyCode::Enter | KeyCode::Char(' ') if self.is_select(view) => {
                self.choose_highlighted(view)
            }
            KeyCode::Enter => {
                self.next(view);
                None
            }
            KeyCode::BackTab => {
                self.prev(view);
                None
            }
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.prev(view);
                None
            }
            KeyCode::Tab => {
                self.next(view);
                None
            }
            KeyCode::Up if self.is_select(view) => {
                self.move_highlight(view, false);
                None
            }
            KeyCode::Down if self.is_select(view) => {
                self.move_highlight(view, true);
                None
            }
            KeyCode::Up => {
                self.prev(view);
                None
            }
            KeyCode::Down => {
                self.next(view);
                None
            }
            KeyCode::Left => {
                self.move_cursor(view, CursorMove::Left);
                None
            }
            KeyCode::Right => {
                self.move_cursor(view, CursorMove::Right);
                None
            }
            KeyCode::Home => {
                self.move_cursor(view, CursorMove::Home);
                None
            }
            KeyCode::End => {
                self.move_cursor(view, CursorMove::End);
                None
            }
            KeyCode::Backspace => self.backspace(view),
            KeyCode::Delete => self.delete(view),
            KeyCode::Char(c) => self.insert(view, c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum CursorMove {
    Left,
    Right,
    Home,
    End,
}

fn byte_index(value: &str, chars: usize) -> usize {
    value
        .char_indices()
        .nth(chars)
        .map_or(value.len(), |(idx, _)| idx)
}
