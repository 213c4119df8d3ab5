//! Rendering of a [`FormView`] with ratatui.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{
        Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, Wrap,
    },
};
use survey_form::{ControlKind, ControlView, FormView, ModalView};

use crate::Theme;
use crate::input::{Focus, InputState};

/// Extra vertical space between controls.
const CONTROL_SPACING: u16 = 1;

/// Height of a control's box, borders included.
fn control_height(control: &ControlView) -> u16 {
    match control.kind {
        ControlKind::Select(options) => 2 + options.len() as u16,
        ControlKind::TextArea => 4,
        _ => 3,
    }
}

fn additional_questions_height(view: &FormView) -> u16 {
    if view.shows_additional_questions() {
        2 + view.additional_questions.len() as u16
    } else {
        0
    }
}

/// Top of every control in the virtual scroll area, followed by the total height.
fn layout_controls(view: &FormView) -> (Vec<u16>, u16) {
    let mut tops = Vec::with_capacity(view.controls.len());
    let mut y = 0;
    for (idx, control) in view.controls.iter().enumerate() {
        if idx > 0 {
            y += CONTROL_SPACING;
        }
        tops.push(y);
        y += control_height(control);
    }
    if view.shows_additional_questions() {
        y += CONTROL_SPACING + additional_questions_height(view);
    }
    (tops, y)
}

/// Keep the focused control inside the viewport.
fn adjust_scroll(input: &mut InputState, view: &FormView, tops: &[u16], viewport_height: u16) {
    let focused = match input.focus {
        Focus::Control(field) => view.controls.iter().position(|c| c.field == field),
        Focus::Submit => None,
    };
    let Some(idx) = focused else {
        return;
    };
    let top = tops[idx];
    let bottom = top + control_height(&view.controls[idx]);

    if top < input.scroll_offset {
        input.scroll_offset = top;
    }
    if bottom > input.scroll_offset + viewport_height {
        input.scroll_offset = bottom.saturating_sub(viewport_height);
    }
}

pub(crate) fn draw_form(
    frame: &mut Frame,
    view: &FormView,
    input: &mut InputState,
    theme: &Theme,
    title: &str,
) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Form content
            Constraint::Length(3), // Submit button
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let title = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(title, chunks[0]);

    let form_area = chunks[1];
    let content_width = form_area.width.saturating_sub(2); // 1 for left margin, 1 for scrollbar
    let viewport_height = form_area.height;

    let (tops, total_height) = layout_controls(view);
    adjust_scroll(input, view, &tops, viewport_height);
    let scroll_offset = input.scroll_offset;

    for (control, &top) in view.controls.iter().zip(&tops) {
        let height = control_height(control);
        // Controls clipped at the top are skipped; they look broken half-drawn.
        if top < scroll_offset {
            continue;
        }
        let visible_top = top - scroll_offset;
        if visible_top >= viewport_height {
            break;
        }
        let field_area = Rect {
            x: form_area.x + 1,
            y: form_area.y + visible_top,
            width: content_width,
            height: height.min(viewport_height - visible_top),
        };
        let is_focused = input.focus == Focus::Control(control.field);
        draw_control(frame, control, field_area, is_focused, input, theme);
    }

    if view.shows_additional_questions() {
        let top = total_height - additional_questions_height(view);
        if top >= scroll_offset && top - scroll_offset < viewport_height {
            let visible_top = top - scroll_offset;
            let questions_area = Rect {
                x: form_area.x + 1,
                y: form_area.y + visible_top,
                width: content_width,
                height: additional_questions_height(view).min(viewport_height - visible_top),
            };
            draw_additional_questions(frame, view, questions_area, theme);
        }
    }

    if total_height > viewport_height {
        let scrollbar_area = Rect {
            x: form_area.x + form_area.width - 1,
            y: form_area.y,
            width: 1,
            height: viewport_height,
        };

        let mut scrollbar_state = ScrollbarState::new(total_height as usize)
            .position(scroll_offset as usize)
            .viewport_content_length(viewport_height as usize);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    draw_submit(frame, chunks[2], input.focus == Focus::Submit, theme);

    let help_text = if view.fetch_pending {
        "Fetching follow-up questions..."
    } else {
        "Tab: Next  ↑/↓: Navigate  Space/Enter: Select  F10: Submit  Esc: Quit"
    };
    let help = Paragraph::new(help_text).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[3]);

    if let Some(modal) = &view.modal {
        draw_modal(frame, modal, area, theme);
    }
}

fn draw_submit(frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
    let style = if focused {
        Style::default()
            .fg(theme.text)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    };
    let text = if focused {
        "  [ Submit ]  "
    } else {
        "    Submit    "
    };
    let button = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if focused {
                    theme.primary
                } else {
                    theme.border
                })),
        );
    frame.render_widget(button, area);
}

fn draw_control(
    frame: &mut Frame,
    control: &ControlView,
    area: Rect,
    is_focused: bool,
    input: &InputState,
    theme: &Theme,
) {
    let border_color = if control.error.is_some() {
        theme.error
    } else if is_focused {
        theme.primary
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", control.label))
        .title_style(Style::default().fg(if is_focused {
            theme.highlight
        } else {
            theme.text
        }));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match control.kind {
        ControlKind::Select(options) => {
            let items: Vec<ListItem> = options
                .iter()
                .enumerate()
                .map(|(idx, option)| {
                    let chosen = control.value == *option;
                    let marker = if chosen { "(●)" } else { "( )" };
                    let style = if is_focused && idx == input.highlight {
                        Style::default()
                            .fg(theme.text)
                            .bg(theme.selected_bg)
                            .add_modifier(Modifier::BOLD)
                    } else if chosen {
                        Style::default().fg(theme.highlight)
                    } else {
                        Style::default().fg(theme.text)
                    };
                    ListItem::new(format!("{marker} {option}")).style(style)
                })
                .collect();
            frame.render_widget(List::new(items), inner);
        }
        ControlKind::TextArea => {
            let text = Paragraph::new(control.value.clone())
                .style(Style::default().fg(theme.text))
                .wrap(Wrap { trim: false });
            frame.render_widget(text, inner);
            if is_focused {
                set_cursor(frame, inner, input.cursor);
            }
        }
        ControlKind::Text | ControlKind::Email | ControlKind::Number => {
            let text = Paragraph::new(control.value.clone()).style(Style::default().fg(theme.text));
            frame.render_widget(text, inner);
            if is_focused {
                set_cursor(frame, inner, input.cursor);
            }
        }
    }

    // The first error sits on the bottom border, beneath the control.
    if let Some(error) = &control.error {
        let error_text =
            Paragraph::new(format!("⚠ {error}")).style(Style::default().fg(theme.error));
        let error_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(error_text, error_area);
    }
}

fn set_cursor(frame: &mut Frame, inner: Rect, cursor: usize) {
    let width = inner.width.max(1) as usize;
    let x = inner.x + (cursor % width) as u16;
    let y = inner.y + (cursor / width) as u16;
    if y < inner.y + inner.height {
        frame.set_cursor_position((x, y));
    }
}

fn draw_additional_questions(frame: &mut Frame, view: &FormView, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.secondary))
        .title(" Additional Questions: ")
        .title_style(
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        );
    let items: Vec<ListItem> = view
        .additional_questions
        .iter()
        .map(|q| ListItem::new(format!("• {}", q.text)).style(Style::default().fg(theme.text)))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// A rectangle of the given size centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_modal(frame: &mut Frame, modal: &ModalView, area: Rect, theme: &Theme) {
    let key_width = modal
        .rows
        .iter()
        .map(|(field, _)| field.key().len())
        .max()
        .unwrap_or(0) as u16;

    // Rows, header, borders and the footer line.
    let height = modal.rows.len() as u16 + 5;
    let popup = centered_rect(area.width.saturating_sub(8).min(72), height, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success))
        .title(" Collected Data ")
        .title_style(
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(Line::from(" Enter/Esc: Close ").alignment(Alignment::Center));

    let header = Row::new(vec![Cell::from("Field"), Cell::from("Value")]).style(
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    let rows = modal.rows.iter().map(|(field, value)| {
        Row::new(vec![Cell::from(field.key()), Cell::from(value.to_string())])
            .style(Style::default().fg(theme.text))
    });
    let table = Table::new(rows, [Constraint::Length(key_width + 2), Constraint::Fill(1)])
        .header(header)
        .block(block);

    frame.render_widget(table, popup);
}
