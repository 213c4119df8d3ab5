//! HTML form generator implementation.

use survey_form::{ControlKind, ControlView, FormView, ModalView};

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Title for the HTML document.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// CSS class prefix for all generated elements. Empty means bare class names.
    pub class_prefix: String,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: String::new(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    fn class(&self, name: &str) -> String {
        if self.class_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}-{name}", self.class_prefix)
        }
    }
}

/// Render a form view as HTML.
pub fn to_html(view: &FormView, options: &HtmlOptions) -> String {
    let mut html = String::new();

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = &options.title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(options));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!(
        "<div class=\"{}\">\n",
        options.class("form-container")
    ));

    if let Some(title) = &options.title {
        html.push_str(&format!(
            "  <h1 class=\"{}\">{}</h1>\n",
            options.class("title"),
            escape_html(title)
        ));
    }

    html.push_str("  <form>\n");
    for control in &view.controls {
        html.push_str(&generate_control(control, options));
    }

    if view.shows_additional_questions() {
        html.push_str(&format!(
            "    <div class=\"{}\">\n",
            options.class("additional-questions")
        ));
        html.push_str("      <h2>Additional Questions:</h2>\n");
        for question in &view.additional_questions {
            html.push_str(&format!(
                "      <div class=\"{}\">\n        <p>{}</p>\n      </div>\n",
                options.class("question-container"),
                escape_html(&question.text)
            ));
        }
        html.push_str("    </div>\n");
    }

    if view.fetch_pending {
        html.push_str(&format!(
            "    <p class=\"{}\">Fetching follow-up questions...</p>\n",
            options.class("status")
        ));
    }

    html.push_str("    <button type=\"submit\">Submit</button>\n");
    html.push_str("  </form>\n");

    if let Some(modal) = &view.modal {
        html.push_str(&generate_modal(modal, options));
    }

    html.push_str("</div>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Generate HTML for a single control with its label and error.
fn generate_control(control: &ControlView, options: &HtmlOptions) -> String {
    let id = control.field.key();
    let value = escape_html(&control.value);
    let mut html = String::new();

    html.push_str(&format!("    <div class=\"{}\">\n", options.class("field")));
    html.push_str(&format!(
        "      <label for=\"{id}\">{}:</label>\n",
        escape_html(control.label)
    ));

    match control.kind {
        ControlKind::Text | ControlKind::Email | ControlKind::Number => {
            let input_type = match control.kind {
                ControlKind::Email => "email",
                ControlKind::Number => "number",
                _ => "text",
            };
            html.push_str(&format!(
                "      <input type=\"{input_type}\" id=\"{id}\" name=\"{id}\" value=\"{value}\" required>\n"
            ));
        }
        ControlKind::Select(choices) => {
            html.push_str(&format!(
                "      <select id=\"{id}\" name=\"{id}\" required>\n"
            ));
            html.push_str("        <option value=\"\">Select...</option>\n");
            for choice in choices {
                let choice = escape_html(choice);
                let selected = if choice == value { " selected" } else { "" };
                html.push_str(&format!(
                    "        <option value=\"{choice}\"{selected}>{choice}</option>\n"
                ));
            }
            html.push_str("      </select>\n");
        }
        ControlKind::TextArea => {
            html.push_str(&format!(
                "      <textarea id=\"{id}\" name=\"{id}\" rows=\"4\" required>{value}</textarea>\n"
            ));
        }
    }

    if let Some(error) = &control.error {
        html.push_str(&format!(
            "      <p class=\"{}\">{}</p>\n",
            options.class("error"),
            escape_html(error)
        ));
    }

    html.push_str("    </div>\n");
    html
}

fn generate_modal(modal: &ModalView, options: &HtmlOptions) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "  <div class=\"{}\">\n",
        options.class("modal-overlay")
    ));
    html.push_str(&format!("    <div class=\"{}\">\n", options.class("modal")));
    html.push_str("      <h2>Collected Data</h2>\n");
    html.push_str(&format!(
        "      <table class=\"{}\">\n        <tbody>\n",
        options.class("modal-table")
    ));
    for (field, value) in &modal.rows {
        html.push_str(&format!(
            "          <tr>\n            <td class=\"{}\">{}</td>\n            <td class=\"{}\">{}</td>\n          </tr>\n",
            options.class("modal-key"),
            field.key(),
            options.class("modal-value"),
            escape_html(&value.to_string())
        ));
    }
    html.push_str("        </tbody>\n      </table>\n");
    html.push_str("      <button type=\"button\">Close</button>\n");
    html.push_str("    </div>\n  </div>\n");

    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(options: &HtmlOptions) -> String {
    let container = options.class("form-container");
    let field = options.class("field");
    let error = options.class("error");
    let questions = options.class("additional-questions");
    let overlay = options.class("modal-overlay");
    let modal = options.class("modal");
    let table = options.class("modal-table");
    let key = options.class("modal-key");
    format!(
        r#"  <style>
    .{container} {{
      max-width: 600px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{field} {{
      margin: 0.5rem 0;
    }}
    .{field} label {{
      display: block;
      margin-bottom: 0.25rem;
    }}
    .{field} input, .{field} select, .{field} textarea {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{error} {{
      color: #c00;
      margin: 0.25rem 0;
    }}
    .{questions} {{
      margin: 1rem 0;
    }}
    .{overlay} {{
      position: fixed;
      inset: 0;
      display: flex;
      align-items: center;
      justify-content: center;
      background: rgba(0, 0, 0, 0.5);
    }}
    .{modal} {{
      background: #fff;
      padding: 1.5rem;
      border-radius: 4px;
    }}
    .{table} td {{
      padding: 0.25rem 0.75rem;
    }}
    .{key} {{
      font-weight: bold;
    }}
  </style>
"#
    )
}
