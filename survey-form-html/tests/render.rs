//! Rendering tests for survey-form-html

use pretty_assertions::assert_eq;
use survey_form::{
    Action, Field, FollowUpQuestion, FormState, FormView, RequestToken, ValidationErrors,
    validate,
};
use survey_form_html::{HtmlOptions, to_html};

fn fragment() -> HtmlOptions {
    HtmlOptions::new().full_document(false).with_styles(false)
}

fn edit(state: FormState, field: Field, value: &str) -> FormState {
    state.reduce(Action::Edit {
        field,
        value: value.to_string(),
    })
}

#[test]
fn test_empty_form_fragment() {
    let html = to_html(&FormView::new(&FormState::new()), &fragment());

    let expected = r#"<div class="form-container">
  <form>
    <div class="field">
      <label for="fullName">Full Name:</label>
      <input type="text" id="fullName" name="fullName" value="" required>
    </div>
    <div class="field">
      <label for="email">Email:</label>
      <input type="email" id="email" name="email" value="" required>
    </div>
    <div class="field">
      <label for="surveyTopic">Survey Topic:</label>
      <select id="surveyTopic" name="surveyTopic" required>
        <option value="">Select...</option>
        <option value="Technology">Technology</option>
        <option value="Health">Health</option>
        <option value="Education">Education</option>
      </select>
    </div>
    <div class="field">
      <label for="feedback">Feedback:</label>
      <textarea id="feedback" name="feedback" rows="4" required></textarea>
    </div>
    <button type="submit">Submit</button>
  </form>
</div>
"#;
    assert_eq!(html, expected);
}

#[test]
fn test_selected_topic_reveals_its_group_only() {
    let state = edit(FormState::new(), Field::SurveyTopic, "Education");
    let state = edit(state, Field::HighestQualification, "Master's");
    let html = to_html(&FormView::new(&state), &fragment());

    assert!(html.contains(r#"<option value="Education" selected>Education</option>"#));
    assert!(html.contains(r#"<option value="Master&#39;s" selected>Master&#39;s</option>"#));
    assert!(html.contains(r#"<input type="text" id="fieldOfStudy""#));
    assert!(!html.contains("exerciseFrequency"));
    assert!(!html.contains("favoriteLanguage"));
    assert!(!html.contains("Additional Questions"));
}

#[test]
fn test_errors_render_beneath_controls() {
    let state = edit(FormState::new(), Field::Email, "not-an-email");
    let errors = validate(state.values()).unwrap_err();
    let state = state.reduce(Action::Rejected(errors));
    let html = to_html(&FormView::new(&state), &fragment());

    assert!(html.contains(
        "      <input type=\"email\" id=\"email\" name=\"email\" value=\"not-an-email\" required>\n      <p class=\"error\">Invalid email address</p>\n"
    ));
    assert!(html.contains(r#"<p class="error">Full Name is required</p>"#));
    assert!(html.contains(r#"<p class="error">Select a valid survey topic</p>"#));
}

#[test]
fn test_modal_and_additional_questions() {
    let values = FormState::new();
    let values = [
        (Field::FullName, "Ada <Countess>"),
        (Field::Email, "ada@example.com"),
        (Field::SurveyTopic, "Technology"),
        (Field::FavoriteLanguage, "C#"),
        (Field::YearsOfExperience, "12"),
        (Field::Feedback, "Fine"),
    ]
    .into_iter()
    .fold(values, |state, (field, value)| edit(state, field, value));

    let response = validate(values.values()).unwrap();
    let token = RequestToken::default().next();
    let state = values
        .reduce(Action::FetchIssued(token))
        .reduce(Action::FetchResolved {
            token,
            questions: vec![FollowUpQuestion::new("Tabs or spaces?")],
            response,
        });

    let html = to_html(&FormView::new(&state), &fragment());

    let questions = r#"    <div class="additional-questions">
      <h2>Additional Questions:</h2>
      <div class="question-container">
        <p>Tabs or spaces?</p>
      </div>
    </div>
"#;
    assert!(html.contains(questions));

    let modal = r#"  <div class="modal-overlay">
    <div class="modal">
      <h2>Collected Data</h2>
      <table class="modal-table">
        <tbody>
          <tr>
            <td class="modal-key">fullName</td>
            <td class="modal-value">Ada &lt;Countess&gt;</td>
          </tr>
"#;
    assert!(html.contains(modal));
    assert!(html.contains(
        "            <td class=\"modal-key\">yearsOfExperience</td>\n            <td class=\"modal-value\">12</td>\n"
    ));

    let closed = to_html(&FormView::new(&state.reduce(Action::CloseModal)), &fragment());
    assert!(!closed.contains("modal-overlay"));
}

#[test]
fn test_pending_fetch_status() {
    let state = FormState::new().reduce(Action::FetchIssued(RequestToken::default().next()));
    let html = to_html(&FormView::new(&state), &fragment());
    assert!(html.contains(r#"<p class="status">Fetching follow-up questions...</p>"#));
}

#[test]
fn test_full_document_with_prefix() {
    let errors = {
        let mut errors = ValidationErrors::new();
        errors.push(Field::Feedback, "Feedback is required");
        errors
    };
    let state = FormState::new().reduce(Action::Rejected(errors));
    let options = HtmlOptions::new()
        .with_title("Customer <Survey>")
        .with_class_prefix("survey");
    let html = to_html(&FormView::new(&state), &options);

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n"));
    assert!(html.contains("  <title>Customer &lt;Survey&gt;</title>\n"));
    assert!(html.contains("<style>"));
    assert!(html.contains(r#"<h1 class="survey-title">Customer &lt;Survey&gt;</h1>"#));
    assert!(html.contains(r#"<p class="survey-error">Feedback is required</p>"#));
    assert!(html.ends_with("</body>\n</html>\n"));
}
