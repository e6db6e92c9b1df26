//! HTML page generation.
//!
//! Pages are built with a plain string generator and explicit escaping, no
//! template engine. Every piece of catalog- or visitor-supplied text goes
//! through [`escape_html`] before it reaches the document.

use pulse_core::{Answer, Question, Survey};

/// The survey selection page listing every survey in the catalog.
pub fn selection_page(surveys: &[Survey]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Pulse Surveys</h1>\n");
    body.push_str("<p>Pick a survey to get started.</p>\n");
    body.push_str("<ul class=\"survey-list\">\n");
    for survey in surveys {
        body.push_str(&format!(
            "  <li><a href=\"/surveys/{}\">{}</a></li>\n",
            escape_html(&survey.name),
            escape_html(&survey.title)
        ));
    }
    body.push_str("</ul>\n");
    page_shell("Pulse Surveys", &body)
}

/// A survey's start page: title, instructions, and the begin button.
pub fn intro_page(survey: &Survey, notice: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str(&notice_banner(notice));
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(&survey.title)));
    body.push_str(&format!(
        "<p class=\"survey-instructions\">{}</p>\n",
        escape_html(&survey.instructions)
    ));
    body.push_str(&format!(
        "<form method=\"post\" action=\"/begin/{}\">\n  \
         <button type=\"submit\" class=\"survey-button\">Begin</button>\n</form>\n",
        escape_html(&survey.name)
    ));
    page_shell(&survey.title, &body)
}

/// A question page. `number` is the 1-based question number for display;
/// the form posts back to the same index.
pub fn question_page(
    survey: &Survey,
    question: &Question,
    index: usize,
    number: usize,
    notice: Option<&str>,
) -> String {
    let mut body = String::new();
    body.push_str(&notice_banner(notice));
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(&survey.title)));
    body.push_str(&format!(
        "<p class=\"survey-progress\">Question {} of {}</p>\n",
        number,
        survey.question_count()
    ));
    body.push_str(&format!(
        "<form class=\"survey-form\" method=\"post\" action=\"/surveys/{}/question/{}\">\n",
        escape_html(&survey.name),
        index
    ));
    body.push_str("  <fieldset>\n");
    body.push_str(&format!(
        "    <legend>{}</legend>\n",
        escape_html(&question.prompt)
    ));
    for choice in &question.choices {
        let value = escape_html(&choice.value);
        body.push_str(&format!(
            "    <label class=\"survey-choice\">\n      \
             <input type=\"radio\" name=\"answer\" value=\"{value}\" required> {value}\n    \
             </label>\n"
        ));
        if choice.allows_specify {
            body.push_str(
                "    <input type=\"text\" class=\"survey-specify\" name=\"specify\" \
                 placeholder=\"Please specify\">\n",
            );
        }
    }
    body.push_str("  </fieldset>\n");
    body.push_str("  <button type=\"submit\" class=\"survey-button\">Next</button>\n");
    body.push_str("</form>\n");
    page_shell(&survey.title, &body)
}

/// The terminus page, with a summary of the recorded answers when the
/// session still holds them.
pub fn thankyou_page(survey: &Survey, answers: &[Answer]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Thank you!</h1>\n");
    body.push_str(&format!(
        "<p>Your responses to the {} have been recorded.</p>\n",
        escape_html(&survey.title)
    ));
    if !answers.is_empty() {
        body.push_str("<ol class=\"survey-summary\">\n");
        for answer in answers {
            match &answer.specify {
                Some(text) => body.push_str(&format!(
                    "  <li>{} &mdash; {}</li>\n",
                    escape_html(&answer.choice),
                    escape_html(text)
                )),
                None => {
                    body.push_str(&format!("  <li>{}</li>\n", escape_html(&answer.choice)))
                }
            }
        }
        body.push_str("</ol>\n");
    }
    body.push_str("<p><a href=\"/\">Back to all surveys</a></p>\n");
    page_shell("Thank you!", &body)
}

/// A styled error page for the given status code.
pub fn error_page(status: u16, message: &str) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>Error {status}</h1>\n"));
    body.push_str(&format!("<p>{}</p>\n", escape_html(message)));
    body.push_str("<p><a href=\"/\">Back to all surveys</a></p>\n");
    page_shell("Something went wrong", &body)
}

fn notice_banner(notice: Option<&str>) -> String {
    match notice {
        Some(text) => format!(
            "<div class=\"survey-notice\">{}</div>\n",
            escape_html(text)
        ),
        None => String::new(),
    }
}

/// Wrap a body in the full document with the embedded stylesheet.
fn page_shell(title: &str, body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
    html.push_str(STYLES);
    html.push_str("</head>\n<body>\n<main class=\"survey-page\">\n");
    html.push_str(body);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STYLES: &str = r#"  <style>
    .survey-page {
      max-width: 600px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }
    .survey-notice {
      margin: 1rem 0;
      padding: 0.5rem;
      background: #fdecea;
      border-left: 4px solid #c0392b;
    }
    .survey-instructions {
      margin: 1rem 0;
      padding: 0.5rem;
      background: #f5f5f5;
      white-space: pre-wrap;
    }
    .survey-choice {
      display: block;
      margin: 0.5rem 0;
    }
    .survey-specify {
      width: 100%;
      padding: 0.5rem;
      margin: 0.25rem 0 0.5rem;
      box-sizing: border-box;
    }
    .survey-button {
      margin-top: 1rem;
      padding: 0.5rem 1.5rem;
    }
    .survey-progress {
      color: #666;
    }
  </style>
"#;
