//! HTML for the lookup form.

use crate::domain::model::LookupOutcome;
use crate::utils::validation::WORD_FIELD;

pub struct FormView<'a> {
    pub value: &'a str,
    pub errors: Vec<&'a str>,
    pub outcome: Option<&'a LookupOutcome>,
}

impl<'a> FormView<'a> {
    pub fn empty() -> Self {
        Self {
            value: "",
            errors: Vec::new(),
            outcome: None,
        }
    }
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_outcome(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::Success(payload) => {
            let pretty = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
            format!(r#"<pre class="result">{}</pre>"#, escape_html(&pretty))
        }
        other => format!(
            r#"<p class="lookup-error">{}</p>"#,
            escape_html(other.error_message().unwrap_or_default())
        ),
    }
}

pub fn render(view: &FormView<'_>) -> String {
    let errors: String = view
        .errors
        .iter()
        .map(|message| format!(r#"<li class="field-error">{}</li>"#, escape_html(message)))
        .collect();
    let errors = if errors.is_empty() {
        String::new()
    } else {
        format!("<ul>{}</ul>", errors)
    };
    let result = view.outcome.map(render_outcome).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Word Lookup</title>
</head>
<body>
<main>
<h1>Word Lookup</h1>
<form method="post" action="/">
<label for="{field}">Word</label>
<input id="{field}" name="{field}" type="text" maxlength="50" value="{value}" required>
{errors}<button type="submit">Look up</button>
</form>
{result}
</main>
</body>
</html>
"#,
        field = WORD_FIELD,
        value = escape_html(view.value),
        errors = errors,
        result = result,
    )
}
