//! Server-side HTML rendering for the single-page form.
//!
//! The whole UI is one document: the form, plus the generated post or a
//! user-visible error state when present. All user- and model-supplied text
//! is escaped before it reaches the page.

use crate::generation::generator::GeneratedPost;

/// Everything the page template needs for one response.
///
/// The form fields echo whatever the user submitted, so a rejected
/// submission does not wipe their input.
#[derive(Debug, Default)]
pub struct PageView {
    pub topic: String,
    pub tone: String,
    pub platform: String,
    pub word_count: String,
    pub result: Option<GeneratedPost>,
    pub error: Option<String>,
}

/// Renders the full HTML document for the page.
pub fn render_page(view: &PageView) -> String {
    let mut body = String::with_capacity(2048);

    body.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Social Post Generator</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
  label { display: block; margin-top: 1rem; font-weight: 600; }
  input { width: 100%; padding: 0.4rem; margin-top: 0.25rem; box-sizing: border-box; }
  button { margin-top: 1.25rem; padding: 0.5rem 1.5rem; }
  .error { color: #b00020; border: 1px solid #b00020; padding: 0.75rem; margin-top: 1.5rem; }
  .result { border: 1px solid #ccc; padding: 1rem; margin-top: 1.5rem; }
  .hashtags { list-style: none; padding: 0; }
  .hashtags li { display: inline-block; margin-right: 0.5rem; color: #1a73e8; }
</style>
</head>
<body>
<h1>Social Post Generator</h1>
<form method="post" action="/">
"#,
    );

    push_field(&mut body, "topic", "Topic", &view.topic, true);
    push_field(&mut body, "platform", "Platform", &view.platform, false);
    push_field(&mut body, "tone", "Tone", &view.tone, false);
    push_field(
        &mut body,
        "word_count",
        "Word count (optional)",
        &view.word_count,
        false,
    );

    body.push_str("<button type=\"submit\">Generate</button>\n</form>\n");

    if let Some(error) = &view.error {
        body.push_str("<p class=\"error\" role=\"alert\">");
        body.push_str(&escape_html(error));
        body.push_str("</p>\n");
    }

    if let Some(result) = &view.result {
        body.push_str("<section class=\"result\">\n<h2>Your post</h2>\n<p class=\"post\">");
        body.push_str(&escape_html(&result.post));
        body.push_str("</p>\n<ul class=\"hashtags\">\n");
        for tag in &result.hashtags {
            body.push_str("<li>");
            body.push_str(&escape_html(tag));
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n</section>\n");
    }

    body.push_str("</body>\n</html>\n");
    body
}

fn push_field(out: &mut String, name: &str, label: &str, value: &str, required: bool) {
    out.push_str(&format!(
        "<label for=\"{name}\">{label}</label>\n<input id=\"{name}\" name=\"{name}\" value=\"{}\"{}>\n",
        escape_html(value),
        if required { " required" } else { "" },
    ));
}

/// Minimal HTML escaping for text and attribute positions.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
