//! Shared page chrome and escaping

/// Escapes text for element content and quoted attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
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

/// Wraps `body` in the document layout
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | PokéDex</title>
<link rel="stylesheet" href="/static/app.css">
<script src="/static/card.js" defer></script>
</head>
<body>
<header class="site-header"><a href="/">PokéDex</a></header>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// Full-page message with a link home
pub fn message_page(title: &str, heading: &str, detail: &str) -> String {
    let body = format!(
        r#"<main class="message">
<h1>{heading}</h1>
<p>{detail}</p>
<a class="button" href="/">Back to search</a>
</main>"#,
        heading = escape(heading),
        detail = escape(detail),
    );

    page(title, &body)
}
