//! HTML rendering
//!
//! Pages are rendered with `format!` into strings. Every value that came from
//! a user is escaped with [`escape_html`] except note bodies, which are stored
//! rich text and emitted as-is.

mod admin;
mod viewer;

pub use admin::{form_page, index_page};
pub use viewer::{archive_page, detail_page, empty_home_page};

/// Escape text for use in HTML content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Error page for 404 and 500 responses
pub fn error_page(title: &str, message: &str) -> String {
    layout(
        title,
        &format!(
            r#"<h1>{title}</h1>
<p class="error">{message}</p>
<p><a href="/View">Back to notes</a></p>"#,
            title = escape_html(title),
            message = escape_html(message),
        ),
    )
}

/// Wrap page content in the shared document shell
pub(crate) fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - CCNotes</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            max-width: 960px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
        }}
        nav a {{
            margin-right: 16px;
        }}
        table {{
            border-collapse: collapse;
            width: 100%;
        }}
        th, td {{
            border-bottom: 1px solid #ddd;
            padding: 6px;
            text-align: left;
        }}
        .error {{
            color: #b00020;
        }}
        .field {{
            margin-bottom: 12px;
        }}
        footer {{
            margin-top: 40px;
            color: #888;
            font-family: 'Courier New', monospace;
            font-size: 12px;
        }}
    </style>
</head>
<body>
<nav>
    <a href="/View">Home</a>
    <a href="/View/show_previous">Previous Notes</a>
    <a href="/Note">Notes</a>
    <a href="/Series">Series</a>
    <a href="/Speaker">Speakers</a>
</nav>
<main>
{content}
</main>
<footer>{build_info}</footer>
</body>
</html>
"#,
        title = escape_html(title),
        content = content,
        build_info = build_info(),
    )
}

fn build_info() -> String {
    format!(
        "ccnotes-web v{} [{}] {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE"),
    )
}
