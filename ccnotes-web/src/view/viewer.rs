//! Public note pages

use crate::presenter::{DetailView, NoteSummary};

use super::{escape_html, layout};

pub fn detail_page(view: &DetailView) -> String {
    layout(
        &view.title,
        &format!(
            r#"<article>
<h1>{title}</h1>
<p class="meta">{date} &middot; Series: {series} &middot; Speaker: {speaker}</p>
<div class="body">
{body}
</div>
</article>"#,
            title = escape_html(&view.title),
            date = escape_html(view.date.as_deref().unwrap_or("")),
            series = escape_html(&view.series),
            speaker = escape_html(&view.speaker),
            body = view.body_html,
        ),
    )
}

pub fn empty_home_page() -> String {
    layout(
        "Home",
        r#"<h1>No notes yet</h1>
<p><a href="/Note/add">Add the first note</a></p>"#,
    )
}

pub fn archive_page(notes: &[NoteSummary]) -> String {
    let items: String = notes
        .iter()
        .map(|n| {
            format!(
                r#"<li><a href="{href}">{title}</a> {date}</li>"#,
                href = escape_html(&n.href),
                title = escape_html(&n.title),
                date = escape_html(n.date.as_deref().unwrap_or("")),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    layout(
        "Previous Notes",
        &format!(
            r#"<h1>Previous Notes</h1>
<ul>
{}
</ul>"#,
            items
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_renders_body_unescaped() {
        let html = detail_page(&DetailView {
            id: 1,
            title: "A & B".into(),
            body_html: "<p>Rich <em>text</em></p>".into(),
            date: Some("2021-06-01".into()),
            series: "Unknown series".into(),
            speaker: "None".into(),
        });

        assert!(html.contains("<p>Rich <em>text</em></p>"));
        assert!(html.contains("<h1>A &amp; B</h1>"));
        assert!(html.contains("Series: Unknown series"));
        assert!(html.contains("Speaker: None"));
    }
}
