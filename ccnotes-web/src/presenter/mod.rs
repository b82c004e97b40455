//! View-model presenters for listings and note detail

mod detail;
mod listing;

pub use detail::{DetailPresenter, DetailView};
pub use listing::{IndexView, ListingPresenter, NoteSummary, RowView};

/// Plain-text excerpt of an HTML fragment
///
/// Drops tags, decodes the basic entities, collapses whitespace, and cuts to
/// `max_chars` characters with a trailing ellipsis when shortened.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let text = decode_entities(&text);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let mut cut: String = collapsed.chars().take(max_chars).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}

fn decode_entities(text: &str) -> String {
    const ENTITIES: [(&str, char); 7] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
        ("&apos;", '\''),
        ("&nbsp;", ' '),
    ];

    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        decoded.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES.iter().find(|(name, _)| rest.starts_with(name)) {
            Some((name, c)) => {
                decoded.push(*c);
                rest = &rest[name.len()..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}
