//! Admin listing and form pages

use crate::form::{Control, FieldView, FormMode, FormView};
use crate::presenter::IndexView;

use super::{escape_html, layout};

pub fn index_page(view: &IndexView) -> String {
    let headers: String = view
        .headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();

    let rows: String = if view.rows.is_empty() {
        format!(
            r#"<tr><td colspan="{}">Nothing here yet.</td></tr>"#,
            view.headers.len() + 1
        )
    } else {
        view.rows
            .iter()
            .map(|row| {
                let cells: String = row
                    .cells
                    .iter()
                    .map(|c| format!("<td>{}</td>", escape_html(c)))
                    .collect();
                format!(
                    r#"<tr>{cells}<td><a href="{edit}">Edit</a> <a href="{remove}" onclick="return confirm('Remove this entry?')">Remove</a></td></tr>"#,
                    cells = cells,
                    edit = escape_html(&row.edit_href),
                    remove = escape_html(&row.remove_href),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    layout(
        view.title,
        &format!(
            r#"<h1>{title} ({count})</h1>
<p><a href="{add}">Add</a></p>
<table>
<thead><tr>{headers}<th>Actions</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>"#,
            title = escape_html(view.title),
            count = view.count,
            add = escape_html(&view.add_href),
            headers = headers,
            rows = rows,
        ),
    )
}

pub fn form_page(view: &FormView) -> String {
    let heading = match view.mode {
        FormMode::New => format!("Add {}", view.entity),
        FormMode::Edit(id) => format!("Edit {} {}", view.entity, id),
    };

    let fields: String = view
        .fields
        .iter()
        .map(field_html)
        .collect::<Vec<_>>()
        .join("\n");

    let summary = if view.errors.is_empty() {
        String::new()
    } else {
        let items: String = view
            .errors
            .iter()
            .map(|e| format!("<li>{}</li>", escape_html(&e.message)))
            .collect();
        format!(r#"<ul class="error">{}</ul>"#, items)
    };

    layout(
        &heading,
        &format!(
            r#"<h1>{heading}</h1>
{summary}
<form method="post" action="{action}">
{fields}
<button type="submit">Save</button>
<a href="{listing}">Cancel</a>
</form>"#,
            heading = escape_html(&heading),
            summary = summary,
            action = escape_html(&view.action),
            fields = fields,
            listing = escape_html(view.listing),
        ),
    )
}

fn field_html(field: &FieldView) -> String {
    let name = field.name;
    let value = escape_html(&field.value);

    let control = match &field.control {
        Control::Text => format!(
            r#"<input type="text" id="{name}" name="{name}" value="{value}">"#
        ),
        Control::RichText => format!(
            r#"<textarea id="{name}" name="{name}" class="rich-text" rows="12">{value}</textarea>"#
        ),
        Control::Date { placeholder } => format!(
            r#"<input type="text" id="{name}" name="{name}" value="{value}" placeholder="{placeholder}">"#,
            placeholder = escape_html(placeholder),
        ),
        Control::Select { prompt, options } => {
            let options: String = options
                .iter()
                .map(|o| {
                    format!(
                        r#"<option value="{}"{}>{}</option>"#,
                        o.id,
                        if o.selected { " selected" } else { "" },
                        escape_html(&o.label),
                    )
                })
                .collect();
            format!(
                r#"<select id="{name}" name="{name}"><option value="">{prompt}</option>{options}</select>"#,
                prompt = escape_html(prompt),
            )
        }
    };

    let error = field
        .error
        .as_deref()
        .map(|e| format!(r#"<span class="error">{}</span>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<div class="field"><label for="{name}">{label}</label> {control} {error}</div>"#,
        label = escape_html(field.label),
    )
}
