use ccnotes_common::db::{Note, NoteFields};
use ccnotes_common::time::format_date;
use serde::Deserialize;

use super::Managed;
use crate::db::ListOrder;
use crate::form::{validate, FieldErrors, FieldSpec};
use crate::presenter::excerpt;
use crate::relations::Relation;

/// Characters of body text shown in the notes listing
const BODY_EXCERPT_CHARS: usize = 80;

/// Submitted note form
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NoteInput {
    pub title: String,
    pub body: String,
    pub date: String,
    pub series_id: String,
    pub speaker_id: String,
}

impl Managed for Note {
    type Input = NoteInput;

    const PATH: &'static str = "/Note";
    const LABEL: &'static str = "Note";
    const PLURAL: &'static str = "Notes";
    const HEADERS: &'static [&'static str] =
        &["Note Id", "Title", "Body", "Date", "Series Id", "Speaker Id"];
    const LISTING_ORDER: ListOrder = ListOrder::Latest;

    fn to_input(&self) -> NoteInput {
        NoteInput {
            title: self.title.clone(),
            body: self.body.clone(),
            date: self.date.map(format_date).unwrap_or_default(),
            series_id: optional_id_text(self.series_id),
            speaker_id: optional_id_text(self.speaker_id),
        }
    }

    fn validate(input: &NoteInput) -> Result<NoteFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = validate::required(&mut errors, "title", "Title", &input.title);
        let body = validate::required(&mut errors, "body", "Body", &input.body);
        let date = validate::optional_date(&mut errors, "date", "Date", &input.date);
        let series_id = validate::optional_id(&mut errors, "series_id", "Series", &input.series_id);
        let speaker_id =
            validate::optional_id(&mut errors, "speaker_id", "Speaker", &input.speaker_id);

        errors.into_result(NoteFields {
            title,
            body,
            date,
            series_id,
            speaker_id,
        })
    }

    fn references(fields: &NoteFields) -> Vec<(Relation, i64)> {
        let mut references = Vec::new();
        if let Some(id) = fields.series_id {
            references.push((Relation::Series, id));
        }
        if let Some(id) = fields.speaker_id {
            references.push((Relation::Speaker, id));
        }
        references
    }

    fn layout(input: &NoteInput) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("title", "Note Title", &input.title),
            FieldSpec::rich_text("body", "Note Body", &input.body),
            FieldSpec::date("date", "Note Date", &input.date),
            FieldSpec::select(Relation::Series, "Series", &input.series_id),
            FieldSpec::select(Relation::Speaker, "Speaker", &input.speaker_id),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            excerpt(&self.body, BODY_EXCERPT_CHARS),
            self.date.map(format_date).unwrap_or_default(),
            optional_id_text(self.series_id),
            optional_id_text(self.speaker_id),
        ]
    }
}

fn optional_id_text(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}
