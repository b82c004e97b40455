//! Table descriptions for notes, series, and speakers

use ccnotes_common::db::{Note, NoteFields, Series, SeriesFields, Speaker, SpeakerFields};
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

use super::{FieldValue, Record};

impl Record for Note {
    type Fields = NoteFields;

    const TABLE: &'static str = "note";
    const KIND: &'static str = "note";
    const COLUMNS: &'static [&'static str] =
        &["title", "body", "note_date", "series_id", "speaker_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(fields: &NoteFields) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(fields.title.clone()),
            FieldValue::Text(fields.body.clone()),
            FieldValue::Date(fields.date),
            FieldValue::Integer(fields.series_id),
            FieldValue::Integer(fields.speaker_id),
        ]
    }

    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        <Note as FromRow<'_, SqliteRow>>::from_row(row)
    }
}

impl Record for Series {
    type Fields = SeriesFields;

    const TABLE: &'static str = "series";
    const KIND: &'static str = "series";
    const COLUMNS: &'static [&'static str] = &["title"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(fields: &SeriesFields) -> Vec<FieldValue> {
        vec![FieldValue::Text(fields.title.clone())]
    }

    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        <Series as FromRow<'_, SqliteRow>>::from_row(row)
    }
}

impl Record for Speaker {
    type Fields = SpeakerFields;

    const TABLE: &'static str = "speaker";
    const KIND: &'static str = "speaker";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(fields: &SpeakerFields) -> Vec<FieldValue> {
        vec![FieldValue::Text(fields.name.clone())]
    }

    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        <Speaker as FromRow<'_, SqliteRow>>::from_row(row)
    }
}
