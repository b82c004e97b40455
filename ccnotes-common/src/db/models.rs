//! Database models
//!
//! One typed record per table plus the set of fields a form may write. Ids and
//! `created_at` are assigned by the store and are not part of the field sets.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A note (talk/sermon) row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Note {
    pub id: i64,
    pub title: String,
    /// Rich text, stored as HTML
    pub body: String,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "note_date"))]
    pub date: Option<NaiveDate>,
    pub series_id: Option<i64>,
    pub speaker_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Mutable fields of a note
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NoteFields {
    pub title: String,
    pub body: String,
    pub date: Option<NaiveDate>,
    pub series_id: Option<i64>,
    pub speaker_id: Option<i64>,
}

impl Note {
    pub fn fields(&self) -> NoteFields {
        NoteFields {
            title: self.title.clone(),
            body: self.body.clone(),
            date: self.date,
            series_id: self.series_id,
            speaker_id: self.speaker_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Series {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesFields {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Speaker {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeakerFields {
    pub name: String,
}
