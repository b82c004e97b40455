//! Relation resolution between notes and their series/speaker
//!
//! Notes hold optional series and speaker ids with no integrity constraint in
//! storage. Display resolves each id to a label and degrades to a placeholder
//! when the referenced row has been deleted. Submission checks that selected
//! ids exist.

use ccnotes_common::db::{Note, Series, Speaker};
use ccnotes_common::Result;
use tracing::warn;

use crate::db::{ListOrder, RecordStore};

/// A relation a note may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Series,
    Speaker,
}

impl Relation {
    /// Form field carrying the foreign key
    pub fn field(self) -> &'static str {
        match self {
            Relation::Series => "series_id",
            Relation::Speaker => "speaker_id",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Relation::Series => "series",
            Relation::Speaker => "speaker",
        }
    }

    /// Placeholder shown for a dangling reference
    pub fn unknown_label(self) -> &'static str {
        match self {
            Relation::Series => "Unknown series",
            Relation::Speaker => "Unknown speaker",
        }
    }
}

/// Placeholder shown when no relation is set
pub const NONE_LABEL: &str = "None";

/// Outcome of resolving one optional foreign key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Related {
    /// The key is null
    None,
    /// The key resolves to a row
    Found { id: i64, label: String },
    /// The key is set but its row no longer exists
    Dangling { id: i64 },
}

impl Related {
    pub fn label(&self, relation: Relation) -> &str {
        match self {
            Related::None => NONE_LABEL,
            Related::Found { label, .. } => label,
            Related::Dangling { .. } => relation.unknown_label(),
        }
    }

    pub fn is_dangling(&self) -> bool {
        matches!(self, Related::Dangling { .. })
    }
}

/// A note together with its resolved series and speaker
#[derive(Debug, Clone)]
pub struct DisplayContext {
    pub note: Note,
    pub series: Related,
    pub speaker: Related,
}

/// Resolves note relations against the series and speaker stores
#[derive(Clone)]
pub struct RelationResolver {
    series: RecordStore<Series>,
    speakers: RecordStore<Speaker>,
}

impl RelationResolver {
    pub fn new(series: RecordStore<Series>, speakers: RecordStore<Speaker>) -> Self {
        Self { series, speakers }
    }

    pub async fn resolve_display_context(&self, note: Note) -> Result<DisplayContext> {
        let series = self.resolve(Relation::Series, note.series_id).await?;
        let speaker = self.resolve(Relation::Speaker, note.speaker_id).await?;

        if series.is_dangling() || speaker.is_dangling() {
            warn!("Note {} has dangling references", note.id);
        }

        Ok(DisplayContext {
            note,
            series,
            speaker,
        })
    }

    /// Resolve one optional key; a missing row is `Dangling`, not an error
    pub async fn resolve(&self, relation: Relation, id: Option<i64>) -> Result<Related> {
        let Some(id) = id else {
            return Ok(Related::None);
        };

        let found = match relation {
            Relation::Series => self.series.get(id).await.map(|s| s.title),
            Relation::Speaker => self.speakers.get(id).await.map(|s| s.name),
        };

        match found {
            Ok(label) => Ok(Related::Found { id, label }),
            Err(e) if e.is_not_found() => Ok(Related::Dangling { id }),
            Err(e) => Err(e),
        }
    }

    pub async fn list_selectable_series(&self) -> Result<Vec<Series>> {
        self.series.get_all(ListOrder::Id).await
    }

    pub async fn list_selectable_speakers(&self) -> Result<Vec<Speaker>> {
        self.speakers.get_all(ListOrder::Id).await
    }

    /// `(id, label)` pairs for a selection control
    pub async fn choices(&self, relation: Relation) -> Result<Vec<(i64, String)>> {
        Ok(match relation {
            Relation::Series => self
                .list_selectable_series()
                .await?
                .into_iter()
                .map(|s| (s.id, s.title))
                .collect(),
            Relation::Speaker => self
                .list_selectable_speakers()
                .await?
                .into_iter()
                .map(|s| (s.id, s.name))
                .collect(),
        })
    }

    /// The relations whose referenced id does not exist
    pub async fn missing_references(&self, references: &[(Relation, i64)]) -> Result<Vec<Relation>> {
        let mut missing = Vec::new();
        for &(relation, id) in references {
            let exists = match relation {
                Relation::Series => self.series.exists(id).await?,
                Relation::Speaker => self.speakers.exists(id).await?,
            };
            if !exists {
                missing.push(relation);
            }
        }
        Ok(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccnotes_common::db::{init_memory_database, SeriesFields, SpeakerFields};
    use chrono::Utc;

    async fn setup() -> (RelationResolver, RecordStore<Series>, RecordStore<Speaker>) {
        let pool = init_memory_database().await.unwrap();
        let series = RecordStore::new(pool.clone());
        let speakers = RecordStore::new(pool);
        (
            RelationResolver::new(series.clone(), speakers.clone()),
            series,
            speakers,
        )
    }

    fn note_with(series_id: Option<i64>, speaker_id: Option<i64>) -> Note {
        Note {
            id: 1,
            title: "T".to_string(),
            body: "B".to_string(),
            date: None,
            series_id,
            speaker_id,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_resolves_existing_relations() {
        let (resolver, series, speakers) = setup().await;
        let s = series.create(&SeriesFields { title: "Romans".into() }).await.unwrap();
        let p = speakers.create(&SpeakerFields { name: "Ann".into() }).await.unwrap();

        let ctx = resolver
            .resolve_display_context(note_with(Some(s), Some(p)))
            .await
            .unwrap();

        assert_eq!(ctx.series, Related::Found { id: s, label: "Romans".into() });
        assert_eq!(ctx.speaker.label(Relation::Speaker), "Ann");
    }

    #[tokio::test]
    async fn test_null_relations_resolve_to_none() {
        let (resolver, _, _) = setup().await;
        let ctx = resolver
            .resolve_display_context(note_with(None, None))
            .await
            .unwrap();

        assert_eq!(ctx.series, Related::None);
        assert_eq!(ctx.speaker.label(Relation::Speaker), NONE_LABEL);
    }

    #[tokio::test]
    async fn test_deleted_series_is_dangling_placeholder() {
        let (resolver, series, _) = setup().await;
        let s = series.create(&SeriesFields { title: "Gone".into() }).await.unwrap();
        series.delete(s).await.unwrap();

        let ctx = resolver
            .resolve_display_context(note_with(Some(s), None))
            .await
            .unwrap();

        assert_eq!(ctx.series, Related::Dangling { id: s });
        assert_eq!(ctx.series.label(Relation::Series), "Unknown series");
    }

    #[tokio::test]
    async fn test_missing_references() {
        let (resolver, series, _) = setup().await;
        let s = series.create(&SeriesFields { title: "Acts".into() }).await.unwrap();

        let missing = resolver
            .missing_references(&[(Relation::Series, s), (Relation::Speaker, 42)])
            .await
            .unwrap();
        assert_eq!(missing, vec![Relation::Speaker]);
    }

    #[tokio::test]
    async fn test_choices_in_id_order() {
        let (resolver, _, speakers) = setup().await;
        let a = speakers.create(&SpeakerFields { name: "Zed".into() }).await.unwrap();
        let b = speakers.create(&SpeakerFields { name: "Amy".into() }).await.unwrap();

        let choices = resolver.choices(Relation::Speaker).await.unwrap();
        assert_eq!(choices, vec![(a, "Zed".to_string()), (b, "Amy".to_string())]);
    }
}
