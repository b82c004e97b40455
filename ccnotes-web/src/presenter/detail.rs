//! Note detail presenter

use ccnotes_common::db::Note;
use ccnotes_common::time::format_date;
use ccnotes_common::Result;

use crate::db::RecordStore;
use crate::relations::{Relation, RelationResolver};

/// A note with its series and speaker resolved to labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: i64,
    pub title: String,
    /// Stored rich text, rendered unescaped
    pub body_html: String,
    pub date: Option<String>,
    pub series: String,
    pub speaker: String,
}

pub struct DetailPresenter {
    notes: RecordStore<Note>,
    relations: RelationResolver,
}

impl DetailPresenter {
    pub fn new(notes: RecordStore<Note>, relations: RelationResolver) -> Self {
        Self { notes, relations }
    }

    /// Note detail, or `NotFound`; null or dangling relations become placeholders
    pub async fn render_detail(&self, id: i64) -> Result<DetailView> {
        let note = self.notes.get(id).await?;
        self.present(note).await
    }

    /// Detail of the most recent note, `None` when there are no notes
    pub async fn render_home(&self) -> Result<Option<DetailView>> {
        match self.notes.get_latest(1).await?.into_iter().next() {
            Some(note) => Ok(Some(self.present(note).await?)),
            None => Ok(None),
        }
    }

    async fn present(&self, note: Note) -> Result<DetailView> {
        let context = self.relations.resolve_display_context(note).await?;
        let series = context.series.label(Relation::Series).to_string();
        let speaker = context.speaker.label(Relation::Speaker).to_string();
        let note = context.note;

        Ok(DetailView {
            id: note.id,
            title: note.title,
            body_html: note.body,
            date: note.date.map(format_date),
            series,
            speaker,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccnotes_common::db::{init_memory_database, NoteFields, Series, SeriesFields, Speaker};

    async fn setup() -> (DetailPresenter, RecordStore<Note>, RecordStore<Series>) {
        let pool = init_memory_database().await.unwrap();
        let notes = RecordStore::new(pool.clone());
        let series = RecordStore::new(pool.clone());
        let speakers: RecordStore<Speaker> = RecordStore::new(pool);
        let relations = RelationResolver::new(series.clone(), speakers);
        (DetailPresenter::new(notes.clone(), relations), notes, series)
    }

    #[tokio::test]
    async fn test_detail_with_dangling_series_shows_placeholder() {
        let (presenter, notes, series) = setup().await;
        let s = series.create(&SeriesFields { title: "Romans".into() }).await.unwrap();
        let id = notes
            .create(&NoteFields {
                title: "Grace".into(),
                body: "<p>Body</p>".into(),
                series_id: Some(s),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(presenter.render_detail(id).await.unwrap().series, "Romans");

        series.delete(s).await.unwrap();
        let view = presenter.render_detail(id).await.unwrap();
        assert_eq!(view.series, "Unknown series");
        assert_eq!(view.speaker, "None");
        assert_eq!(view.body_html, "<p>Body</p>");
    }

    #[tokio::test]
    async fn test_detail_missing_is_not_found() {
        let (presenter, _, _) = setup().await;
        assert!(presenter.render_detail(3).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_home_empty_then_latest() {
        let (presenter, notes, _) = setup().await;
        assert_eq!(presenter.render_home().await.unwrap(), None);

        let fields = |title: &str| NoteFields {
            title: title.to_string(),
            body: "b".to_string(),
            ..Default::default()
        };
        notes.create(&fields("Older")).await.unwrap();
        let newer = notes.create(&fields("Newer")).await.unwrap();

        let home = presenter.render_home().await.unwrap().unwrap();
        assert_eq!(home.id, newer);
        assert_eq!(home.title, "Newer");
    }
}
