//! Listing presenter
//!
//! Turns ordered rows into table view-models. Ordering comes from the store
//! and is reproducible: recency ties fall back to id descending.

use ccnotes_common::db::Note;
use ccnotes_common::time::format_date;
use ccnotes_common::Result;

use crate::db::{ListOrder, RecordStore};
use crate::entity::Managed;

/// One table row with its action links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: i64,
    pub cells: Vec<String>,
    pub edit_href: String,
    pub remove_href: String,
}

/// A full listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexView {
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<RowView>,
    /// Number of rows listed
    pub count: usize,
    pub add_href: String,
}

/// A note entry in the archive of previous notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    pub id: i64,
    pub title: String,
    pub date: Option<String>,
    pub href: String,
}

pub struct ListingPresenter<T> {
    store: RecordStore<T>,
}

impl<T: Managed> ListingPresenter<T> {
    pub fn new(store: RecordStore<T>) -> Self {
        Self { store }
    }

    /// All rows, in the entity's listing order
    pub async fn render_index(&self) -> Result<IndexView> {
        let rows: Vec<RowView> = self
            .store
            .get_all(T::LISTING_ORDER)
            .await?
            .iter()
            .map(row_view)
            .collect();

        Ok(IndexView {
            title: T::PLURAL,
            headers: T::HEADERS,
            count: rows.len(),
            rows,
            add_href: format!("{}/add", T::PATH),
        })
    }

    /// The `n` most recent rows, newest first
    pub async fn render_latest(&self, n: u32) -> Result<Vec<RowView>> {
        Ok(self
            .store
            .get_latest(n)
            .await?
            .iter()
            .map(row_view)
            .collect())
    }
}

impl ListingPresenter<Note> {
    /// Every note, newest first, for the public archive
    pub async fn render_archive(&self) -> Result<Vec<NoteSummary>> {
        Ok(self
            .store
            .get_all(ListOrder::Latest)
            .await?
            .into_iter()
            .map(|note| NoteSummary {
                href: format!("/View/show_note/{}", note.id),
                id: note.id,
                title: note.title,
                date: note.date.map(format_date),
            })
            .collect())
    }
}

fn row_view<T: Managed>(record: &T) -> RowView {
    let id = record.id();
    RowView {
        id,
        cells: record.cells(),
        edit_href: format!("{}/edit/{}", T::PATH, id),
        remove_href: format!("{}/remove/{}", T::PATH, id),
    }
}
