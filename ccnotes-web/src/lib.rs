//! ccnotes-web library - notes, series and speakers with an admin UI
//!
//! Stores and the relation resolver are built once in [`AppState::new`] and
//! handed to each workflow or presenter a handler needs.

use axum::extract::DefaultBodyLimit;
use axum::Router;
use ccnotes_common::db::{Note, Series, Speaker};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod form;
pub mod presenter;
pub mod relations;
pub mod view;

pub use error::{ApiError, ApiResult};

use db::RecordStore;
use entity::Managed;
use form::FormWorkflow;
use presenter::{DetailPresenter, ListingPresenter};
use relations::RelationResolver;

/// Maximum accepted request body (2 MiB)
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub notes: RecordStore<Note>,
    pub series: RecordStore<Series>,
    pub speakers: RecordStore<Speaker>,
    pub relations: RelationResolver,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        let notes = RecordStore::new(db.clone());
        let series = RecordStore::new(db.clone());
        let speakers = RecordStore::new(db);
        let relations = RelationResolver::new(series.clone(), speakers.clone());
        Self {
            notes,
            series,
            speakers,
            relations,
        }
    }

    pub fn form<T>(&self) -> FormWorkflow<T>
    where
        T: Managed,
        Self: StoreProvider<T>,
    {
        FormWorkflow::new(StoreProvider::<T>::store(self), self.relations.clone())
    }

    pub fn listing<T>(&self) -> ListingPresenter<T>
    where
        T: Managed,
        Self: StoreProvider<T>,
    {
        ListingPresenter::new(StoreProvider::<T>::store(self))
    }

    pub fn detail(&self) -> DetailPresenter {
        DetailPresenter::new(self.notes.clone(), self.relations.clone())
    }
}

/// Access to the store of one record type
pub trait StoreProvider<T> {
    fn store(&self) -> RecordStore<T>;
}

impl StoreProvider<Note> for AppState {
    fn store(&self) -> RecordStore<Note> {
        self.notes.clone()
    }
}

impl StoreProvider<Series> for AppState {
    fn store(&self) -> RecordStore<Series> {
        self.series.clone()
    }
}

impl StoreProvider<Speaker> for AppState {
    fn store(&self) -> RecordStore<Speaker> {
        self.speakers.clone()
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::viewer_routes())
        .merge(api::admin_routes())
        .merge(api::health_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
